/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use cognitoidentityprovider::operation::admin_initiate_auth::AdminInitiateAuthInput;
use cognitoidentityprovider::operation::initiate_auth::InitiateAuthOutput;
use cognitoidentityprovider::operation::sign_up::SignUpInput;
use cognitoidentityprovider::types::{
    AttributeType, AuthenticationResultType, UserStatusType, UserType,
};

const REDACTED: &str = "*** Sensitive Data Redacted ***";

#[test]
fn debug_redacts_sensitive_members() {
    let attribute = AttributeType::builder()
        .name("email")
        .value("jane@example.com")
        .build();
    assert_eq!(
        format!("{:?}", attribute),
        "AttributeType { name: Some(\"email\"), value: \"*** Sensitive Data Redacted ***\" }"
    );

    let builder = SignUpInput::builder()
        .client_id("client")
        .password("hunter2");
    let debug = format!("{:?}", builder);
    assert!(!debug.contains("hunter2"), "{}", debug);
    assert!(debug.starts_with("SignUpInputBuilder {"), "{}", debug);
}

#[test]
fn display_redacts_sensitive_members() {
    let input = SignUpInput::builder()
        .client_id("client")
        .username("jane")
        .password("hunter2")
        .user_attributes(
            AttributeType::builder()
                .name("email")
                .value("jane@example.com")
                .build(),
        )
        .build()
        .unwrap();
    assert_eq!(
        input.to_string(),
        format!(
            "{{ClientId: {r},Username: {r},Password: {r},UserAttributes: [{{Name: email,Value: {r}}}]}}",
            r = REDACTED
        )
    );
}

#[test]
fn sensitive_maps_are_redacted_as_a_whole() {
    let input = AdminInitiateAuthInput::builder()
        .user_pool_id("us-east-1_Example")
        .auth_flow("ADMIN_USER_PASSWORD_AUTH")
        .auth_parameters("USERNAME", "jane")
        .unwrap()
        .auth_parameters("PASSWORD", "hunter2")
        .unwrap()
        .client_metadata("source", "tests")
        .unwrap()
        .build()
        .unwrap();
    let rendered = input.to_string();
    assert!(!rendered.contains("hunter2"), "{}", rendered);
    assert_eq!(
        rendered,
        format!(
            "{{UserPoolId: us-east-1_Example,AuthFlow: ADMIN_USER_PASSWORD_AUTH,AuthParameters: {},ClientMetadata: {{source=tests}}}}",
            REDACTED
        )
    );
    // the values are still reachable through the accessors
    assert_eq!(
        input
            .auth_parameters()
            .and_then(|params| params.get("PASSWORD"))
            .map(String::as_str),
        Some("hunter2")
    );
}

#[test]
fn nested_tokens_are_redacted() {
    let output = InitiateAuthOutput::builder()
        .authentication_result(
            AuthenticationResultType::builder()
                .access_token("access")
                .id_token("id")
                .refresh_token("refresh")
                .expires_in(3600)
                .token_type("Bearer")
                .build(),
        )
        .build();
    let rendered = output.to_string();
    let debug = format!("{:?}", output);
    for secret in ["\"access\"", "\"refresh\"", "\"id\""] {
        assert!(!debug.contains(secret), "{}", debug);
    }
    assert_eq!(
        rendered,
        format!(
            "{{AuthenticationResult: {{AccessToken: {r},ExpiresIn: 3600,TokenType: Bearer,RefreshToken: {r},IdToken: {r}}}}}",
            r = REDACTED
        )
    );
}

#[test]
fn user_rendering_omits_absent_members() {
    let user = UserType::builder()
        .username("jane")
        .enabled(true)
        .user_status(UserStatusType::Confirmed)
        .build();
    assert_eq!(
        user.to_string(),
        format!("{{Username: {},Enabled: true,UserStatus: CONFIRMED}}", REDACTED)
    );
}
