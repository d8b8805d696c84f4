/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use cognitoidentityprovider::operation::admin_get_user::AdminGetUserOutput;
use cognitoidentityprovider::operation::admin_update_user_attributes::AdminUpdateUserAttributesInput;
use cognitoidentityprovider::operation::describe_user_pool::DescribeUserPoolOutput;
use cognitoidentityprovider::primitives::DateTime;
use cognitoidentityprovider::types::{
    ExplicitAuthFlowsType, LambdaConfigType, OAuthFlowType, StatusType, UserPoolClientType,
    UserStatusType,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn members_use_wire_names() {
    let client = UserPoolClientType::builder()
        .client_name("web")
        .callback_urls("https://example.com/callback")
        .logout_urls("https://example.com/logout")
        .default_redirect_uri("https://example.com/callback")
        .allowed_o_auth_flows(OAuthFlowType::Code)
        .allowed_o_auth_flows_user_pool_client(true)
        .explicit_auth_flows("ALLOW_USER_SRP_AUTH")
        .build();
    assert_eq!(
        serde_json::to_value(&client).unwrap(),
        json!({
            "ClientName": "web",
            "CallbackURLs": ["https://example.com/callback"],
            "LogoutURLs": ["https://example.com/logout"],
            "DefaultRedirectURI": "https://example.com/callback",
            "AllowedOAuthFlows": ["code"],
            "AllowedOAuthFlowsUserPoolClient": true,
            "ExplicitAuthFlows": ["ALLOW_USER_SRP_AUTH"]
        })
    );
    assert_eq!(
        client.explicit_auth_flows(),
        &[ExplicitAuthFlowsType::AllowUserSrpAuth]
    );

    let lambda = LambdaConfigType::builder()
        .kms_key_id("arn:aws:kms:us-east-1:111122223333:key/example")
        .build();
    assert_eq!(
        serde_json::to_value(&lambda).unwrap(),
        json!({ "KMSKeyID": "arn:aws:kms:us-east-1:111122223333:key/example" })
    );
}

#[test]
fn absent_and_empty_members_stay_distinct() {
    let absent = AdminUpdateUserAttributesInput::builder()
        .user_pool_id("pool")
        .build()
        .unwrap();
    let empty = AdminUpdateUserAttributesInput::builder()
        .user_pool_id("pool")
        .set_user_attributes(Some(vec![]))
        .set_client_metadata(Some(Default::default()))
        .build()
        .unwrap();
    assert_ne!(absent, empty);
    assert_eq!(
        serde_json::to_value(&absent).unwrap(),
        json!({ "UserPoolId": "pool" })
    );
    assert_eq!(
        serde_json::to_value(&empty).unwrap(),
        json!({ "UserPoolId": "pool", "UserAttributes": [], "ClientMetadata": {} })
    );

    let parsed: AdminUpdateUserAttributesInput =
        serde_json::from_value(json!({ "UserPoolId": "pool", "UserAttributes": [] })).unwrap();
    assert_eq!(parsed.user_attributes, Some(vec![]));
    assert_eq!(parsed.client_metadata, None);
}

#[test]
fn parses_a_full_response() {
    let output: AdminGetUserOutput = serde_json::from_value(json!({
        "Username": "jane",
        "UserAttributes": [{ "Name": "sub", "Value": "1234" }],
        "UserCreateDate": 1600000000.5,
        "Enabled": true,
        "UserStatus": "FORCE_CHANGE_PASSWORD",
        "MFAOptions": [{ "DeliveryMedium": "SMS", "AttributeName": "phone_number" }],
        "PreferredMfaSetting": "SMS_MFA",
        "UserMFASettingList": ["SMS_MFA"],
        "SomeFutureMember": { "ignored": true }
    }))
    .unwrap();
    assert_eq!(output.user_status(), Some(&UserStatusType::ForceChangePassword));
    assert_eq!(
        output.user_create_date(),
        Some(&DateTime::from_secs_f64(1600000000.5))
    );
    assert_eq!(output.mfa_options().len(), 1);
    assert_eq!(output.mfa_options()[0].attribute_name(), Some("phone_number"));
    assert_eq!(output.user_mfa_setting_list(), &["SMS_MFA".to_string()]);
    assert_eq!(output.user_last_modified_date(), None);
}

#[test]
fn unknown_user_status_is_a_known_value() {
    let output: AdminGetUserOutput =
        serde_json::from_value(json!({ "UserStatus": "UNKNOWN" })).unwrap();
    assert_eq!(output.user_status(), Some(&UserStatusType::UnknownValue));
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({ "UserStatus": "UNKNOWN" })
    );
}

#[test]
fn nested_shapes_and_maps_round_trip() {
    let value = json!({
        "UserPool": {
            "Id": "us-east-1_Example",
            "Status": "Enabled",
            "LambdaConfig": { "PreSignUp": "arn:aws:lambda:us-east-1:111122223333:function:pre" },
            "UserPoolTags": { "team": "identity", "env": "test" },
            "AutoVerifiedAttributes": ["email"],
            "CreationDate": 1500000000.0
        }
    });
    let output: DescribeUserPoolOutput = serde_json::from_value(value.clone()).unwrap();
    let pool = output.user_pool().expect("user pool");
    assert_eq!(pool.status(), Some(&StatusType::Enabled));
    assert_eq!(
        pool.user_pool_tags().and_then(|tags| tags.get("team")).map(String::as_str),
        Some("identity")
    );
    assert_eq!(serde_json::to_value(&output).unwrap(), value);
}

proptest! {
    #[test]
    fn unrecognised_enum_values_round_trip(status in "[A-Z_]{1,16}") {
        let parsed: UserStatusType = serde_json::from_value(json!(status)).unwrap();
        prop_assert_eq!(parsed.as_str(), status.as_str());
        prop_assert_eq!(serde_json::to_value(&parsed).unwrap(), json!(status));
        prop_assert_eq!(String::from(parsed.clone()), status.clone());
        prop_assert_eq!(parsed.to_string(), status);
    }
}
