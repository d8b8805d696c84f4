/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The Lambda triggers attached to a user pool.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LambdaConfigType {
    /// <p>A pre-registration trigger.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_sign_up: ::std::option::Option<::std::string::String>,
    /// <p>A custom message trigger.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: ::std::option::Option<::std::string::String>,
    /// <p>A post-confirmation trigger.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_confirmation: ::std::option::Option<::std::string::String>,
    /// <p>A pre-authentication trigger.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_authentication: ::std::option::Option<::std::string::String>,
    /// <p>A post-authentication trigger.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_authentication: ::std::option::Option<::std::string::String>,
    /// <p>Defines the authentication challenge.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub define_auth_challenge: ::std::option::Option<::std::string::String>,
    /// <p>Creates an authentication challenge.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_auth_challenge: ::std::option::Option<::std::string::String>,
    /// <p>Verifies the authentication challenge response.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_auth_challenge_response: ::std::option::Option<::std::string::String>,
    /// <p>A trigger invoked before tokens are generated.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_token_generation: ::std::option::Option<::std::string::String>,
    /// <p>The user migration trigger.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_migration: ::std::option::Option<::std::string::String>,
    /// <p>The ARN of the KMS key used to encrypt codes sent to custom sender triggers.</p>
    #[serde(rename = "KMSKeyID", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: ::std::option::Option<::std::string::String>,
}
impl LambdaConfigType {
    /// <p>A pre-registration trigger.</p>
    pub fn pre_sign_up(&self) -> ::std::option::Option<&str> {
        self.pre_sign_up.as_deref()
    }

    /// <p>A custom message trigger.</p>
    pub fn custom_message(&self) -> ::std::option::Option<&str> {
        self.custom_message.as_deref()
    }

    /// <p>A post-confirmation trigger.</p>
    pub fn post_confirmation(&self) -> ::std::option::Option<&str> {
        self.post_confirmation.as_deref()
    }

    /// <p>A pre-authentication trigger.</p>
    pub fn pre_authentication(&self) -> ::std::option::Option<&str> {
        self.pre_authentication.as_deref()
    }

    /// <p>A post-authentication trigger.</p>
    pub fn post_authentication(&self) -> ::std::option::Option<&str> {
        self.post_authentication.as_deref()
    }

    /// <p>Defines the authentication challenge.</p>
    pub fn define_auth_challenge(&self) -> ::std::option::Option<&str> {
        self.define_auth_challenge.as_deref()
    }

    /// <p>Creates an authentication challenge.</p>
    pub fn create_auth_challenge(&self) -> ::std::option::Option<&str> {
        self.create_auth_challenge.as_deref()
    }

    /// <p>Verifies the authentication challenge response.</p>
    pub fn verify_auth_challenge_response(&self) -> ::std::option::Option<&str> {
        self.verify_auth_challenge_response.as_deref()
    }

    /// <p>A trigger invoked before tokens are generated.</p>
    pub fn pre_token_generation(&self) -> ::std::option::Option<&str> {
        self.pre_token_generation.as_deref()
    }

    /// <p>The user migration trigger.</p>
    pub fn user_migration(&self) -> ::std::option::Option<&str> {
        self.user_migration.as_deref()
    }

    /// <p>The ARN of the KMS key used to encrypt codes sent to custom sender triggers.</p>
    pub fn kms_key_id(&self) -> ::std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }
}
impl ::std::fmt::Display for LambdaConfigType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("PreSignUp", &self.pre_sign_up)
            .field("CustomMessage", &self.custom_message)
            .field("PostConfirmation", &self.post_confirmation)
            .field("PreAuthentication", &self.pre_authentication)
            .field("PostAuthentication", &self.post_authentication)
            .field("DefineAuthChallenge", &self.define_auth_challenge)
            .field("CreateAuthChallenge", &self.create_auth_challenge)
            .field("VerifyAuthChallengeResponse", &self.verify_auth_challenge_response)
            .field("PreTokenGeneration", &self.pre_token_generation)
            .field("UserMigration", &self.user_migration)
            .field("KMSKeyID", &self.kms_key_id)
            .finish()
    }
}
impl LambdaConfigType {
    /// Creates a new builder-style object to manufacture [`LambdaConfigType`](crate::types::LambdaConfigType).
    pub fn builder() -> crate::types::builders::LambdaConfigTypeBuilder {
        crate::types::builders::LambdaConfigTypeBuilder::default()
    }
}

/// A builder for [`LambdaConfigType`](crate::types::LambdaConfigType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct LambdaConfigTypeBuilder {
    pub(crate) pre_sign_up: ::std::option::Option<::std::string::String>,
    pub(crate) custom_message: ::std::option::Option<::std::string::String>,
    pub(crate) post_confirmation: ::std::option::Option<::std::string::String>,
    pub(crate) pre_authentication: ::std::option::Option<::std::string::String>,
    pub(crate) post_authentication: ::std::option::Option<::std::string::String>,
    pub(crate) define_auth_challenge: ::std::option::Option<::std::string::String>,
    pub(crate) create_auth_challenge: ::std::option::Option<::std::string::String>,
    pub(crate) verify_auth_challenge_response: ::std::option::Option<::std::string::String>,
    pub(crate) pre_token_generation: ::std::option::Option<::std::string::String>,
    pub(crate) user_migration: ::std::option::Option<::std::string::String>,
    pub(crate) kms_key_id: ::std::option::Option<::std::string::String>,
}
impl LambdaConfigTypeBuilder {
    /// <p>A pre-registration trigger.</p>
    pub fn pre_sign_up(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.pre_sign_up = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A pre-registration trigger.</p>
    pub fn set_pre_sign_up(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.pre_sign_up = input;
        self
    }
    /// <p>A pre-registration trigger.</p>
    pub fn get_pre_sign_up(&self) -> &::std::option::Option<::std::string::String> {
        &self.pre_sign_up
    }

    /// <p>A custom message trigger.</p>
    pub fn custom_message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.custom_message = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A custom message trigger.</p>
    pub fn set_custom_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.custom_message = input;
        self
    }
    /// <p>A custom message trigger.</p>
    pub fn get_custom_message(&self) -> &::std::option::Option<::std::string::String> {
        &self.custom_message
    }

    /// <p>A post-confirmation trigger.</p>
    pub fn post_confirmation(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.post_confirmation = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A post-confirmation trigger.</p>
    pub fn set_post_confirmation(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.post_confirmation = input;
        self
    }
    /// <p>A post-confirmation trigger.</p>
    pub fn get_post_confirmation(&self) -> &::std::option::Option<::std::string::String> {
        &self.post_confirmation
    }

    /// <p>A pre-authentication trigger.</p>
    pub fn pre_authentication(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.pre_authentication = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A pre-authentication trigger.</p>
    pub fn set_pre_authentication(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.pre_authentication = input;
        self
    }
    /// <p>A pre-authentication trigger.</p>
    pub fn get_pre_authentication(&self) -> &::std::option::Option<::std::string::String> {
        &self.pre_authentication
    }

    /// <p>A post-authentication trigger.</p>
    pub fn post_authentication(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.post_authentication = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A post-authentication trigger.</p>
    pub fn set_post_authentication(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.post_authentication = input;
        self
    }
    /// <p>A post-authentication trigger.</p>
    pub fn get_post_authentication(&self) -> &::std::option::Option<::std::string::String> {
        &self.post_authentication
    }

    /// <p>Defines the authentication challenge.</p>
    pub fn define_auth_challenge(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.define_auth_challenge = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Defines the authentication challenge.</p>
    pub fn set_define_auth_challenge(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.define_auth_challenge = input;
        self
    }
    /// <p>Defines the authentication challenge.</p>
    pub fn get_define_auth_challenge(&self) -> &::std::option::Option<::std::string::String> {
        &self.define_auth_challenge
    }

    /// <p>Creates an authentication challenge.</p>
    pub fn create_auth_challenge(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.create_auth_challenge = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Creates an authentication challenge.</p>
    pub fn set_create_auth_challenge(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.create_auth_challenge = input;
        self
    }
    /// <p>Creates an authentication challenge.</p>
    pub fn get_create_auth_challenge(&self) -> &::std::option::Option<::std::string::String> {
        &self.create_auth_challenge
    }

    /// <p>Verifies the authentication challenge response.</p>
    pub fn verify_auth_challenge_response(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.verify_auth_challenge_response = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Verifies the authentication challenge response.</p>
    pub fn set_verify_auth_challenge_response(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.verify_auth_challenge_response = input;
        self
    }
    /// <p>Verifies the authentication challenge response.</p>
    pub fn get_verify_auth_challenge_response(&self) -> &::std::option::Option<::std::string::String> {
        &self.verify_auth_challenge_response
    }

    /// <p>A trigger invoked before tokens are generated.</p>
    pub fn pre_token_generation(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.pre_token_generation = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A trigger invoked before tokens are generated.</p>
    pub fn set_pre_token_generation(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.pre_token_generation = input;
        self
    }
    /// <p>A trigger invoked before tokens are generated.</p>
    pub fn get_pre_token_generation(&self) -> &::std::option::Option<::std::string::String> {
        &self.pre_token_generation
    }

    /// <p>The user migration trigger.</p>
    pub fn user_migration(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.user_migration = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The user migration trigger.</p>
    pub fn set_user_migration(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.user_migration = input;
        self
    }
    /// <p>The user migration trigger.</p>
    pub fn get_user_migration(&self) -> &::std::option::Option<::std::string::String> {
        &self.user_migration
    }

    /// <p>The ARN of the KMS key used to encrypt codes sent to custom sender triggers.</p>
    pub fn kms_key_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.kms_key_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ARN of the KMS key used to encrypt codes sent to custom sender triggers.</p>
    pub fn set_kms_key_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.kms_key_id = input;
        self
    }
    /// <p>The ARN of the KMS key used to encrypt codes sent to custom sender triggers.</p>
    pub fn get_kms_key_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.kms_key_id
    }
    /// Consumes the builder and constructs a [`LambdaConfigType`](crate::types::LambdaConfigType).
    pub fn build(self) -> crate::types::LambdaConfigType {
        crate::types::LambdaConfigType {
            pre_sign_up: self.pre_sign_up,
            custom_message: self.custom_message,
            post_confirmation: self.post_confirmation,
            pre_authentication: self.pre_authentication,
            post_authentication: self.post_authentication,
            define_auth_challenge: self.define_auth_challenge,
            create_auth_challenge: self.create_auth_challenge,
            verify_auth_challenge_response: self.verify_auth_challenge_response,
            pre_token_generation: self.pre_token_generation,
            user_migration: self.user_migration,
            kms_key_id: self.kms_key_id,
        }
    }
}
