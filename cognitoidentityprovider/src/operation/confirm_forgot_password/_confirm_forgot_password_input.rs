/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Sets a new password with a password reset code.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConfirmForgotPasswordInput {
    /// <p>The ID of the app client.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: ::std::option::Option<::std::string::String>,
    /// <p>A keyed-hash message authentication code computed from the username, app client ID and app client secret.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_hash: ::std::option::Option<::std::string::String>,
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: ::std::option::Option<::std::string::String>,
    /// <p>The reset code sent to the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_code: ::std::option::Option<::std::string::String>,
    /// <p>The new password.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: ::std::option::Option<::std::string::String>,
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
}
impl ConfirmForgotPasswordInput {
    /// <p>The ID of the app client.</p>
    pub fn client_id(&self) -> ::std::option::Option<&str> {
        self.client_id.as_deref()
    }

    /// <p>A keyed-hash message authentication code computed from the username, app client ID and app client secret.</p>
    pub fn secret_hash(&self) -> ::std::option::Option<&str> {
        self.secret_hash.as_deref()
    }

    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn username(&self) -> ::std::option::Option<&str> {
        self.username.as_deref()
    }

    /// <p>The reset code sent to the user.</p>
    pub fn confirmation_code(&self) -> ::std::option::Option<&str> {
        self.confirmation_code.as_deref()
    }

    /// <p>The new password.</p>
    pub fn password(&self) -> ::std::option::Option<&str> {
        self.password.as_deref()
    }

    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn client_metadata(&self) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        self.client_metadata.as_ref()
    }
}
impl ::std::fmt::Debug for ConfirmForgotPasswordInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("ConfirmForgotPasswordInput");
        formatter.field("client_id", &"*** Sensitive Data Redacted ***");
        formatter.field("secret_hash", &"*** Sensitive Data Redacted ***");
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("confirmation_code", &self.confirmation_code);
        formatter.field("password", &"*** Sensitive Data Redacted ***");
        formatter.field("client_metadata", &self.client_metadata);
        formatter.finish()
    }
}
impl ::std::fmt::Display for ConfirmForgotPasswordInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .sensitive("ClientId", &self.client_id)
            .sensitive("SecretHash", &self.secret_hash)
            .sensitive("Username", &self.username)
            .field("ConfirmationCode", &self.confirmation_code)
            .sensitive("Password", &self.password)
            .map("ClientMetadata", &self.client_metadata)
            .finish()
    }
}
impl ConfirmForgotPasswordInput {
    /// Creates a new builder-style object to manufacture [`ConfirmForgotPasswordInput`](crate::operation::confirm_forgot_password::ConfirmForgotPasswordInput).
    pub fn builder() -> crate::operation::confirm_forgot_password::builders::ConfirmForgotPasswordInputBuilder {
        crate::operation::confirm_forgot_password::builders::ConfirmForgotPasswordInputBuilder::default()
    }
}

/// A builder for [`ConfirmForgotPasswordInput`](crate::operation::confirm_forgot_password::ConfirmForgotPasswordInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct ConfirmForgotPasswordInputBuilder {
    pub(crate) client_id: ::std::option::Option<::std::string::String>,
    pub(crate) secret_hash: ::std::option::Option<::std::string::String>,
    pub(crate) username: ::std::option::Option<::std::string::String>,
    pub(crate) confirmation_code: ::std::option::Option<::std::string::String>,
    pub(crate) password: ::std::option::Option<::std::string::String>,
    pub(crate) client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
}
impl ConfirmForgotPasswordInputBuilder {
    /// <p>The ID of the app client.</p>
    pub fn client_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.client_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID of the app client.</p>
    pub fn set_client_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.client_id = input;
        self
    }
    /// <p>The ID of the app client.</p>
    pub fn get_client_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.client_id
    }

    /// <p>A keyed-hash message authentication code computed from the username, app client ID and app client secret.</p>
    pub fn secret_hash(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.secret_hash = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A keyed-hash message authentication code computed from the username, app client ID and app client secret.</p>
    pub fn set_secret_hash(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.secret_hash = input;
        self
    }
    /// <p>A keyed-hash message authentication code computed from the username, app client ID and app client secret.</p>
    pub fn get_secret_hash(&self) -> &::std::option::Option<::std::string::String> {
        &self.secret_hash
    }

    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn username(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.username = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn set_username(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.username = input;
        self
    }
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn get_username(&self) -> &::std::option::Option<::std::string::String> {
        &self.username
    }

    /// <p>The reset code sent to the user.</p>
    pub fn confirmation_code(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.confirmation_code = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The reset code sent to the user.</p>
    pub fn set_confirmation_code(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.confirmation_code = input;
        self
    }
    /// <p>The reset code sent to the user.</p>
    pub fn get_confirmation_code(&self) -> &::std::option::Option<::std::string::String> {
        &self.confirmation_code
    }

    /// <p>The new password.</p>
    pub fn password(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.password = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The new password.</p>
    pub fn set_password(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.password = input;
        self
    }
    /// <p>The new password.</p>
    pub fn get_password(&self) -> &::std::option::Option<::std::string::String> {
        &self.password
    }

    /// Adds a key-value pair to `client_metadata`, failing if `k` is already present.
    ///
    /// To override the contents of this collection use [`set_client_metadata`](Self::set_client_metadata).
    ///
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn client_metadata(
        mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<Self, crate::error::DuplicateKeyError> {
        self.add_client_metadata_entry(k, v)?;
        ::std::result::Result::Ok(self)
    }
    /// Adds a key-value pair to `client_metadata` in place, failing if `k` is already present.
    pub fn add_client_metadata_entry(
        &mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<&mut Self, crate::error::DuplicateKeyError> {
        crate::collections::insert_unique(&mut self.client_metadata, "ClientMetadata", k.into(), v.into())?;
        ::std::result::Result::Ok(self)
    }
    /// Removes every entry of `client_metadata`, leaving it absent.
    pub fn clear_client_metadata_entries(&mut self) -> &mut Self {
        self.client_metadata = ::std::option::Option::None;
        self
    }
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn set_client_metadata(mut self, input: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>) -> Self {
        self.client_metadata = input;
        self
    }
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn get_client_metadata(&self) -> &::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        &self.client_metadata
    }
    /// Consumes the builder and constructs a [`ConfirmForgotPasswordInput`](crate::operation::confirm_forgot_password::ConfirmForgotPasswordInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::confirm_forgot_password::ConfirmForgotPasswordInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::confirm_forgot_password::ConfirmForgotPasswordInput {
            client_id: self.client_id,
            secret_hash: self.secret_hash,
            username: self.username,
            confirmation_code: self.confirmation_code,
            password: self.password,
            client_metadata: self.client_metadata,
        })
    }
}
impl ::std::fmt::Debug for ConfirmForgotPasswordInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("ConfirmForgotPasswordInputBuilder");
        formatter.field("client_id", &"*** Sensitive Data Redacted ***");
        formatter.field("secret_hash", &"*** Sensitive Data Redacted ***");
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("confirmation_code", &self.confirmation_code);
        formatter.field("password", &"*** Sensitive Data Redacted ***");
        formatter.field("client_metadata", &self.client_metadata);
        formatter.finish()
    }
}
