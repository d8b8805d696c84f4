/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Confirms the registration of a user with the code they received.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConfirmSignUpInput {
    /// <p>The ID of the app client.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: ::std::option::Option<::std::string::String>,
    /// <p>A keyed-hash message authentication code computed from the username, app client ID and app client secret.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_hash: ::std::option::Option<::std::string::String>,
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: ::std::option::Option<::std::string::String>,
    /// <p>The confirmation code sent to the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_code: ::std::option::Option<::std::string::String>,
    /// <p>Whether to move an alias that already belongs to another user to this user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_alias_creation: ::std::option::Option<bool>,
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
}
impl ConfirmSignUpInput {
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

    /// <p>The confirmation code sent to the user.</p>
    pub fn confirmation_code(&self) -> ::std::option::Option<&str> {
        self.confirmation_code.as_deref()
    }

    /// <p>Whether to move an alias that already belongs to another user to this user.</p>
    pub fn force_alias_creation(&self) -> ::std::option::Option<bool> {
        self.force_alias_creation
    }

    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn client_metadata(&self) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        self.client_metadata.as_ref()
    }
}
impl ::std::fmt::Debug for ConfirmSignUpInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("ConfirmSignUpInput");
        formatter.field("client_id", &"*** Sensitive Data Redacted ***");
        formatter.field("secret_hash", &"*** Sensitive Data Redacted ***");
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("confirmation_code", &self.confirmation_code);
        formatter.field("force_alias_creation", &self.force_alias_creation);
        formatter.field("client_metadata", &self.client_metadata);
        formatter.finish()
    }
}
impl ::std::fmt::Display for ConfirmSignUpInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .sensitive("ClientId", &self.client_id)
            .sensitive("SecretHash", &self.secret_hash)
            .sensitive("Username", &self.username)
            .field("ConfirmationCode", &self.confirmation_code)
            .field("ForceAliasCreation", &self.force_alias_creation)
            .map("ClientMetadata", &self.client_metadata)
            .finish()
    }
}
impl ConfirmSignUpInput {
    /// Creates a new builder-style object to manufacture [`ConfirmSignUpInput`](crate::operation::confirm_sign_up::ConfirmSignUpInput).
    pub fn builder() -> crate::operation::confirm_sign_up::builders::ConfirmSignUpInputBuilder {
        crate::operation::confirm_sign_up::builders::ConfirmSignUpInputBuilder::default()
    }
}

/// A builder for [`ConfirmSignUpInput`](crate::operation::confirm_sign_up::ConfirmSignUpInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct ConfirmSignUpInputBuilder {
    pub(crate) client_id: ::std::option::Option<::std::string::String>,
    pub(crate) secret_hash: ::std::option::Option<::std::string::String>,
    pub(crate) username: ::std::option::Option<::std::string::String>,
    pub(crate) confirmation_code: ::std::option::Option<::std::string::String>,
    pub(crate) force_alias_creation: ::std::option::Option<bool>,
    pub(crate) client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
}
impl ConfirmSignUpInputBuilder {
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

    /// <p>The confirmation code sent to the user.</p>
    pub fn confirmation_code(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.confirmation_code = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The confirmation code sent to the user.</p>
    pub fn set_confirmation_code(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.confirmation_code = input;
        self
    }
    /// <p>The confirmation code sent to the user.</p>
    pub fn get_confirmation_code(&self) -> &::std::option::Option<::std::string::String> {
        &self.confirmation_code
    }

    /// <p>Whether to move an alias that already belongs to another user to this user.</p>
    pub fn force_alias_creation(mut self, input: bool) -> Self {
        self.force_alias_creation = ::std::option::Option::Some(input);
        self
    }
    /// <p>Whether to move an alias that already belongs to another user to this user.</p>
    pub fn set_force_alias_creation(mut self, input: ::std::option::Option<bool>) -> Self {
        self.force_alias_creation = input;
        self
    }
    /// <p>Whether to move an alias that already belongs to another user to this user.</p>
    pub fn get_force_alias_creation(&self) -> &::std::option::Option<bool> {
        &self.force_alias_creation
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
    /// Consumes the builder and constructs a [`ConfirmSignUpInput`](crate::operation::confirm_sign_up::ConfirmSignUpInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::confirm_sign_up::ConfirmSignUpInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::confirm_sign_up::ConfirmSignUpInput {
            client_id: self.client_id,
            secret_hash: self.secret_hash,
            username: self.username,
            confirmation_code: self.confirmation_code,
            force_alias_creation: self.force_alias_creation,
            client_metadata: self.client_metadata,
        })
    }
}
impl ::std::fmt::Debug for ConfirmSignUpInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("ConfirmSignUpInputBuilder");
        formatter.field("client_id", &"*** Sensitive Data Redacted ***");
        formatter.field("secret_hash", &"*** Sensitive Data Redacted ***");
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("confirmation_code", &self.confirmation_code);
        formatter.field("force_alias_creation", &self.force_alias_creation);
        formatter.field("client_metadata", &self.client_metadata);
        formatter.finish()
    }
}
