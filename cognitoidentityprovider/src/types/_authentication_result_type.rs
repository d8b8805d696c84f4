/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The tokens issued by a successful authentication.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AuthenticationResultType {
    /// <p>The access token.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: ::std::option::Option<::std::string::String>,
    /// <p>The number of seconds the access token is valid for.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: ::std::option::Option<i32>,
    /// <p>The type of the tokens, usually <code>Bearer</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: ::std::option::Option<::std::string::String>,
    /// <p>The refresh token.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: ::std::option::Option<::std::string::String>,
    /// <p>The ID token.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: ::std::option::Option<::std::string::String>,
    /// <p>Metadata of a newly remembered device.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_device_metadata: ::std::option::Option<crate::types::NewDeviceMetadataType>,
}
impl AuthenticationResultType {
    /// <p>The access token.</p>
    pub fn access_token(&self) -> ::std::option::Option<&str> {
        self.access_token.as_deref()
    }

    /// <p>The number of seconds the access token is valid for.</p>
    pub fn expires_in(&self) -> ::std::option::Option<i32> {
        self.expires_in
    }

    /// <p>The type of the tokens, usually <code>Bearer</code>.</p>
    pub fn token_type(&self) -> ::std::option::Option<&str> {
        self.token_type.as_deref()
    }

    /// <p>The refresh token.</p>
    pub fn refresh_token(&self) -> ::std::option::Option<&str> {
        self.refresh_token.as_deref()
    }

    /// <p>The ID token.</p>
    pub fn id_token(&self) -> ::std::option::Option<&str> {
        self.id_token.as_deref()
    }

    /// <p>Metadata of a newly remembered device.</p>
    pub fn new_device_metadata(&self) -> ::std::option::Option<&crate::types::NewDeviceMetadataType> {
        self.new_device_metadata.as_ref()
    }
}
impl ::std::fmt::Debug for AuthenticationResultType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AuthenticationResultType");
        formatter.field("access_token", &"*** Sensitive Data Redacted ***");
        formatter.field("expires_in", &self.expires_in);
        formatter.field("token_type", &self.token_type);
        formatter.field("refresh_token", &"*** Sensitive Data Redacted ***");
        formatter.field("id_token", &"*** Sensitive Data Redacted ***");
        formatter.field("new_device_metadata", &self.new_device_metadata);
        formatter.finish()
    }
}
impl ::std::fmt::Display for AuthenticationResultType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .sensitive("AccessToken", &self.access_token)
            .field("ExpiresIn", &self.expires_in)
            .field("TokenType", &self.token_type)
            .sensitive("RefreshToken", &self.refresh_token)
            .sensitive("IdToken", &self.id_token)
            .field("NewDeviceMetadata", &self.new_device_metadata)
            .finish()
    }
}
impl AuthenticationResultType {
    /// Creates a new builder-style object to manufacture [`AuthenticationResultType`](crate::types::AuthenticationResultType).
    pub fn builder() -> crate::types::builders::AuthenticationResultTypeBuilder {
        crate::types::builders::AuthenticationResultTypeBuilder::default()
    }
}

/// A builder for [`AuthenticationResultType`](crate::types::AuthenticationResultType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct AuthenticationResultTypeBuilder {
    pub(crate) access_token: ::std::option::Option<::std::string::String>,
    pub(crate) expires_in: ::std::option::Option<i32>,
    pub(crate) token_type: ::std::option::Option<::std::string::String>,
    pub(crate) refresh_token: ::std::option::Option<::std::string::String>,
    pub(crate) id_token: ::std::option::Option<::std::string::String>,
    pub(crate) new_device_metadata: ::std::option::Option<crate::types::NewDeviceMetadataType>,
}
impl AuthenticationResultTypeBuilder {
    /// <p>The access token.</p>
    pub fn access_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.access_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The access token.</p>
    pub fn set_access_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.access_token = input;
        self
    }
    /// <p>The access token.</p>
    pub fn get_access_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.access_token
    }

    /// <p>The number of seconds the access token is valid for.</p>
    pub fn expires_in(mut self, input: i32) -> Self {
        self.expires_in = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of seconds the access token is valid for.</p>
    pub fn set_expires_in(mut self, input: ::std::option::Option<i32>) -> Self {
        self.expires_in = input;
        self
    }
    /// <p>The number of seconds the access token is valid for.</p>
    pub fn get_expires_in(&self) -> &::std::option::Option<i32> {
        &self.expires_in
    }

    /// <p>The type of the tokens, usually <code>Bearer</code>.</p>
    pub fn token_type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.token_type = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The type of the tokens, usually <code>Bearer</code>.</p>
    pub fn set_token_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.token_type = input;
        self
    }
    /// <p>The type of the tokens, usually <code>Bearer</code>.</p>
    pub fn get_token_type(&self) -> &::std::option::Option<::std::string::String> {
        &self.token_type
    }

    /// <p>The refresh token.</p>
    pub fn refresh_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.refresh_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The refresh token.</p>
    pub fn set_refresh_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.refresh_token = input;
        self
    }
    /// <p>The refresh token.</p>
    pub fn get_refresh_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.refresh_token
    }

    /// <p>The ID token.</p>
    pub fn id_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.id_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID token.</p>
    pub fn set_id_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.id_token = input;
        self
    }
    /// <p>The ID token.</p>
    pub fn get_id_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.id_token
    }

    /// <p>Metadata of a newly remembered device.</p>
    pub fn new_device_metadata(mut self, input: crate::types::NewDeviceMetadataType) -> Self {
        self.new_device_metadata = ::std::option::Option::Some(input);
        self
    }
    /// <p>Metadata of a newly remembered device.</p>
    pub fn set_new_device_metadata(mut self, input: ::std::option::Option<crate::types::NewDeviceMetadataType>) -> Self {
        self.new_device_metadata = input;
        self
    }
    /// <p>Metadata of a newly remembered device.</p>
    pub fn get_new_device_metadata(&self) -> &::std::option::Option<crate::types::NewDeviceMetadataType> {
        &self.new_device_metadata
    }
    /// Consumes the builder and constructs a [`AuthenticationResultType`](crate::types::AuthenticationResultType).
    pub fn build(self) -> crate::types::AuthenticationResultType {
        crate::types::AuthenticationResultType {
            access_token: self.access_token,
            expires_in: self.expires_in,
            token_type: self.token_type,
            refresh_token: self.refresh_token,
            id_token: self.id_token,
            new_device_metadata: self.new_device_metadata,
        }
    }
}
impl ::std::fmt::Debug for AuthenticationResultTypeBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AuthenticationResultTypeBuilder");
        formatter.field("access_token", &"*** Sensitive Data Redacted ***");
        formatter.field("expires_in", &self.expires_in);
        formatter.field("token_type", &self.token_type);
        formatter.field("refresh_token", &"*** Sensitive Data Redacted ***");
        formatter.field("id_token", &"*** Sensitive Data Redacted ***");
        formatter.field("new_device_metadata", &self.new_device_metadata);
        formatter.finish()
    }
}
