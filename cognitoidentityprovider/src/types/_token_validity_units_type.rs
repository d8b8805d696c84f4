/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The units that token validity periods of an app client are expressed in.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TokenValidityUnitsType {
    /// <p>The unit of <code>AccessTokenValidity</code>. Defaults to hours.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: ::std::option::Option<crate::types::TimeUnitsType>,
    /// <p>The unit of <code>IdTokenValidity</code>. Defaults to hours.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: ::std::option::Option<crate::types::TimeUnitsType>,
    /// <p>The unit of <code>RefreshTokenValidity</code>. Defaults to days.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: ::std::option::Option<crate::types::TimeUnitsType>,
}
impl TokenValidityUnitsType {
    /// <p>The unit of <code>AccessTokenValidity</code>. Defaults to hours.</p>
    pub fn access_token(&self) -> ::std::option::Option<&crate::types::TimeUnitsType> {
        self.access_token.as_ref()
    }

    /// <p>The unit of <code>IdTokenValidity</code>. Defaults to hours.</p>
    pub fn id_token(&self) -> ::std::option::Option<&crate::types::TimeUnitsType> {
        self.id_token.as_ref()
    }

    /// <p>The unit of <code>RefreshTokenValidity</code>. Defaults to days.</p>
    pub fn refresh_token(&self) -> ::std::option::Option<&crate::types::TimeUnitsType> {
        self.refresh_token.as_ref()
    }
}
impl ::std::fmt::Display for TokenValidityUnitsType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("AccessToken", &self.access_token)
            .field("IdToken", &self.id_token)
            .field("RefreshToken", &self.refresh_token)
            .finish()
    }
}
impl TokenValidityUnitsType {
    /// Creates a new builder-style object to manufacture [`TokenValidityUnitsType`](crate::types::TokenValidityUnitsType).
    pub fn builder() -> crate::types::builders::TokenValidityUnitsTypeBuilder {
        crate::types::builders::TokenValidityUnitsTypeBuilder::default()
    }
}

/// A builder for [`TokenValidityUnitsType`](crate::types::TokenValidityUnitsType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct TokenValidityUnitsTypeBuilder {
    pub(crate) access_token: ::std::option::Option<crate::types::TimeUnitsType>,
    pub(crate) id_token: ::std::option::Option<crate::types::TimeUnitsType>,
    pub(crate) refresh_token: ::std::option::Option<crate::types::TimeUnitsType>,
}
impl TokenValidityUnitsTypeBuilder {
    /// <p>The unit of <code>AccessTokenValidity</code>. Defaults to hours.</p>
    pub fn access_token(mut self, input: impl ::std::convert::Into<crate::types::TimeUnitsType>) -> Self {
        self.access_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The unit of <code>AccessTokenValidity</code>. Defaults to hours.</p>
    pub fn set_access_token(mut self, input: ::std::option::Option<crate::types::TimeUnitsType>) -> Self {
        self.access_token = input;
        self
    }
    /// <p>The unit of <code>AccessTokenValidity</code>. Defaults to hours.</p>
    pub fn get_access_token(&self) -> &::std::option::Option<crate::types::TimeUnitsType> {
        &self.access_token
    }

    /// <p>The unit of <code>IdTokenValidity</code>. Defaults to hours.</p>
    pub fn id_token(mut self, input: impl ::std::convert::Into<crate::types::TimeUnitsType>) -> Self {
        self.id_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The unit of <code>IdTokenValidity</code>. Defaults to hours.</p>
    pub fn set_id_token(mut self, input: ::std::option::Option<crate::types::TimeUnitsType>) -> Self {
        self.id_token = input;
        self
    }
    /// <p>The unit of <code>IdTokenValidity</code>. Defaults to hours.</p>
    pub fn get_id_token(&self) -> &::std::option::Option<crate::types::TimeUnitsType> {
        &self.id_token
    }

    /// <p>The unit of <code>RefreshTokenValidity</code>. Defaults to days.</p>
    pub fn refresh_token(mut self, input: impl ::std::convert::Into<crate::types::TimeUnitsType>) -> Self {
        self.refresh_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The unit of <code>RefreshTokenValidity</code>. Defaults to days.</p>
    pub fn set_refresh_token(mut self, input: ::std::option::Option<crate::types::TimeUnitsType>) -> Self {
        self.refresh_token = input;
        self
    }
    /// <p>The unit of <code>RefreshTokenValidity</code>. Defaults to days.</p>
    pub fn get_refresh_token(&self) -> &::std::option::Option<crate::types::TimeUnitsType> {
        &self.refresh_token
    }
    /// Consumes the builder and constructs a [`TokenValidityUnitsType`](crate::types::TokenValidityUnitsType).
    pub fn build(self) -> crate::types::TokenValidityUnitsType {
        crate::types::TokenValidityUnitsType {
            access_token: self.access_token,
            id_token: self.id_token,
            refresh_token: self.refresh_token,
        }
    }
}
