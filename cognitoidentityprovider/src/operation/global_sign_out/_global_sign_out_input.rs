/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Signs the user out of every device by revoking their refresh tokens.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GlobalSignOutInput {
    /// <p>A valid access token issued to the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: ::std::option::Option<::std::string::String>,
}
impl GlobalSignOutInput {
    /// <p>A valid access token issued to the user.</p>
    pub fn access_token(&self) -> ::std::option::Option<&str> {
        self.access_token.as_deref()
    }
}
impl ::std::fmt::Debug for GlobalSignOutInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("GlobalSignOutInput");
        formatter.field("access_token", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
impl ::std::fmt::Display for GlobalSignOutInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .sensitive("AccessToken", &self.access_token)
            .finish()
    }
}
impl GlobalSignOutInput {
    /// Creates a new builder-style object to manufacture [`GlobalSignOutInput`](crate::operation::global_sign_out::GlobalSignOutInput).
    pub fn builder() -> crate::operation::global_sign_out::builders::GlobalSignOutInputBuilder {
        crate::operation::global_sign_out::builders::GlobalSignOutInputBuilder::default()
    }
}

/// A builder for [`GlobalSignOutInput`](crate::operation::global_sign_out::GlobalSignOutInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct GlobalSignOutInputBuilder {
    pub(crate) access_token: ::std::option::Option<::std::string::String>,
}
impl GlobalSignOutInputBuilder {
    /// <p>A valid access token issued to the user.</p>
    pub fn access_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.access_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A valid access token issued to the user.</p>
    pub fn set_access_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.access_token = input;
        self
    }
    /// <p>A valid access token issued to the user.</p>
    pub fn get_access_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.access_token
    }
    /// Consumes the builder and constructs a [`GlobalSignOutInput`](crate::operation::global_sign_out::GlobalSignOutInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::global_sign_out::GlobalSignOutInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::global_sign_out::GlobalSignOutInput {
            access_token: self.access_token,
        })
    }
}
impl ::std::fmt::Debug for GlobalSignOutInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("GlobalSignOutInputBuilder");
        formatter.field("access_token", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
