/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Gets the profile of the signed-in user.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetUserInput {
    /// <p>A valid access token issued to the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: ::std::option::Option<::std::string::String>,
}
impl GetUserInput {
    /// <p>A valid access token issued to the user.</p>
    pub fn access_token(&self) -> ::std::option::Option<&str> {
        self.access_token.as_deref()
    }
}
impl ::std::fmt::Debug for GetUserInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("GetUserInput");
        formatter.field("access_token", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
impl ::std::fmt::Display for GetUserInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .sensitive("AccessToken", &self.access_token)
            .finish()
    }
}
impl GetUserInput {
    /// Creates a new builder-style object to manufacture [`GetUserInput`](crate::operation::get_user::GetUserInput).
    pub fn builder() -> crate::operation::get_user::builders::GetUserInputBuilder {
        crate::operation::get_user::builders::GetUserInputBuilder::default()
    }
}

/// A builder for [`GetUserInput`](crate::operation::get_user::GetUserInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct GetUserInputBuilder {
    pub(crate) access_token: ::std::option::Option<::std::string::String>,
}
impl GetUserInputBuilder {
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
    /// Consumes the builder and constructs a [`GetUserInput`](crate::operation::get_user::GetUserInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::get_user::GetUserInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::get_user::GetUserInput {
            access_token: self.access_token,
        })
    }
}
impl ::std::fmt::Debug for GetUserInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("GetUserInputBuilder");
        formatter.field("access_token", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
