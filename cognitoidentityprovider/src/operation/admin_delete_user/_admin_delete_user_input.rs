/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Deletes a user as an administrator.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminDeleteUserInput {
    /// <p>The ID of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: ::std::option::Option<::std::string::String>,
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: ::std::option::Option<::std::string::String>,
}
impl AdminDeleteUserInput {
    /// <p>The ID of the user pool.</p>
    pub fn user_pool_id(&self) -> ::std::option::Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn username(&self) -> ::std::option::Option<&str> {
        self.username.as_deref()
    }
}
impl ::std::fmt::Debug for AdminDeleteUserInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminDeleteUserInput");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
impl ::std::fmt::Display for AdminDeleteUserInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPoolId", &self.user_pool_id)
            .sensitive("Username", &self.username)
            .finish()
    }
}
impl AdminDeleteUserInput {
    /// Creates a new builder-style object to manufacture [`AdminDeleteUserInput`](crate::operation::admin_delete_user::AdminDeleteUserInput).
    pub fn builder() -> crate::operation::admin_delete_user::builders::AdminDeleteUserInputBuilder {
        crate::operation::admin_delete_user::builders::AdminDeleteUserInputBuilder::default()
    }
}

/// A builder for [`AdminDeleteUserInput`](crate::operation::admin_delete_user::AdminDeleteUserInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct AdminDeleteUserInputBuilder {
    pub(crate) user_pool_id: ::std::option::Option<::std::string::String>,
    pub(crate) username: ::std::option::Option<::std::string::String>,
}
impl AdminDeleteUserInputBuilder {
    /// <p>The ID of the user pool.</p>
    pub fn user_pool_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.user_pool_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID of the user pool.</p>
    pub fn set_user_pool_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.user_pool_id = input;
        self
    }
    /// <p>The ID of the user pool.</p>
    pub fn get_user_pool_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.user_pool_id
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
    /// Consumes the builder and constructs a [`AdminDeleteUserInput`](crate::operation::admin_delete_user::AdminDeleteUserInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::admin_delete_user::AdminDeleteUserInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::admin_delete_user::AdminDeleteUserInput {
            user_pool_id: self.user_pool_id,
            username: self.username,
        })
    }
}
impl ::std::fmt::Debug for AdminDeleteUserInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminDeleteUserInputBuilder");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
