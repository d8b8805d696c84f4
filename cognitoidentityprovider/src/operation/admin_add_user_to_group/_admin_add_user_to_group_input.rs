/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Adds a user to a group.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminAddUserToGroupInput {
    /// <p>The ID of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: ::std::option::Option<::std::string::String>,
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: ::std::option::Option<::std::string::String>,
    /// <p>The name of the group.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: ::std::option::Option<::std::string::String>,
}
impl AdminAddUserToGroupInput {
    /// <p>The ID of the user pool.</p>
    pub fn user_pool_id(&self) -> ::std::option::Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn username(&self) -> ::std::option::Option<&str> {
        self.username.as_deref()
    }

    /// <p>The name of the group.</p>
    pub fn group_name(&self) -> ::std::option::Option<&str> {
        self.group_name.as_deref()
    }
}
impl ::std::fmt::Debug for AdminAddUserToGroupInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminAddUserToGroupInput");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("group_name", &self.group_name);
        formatter.finish()
    }
}
impl ::std::fmt::Display for AdminAddUserToGroupInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPoolId", &self.user_pool_id)
            .sensitive("Username", &self.username)
            .field("GroupName", &self.group_name)
            .finish()
    }
}
impl AdminAddUserToGroupInput {
    /// Creates a new builder-style object to manufacture [`AdminAddUserToGroupInput`](crate::operation::admin_add_user_to_group::AdminAddUserToGroupInput).
    pub fn builder() -> crate::operation::admin_add_user_to_group::builders::AdminAddUserToGroupInputBuilder {
        crate::operation::admin_add_user_to_group::builders::AdminAddUserToGroupInputBuilder::default()
    }
}

/// A builder for [`AdminAddUserToGroupInput`](crate::operation::admin_add_user_to_group::AdminAddUserToGroupInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct AdminAddUserToGroupInputBuilder {
    pub(crate) user_pool_id: ::std::option::Option<::std::string::String>,
    pub(crate) username: ::std::option::Option<::std::string::String>,
    pub(crate) group_name: ::std::option::Option<::std::string::String>,
}
impl AdminAddUserToGroupInputBuilder {
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

    /// <p>The name of the group.</p>
    pub fn group_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.group_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the group.</p>
    pub fn set_group_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.group_name = input;
        self
    }
    /// <p>The name of the group.</p>
    pub fn get_group_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.group_name
    }
    /// Consumes the builder and constructs a [`AdminAddUserToGroupInput`](crate::operation::admin_add_user_to_group::AdminAddUserToGroupInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::admin_add_user_to_group::AdminAddUserToGroupInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::admin_add_user_to_group::AdminAddUserToGroupInput {
            user_pool_id: self.user_pool_id,
            username: self.username,
            group_name: self.group_name,
        })
    }
}
impl ::std::fmt::Debug for AdminAddUserToGroupInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminAddUserToGroupInputBuilder");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("group_name", &self.group_name);
        formatter.finish()
    }
}
