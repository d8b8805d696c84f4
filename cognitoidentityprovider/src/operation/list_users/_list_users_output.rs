/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>ListUsers</code> request.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListUsersOutput {
    /// <p>The users returned by the request.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: ::std::option::Option<::std::vec::Vec<crate::types::UserType>>,
    /// <p>An identifier to pass in a subsequent call to get the next page of users.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_token: ::std::option::Option<::std::string::String>,
}
impl ListUsersOutput {
    /// <p>The users returned by the request.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.users.is_none()`.
    pub fn users(&self) -> &[crate::types::UserType] {
        self.users.as_deref().unwrap_or_default()
    }

    /// <p>An identifier to pass in a subsequent call to get the next page of users.</p>
    pub fn pagination_token(&self) -> ::std::option::Option<&str> {
        self.pagination_token.as_deref()
    }
}
impl ::std::fmt::Display for ListUsersOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .list("Users", &self.users)
            .field("PaginationToken", &self.pagination_token)
            .finish()
    }
}
impl ListUsersOutput {
    /// Creates a new builder-style object to manufacture [`ListUsersOutput`](crate::operation::list_users::ListUsersOutput).
    pub fn builder() -> crate::operation::list_users::builders::ListUsersOutputBuilder {
        crate::operation::list_users::builders::ListUsersOutputBuilder::default()
    }
}

/// A builder for [`ListUsersOutput`](crate::operation::list_users::ListUsersOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListUsersOutputBuilder {
    pub(crate) users: ::std::option::Option<::std::vec::Vec<crate::types::UserType>>,
    pub(crate) pagination_token: ::std::option::Option<::std::string::String>,
}
impl ListUsersOutputBuilder {
    /// Appends an item to `users`.
    ///
    /// To override the contents of this collection use [`set_users`](Self::set_users).
    ///
    /// <p>The users returned by the request.</p>
    pub fn users(mut self, input: crate::types::UserType) -> Self {
        let mut v = self.users.unwrap_or_default();
        v.push(input);
        self.users = ::std::option::Option::Some(v);
        self
    }
    /// <p>The users returned by the request.</p>
    pub fn set_users(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::UserType>>) -> Self {
        self.users = input;
        self
    }
    /// <p>The users returned by the request.</p>
    pub fn get_users(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::UserType>> {
        &self.users
    }

    /// <p>An identifier to pass in a subsequent call to get the next page of users.</p>
    pub fn pagination_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.pagination_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>An identifier to pass in a subsequent call to get the next page of users.</p>
    pub fn set_pagination_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.pagination_token = input;
        self
    }
    /// <p>An identifier to pass in a subsequent call to get the next page of users.</p>
    pub fn get_pagination_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.pagination_token
    }
    /// Consumes the builder and constructs a [`ListUsersOutput`](crate::operation::list_users::ListUsersOutput).
    pub fn build(self) -> crate::operation::list_users::ListUsersOutput {
        crate::operation::list_users::ListUsersOutput {
            users: self.users,
            pagination_token: self.pagination_token,
        }
    }
}
