/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Lists the users of a user pool, optionally filtered.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListUsersInput {
    /// <p>The ID of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: ::std::option::Option<::std::string::String>,
    /// <p>The attributes to return for each user. All attributes are returned when absent.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_get: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>The maximum number of items to return.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: ::std::option::Option<i32>,
    /// <p>An identifier that was returned from the previous call, used to return the next page of users.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_token: ::std::option::Option<::std::string::String>,
    /// <p>A filter expression such as <code>email ^= "jane"</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: ::std::option::Option<::std::string::String>,
}
impl ListUsersInput {
    /// <p>The ID of the user pool.</p>
    pub fn user_pool_id(&self) -> ::std::option::Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// <p>The attributes to return for each user. All attributes are returned when absent.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.attributes_to_get.is_none()`.
    pub fn attributes_to_get(&self) -> &[::std::string::String] {
        self.attributes_to_get.as_deref().unwrap_or_default()
    }

    /// <p>The maximum number of items to return.</p>
    pub fn limit(&self) -> ::std::option::Option<i32> {
        self.limit
    }

    /// <p>An identifier that was returned from the previous call, used to return the next page of users.</p>
    pub fn pagination_token(&self) -> ::std::option::Option<&str> {
        self.pagination_token.as_deref()
    }

    /// <p>A filter expression such as <code>email ^= "jane"</code>.</p>
    pub fn filter(&self) -> ::std::option::Option<&str> {
        self.filter.as_deref()
    }
}
impl ::std::fmt::Display for ListUsersInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPoolId", &self.user_pool_id)
            .list("AttributesToGet", &self.attributes_to_get)
            .field("Limit", &self.limit)
            .field("PaginationToken", &self.pagination_token)
            .field("Filter", &self.filter)
            .finish()
    }
}
impl ListUsersInput {
    /// Creates a new builder-style object to manufacture [`ListUsersInput`](crate::operation::list_users::ListUsersInput).
    pub fn builder() -> crate::operation::list_users::builders::ListUsersInputBuilder {
        crate::operation::list_users::builders::ListUsersInputBuilder::default()
    }
}

/// A builder for [`ListUsersInput`](crate::operation::list_users::ListUsersInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListUsersInputBuilder {
    pub(crate) user_pool_id: ::std::option::Option<::std::string::String>,
    pub(crate) attributes_to_get: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) limit: ::std::option::Option<i32>,
    pub(crate) pagination_token: ::std::option::Option<::std::string::String>,
    pub(crate) filter: ::std::option::Option<::std::string::String>,
}
impl ListUsersInputBuilder {
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

    /// Appends an item to `attributes_to_get`.
    ///
    /// To override the contents of this collection use [`set_attributes_to_get`](Self::set_attributes_to_get).
    ///
    /// <p>The attributes to return for each user. All attributes are returned when absent.</p>
    pub fn attributes_to_get(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.attributes_to_get.unwrap_or_default();
        v.push(input.into());
        self.attributes_to_get = ::std::option::Option::Some(v);
        self
    }
    /// <p>The attributes to return for each user. All attributes are returned when absent.</p>
    pub fn set_attributes_to_get(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.attributes_to_get = input;
        self
    }
    /// <p>The attributes to return for each user. All attributes are returned when absent.</p>
    pub fn get_attributes_to_get(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.attributes_to_get
    }

    /// <p>The maximum number of items to return.</p>
    pub fn limit(mut self, input: i32) -> Self {
        self.limit = ::std::option::Option::Some(input);
        self
    }
    /// <p>The maximum number of items to return.</p>
    pub fn set_limit(mut self, input: ::std::option::Option<i32>) -> Self {
        self.limit = input;
        self
    }
    /// <p>The maximum number of items to return.</p>
    pub fn get_limit(&self) -> &::std::option::Option<i32> {
        &self.limit
    }

    /// <p>An identifier that was returned from the previous call, used to return the next page of users.</p>
    pub fn pagination_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.pagination_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>An identifier that was returned from the previous call, used to return the next page of users.</p>
    pub fn set_pagination_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.pagination_token = input;
        self
    }
    /// <p>An identifier that was returned from the previous call, used to return the next page of users.</p>
    pub fn get_pagination_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.pagination_token
    }

    /// <p>A filter expression such as <code>email ^= "jane"</code>.</p>
    pub fn filter(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.filter = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A filter expression such as <code>email ^= "jane"</code>.</p>
    pub fn set_filter(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.filter = input;
        self
    }
    /// <p>A filter expression such as <code>email ^= "jane"</code>.</p>
    pub fn get_filter(&self) -> &::std::option::Option<::std::string::String> {
        &self.filter
    }
    /// Consumes the builder and constructs a [`ListUsersInput`](crate::operation::list_users::ListUsersInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::list_users::ListUsersInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::list_users::ListUsersInput {
            user_pool_id: self.user_pool_id,
            attributes_to_get: self.attributes_to_get,
            limit: self.limit,
            pagination_token: self.pagination_token,
            filter: self.filter,
        })
    }
}
