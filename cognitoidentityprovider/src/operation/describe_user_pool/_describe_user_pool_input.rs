/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Gets the configuration of a user pool.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeUserPoolInput {
    /// <p>The ID of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: ::std::option::Option<::std::string::String>,
}
impl DescribeUserPoolInput {
    /// <p>The ID of the user pool.</p>
    pub fn user_pool_id(&self) -> ::std::option::Option<&str> {
        self.user_pool_id.as_deref()
    }
}
impl ::std::fmt::Display for DescribeUserPoolInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPoolId", &self.user_pool_id)
            .finish()
    }
}
impl DescribeUserPoolInput {
    /// Creates a new builder-style object to manufacture [`DescribeUserPoolInput`](crate::operation::describe_user_pool::DescribeUserPoolInput).
    pub fn builder() -> crate::operation::describe_user_pool::builders::DescribeUserPoolInputBuilder {
        crate::operation::describe_user_pool::builders::DescribeUserPoolInputBuilder::default()
    }
}

/// A builder for [`DescribeUserPoolInput`](crate::operation::describe_user_pool::DescribeUserPoolInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DescribeUserPoolInputBuilder {
    pub(crate) user_pool_id: ::std::option::Option<::std::string::String>,
}
impl DescribeUserPoolInputBuilder {
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
    /// Consumes the builder and constructs a [`DescribeUserPoolInput`](crate::operation::describe_user_pool::DescribeUserPoolInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::describe_user_pool::DescribeUserPoolInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::describe_user_pool::DescribeUserPoolInput {
            user_pool_id: self.user_pool_id,
        })
    }
}
