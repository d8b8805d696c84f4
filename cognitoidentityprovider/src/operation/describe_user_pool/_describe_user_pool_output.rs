/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>DescribeUserPool</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeUserPoolOutput {
    /// <p>The configuration of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool: ::std::option::Option<crate::types::UserPoolType>,
}
impl DescribeUserPoolOutput {
    /// <p>The configuration of the user pool.</p>
    pub fn user_pool(&self) -> ::std::option::Option<&crate::types::UserPoolType> {
        self.user_pool.as_ref()
    }
}
impl ::std::fmt::Display for DescribeUserPoolOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPool", &self.user_pool)
            .finish()
    }
}
impl DescribeUserPoolOutput {
    /// Creates a new builder-style object to manufacture [`DescribeUserPoolOutput`](crate::operation::describe_user_pool::DescribeUserPoolOutput).
    pub fn builder() -> crate::operation::describe_user_pool::builders::DescribeUserPoolOutputBuilder {
        crate::operation::describe_user_pool::builders::DescribeUserPoolOutputBuilder::default()
    }
}

/// A builder for [`DescribeUserPoolOutput`](crate::operation::describe_user_pool::DescribeUserPoolOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DescribeUserPoolOutputBuilder {
    pub(crate) user_pool: ::std::option::Option<crate::types::UserPoolType>,
}
impl DescribeUserPoolOutputBuilder {
    /// <p>The configuration of the user pool.</p>
    pub fn user_pool(mut self, input: crate::types::UserPoolType) -> Self {
        self.user_pool = ::std::option::Option::Some(input);
        self
    }
    /// <p>The configuration of the user pool.</p>
    pub fn set_user_pool(mut self, input: ::std::option::Option<crate::types::UserPoolType>) -> Self {
        self.user_pool = input;
        self
    }
    /// <p>The configuration of the user pool.</p>
    pub fn get_user_pool(&self) -> &::std::option::Option<crate::types::UserPoolType> {
        &self.user_pool
    }
    /// Consumes the builder and constructs a [`DescribeUserPoolOutput`](crate::operation::describe_user_pool::DescribeUserPoolOutput).
    pub fn build(self) -> crate::operation::describe_user_pool::DescribeUserPoolOutput {
        crate::operation::describe_user_pool::DescribeUserPoolOutput {
            user_pool: self.user_pool,
        }
    }
}
