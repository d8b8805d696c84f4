/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>DescribeUserPoolClient</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeUserPoolClientOutput {
    /// <p>The configuration of the app client.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_client: ::std::option::Option<crate::types::UserPoolClientType>,
}
impl DescribeUserPoolClientOutput {
    /// <p>The configuration of the app client.</p>
    pub fn user_pool_client(&self) -> ::std::option::Option<&crate::types::UserPoolClientType> {
        self.user_pool_client.as_ref()
    }
}
impl ::std::fmt::Display for DescribeUserPoolClientOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPoolClient", &self.user_pool_client)
            .finish()
    }
}
impl DescribeUserPoolClientOutput {
    /// Creates a new builder-style object to manufacture [`DescribeUserPoolClientOutput`](crate::operation::describe_user_pool_client::DescribeUserPoolClientOutput).
    pub fn builder() -> crate::operation::describe_user_pool_client::builders::DescribeUserPoolClientOutputBuilder {
        crate::operation::describe_user_pool_client::builders::DescribeUserPoolClientOutputBuilder::default()
    }
}

/// A builder for [`DescribeUserPoolClientOutput`](crate::operation::describe_user_pool_client::DescribeUserPoolClientOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DescribeUserPoolClientOutputBuilder {
    pub(crate) user_pool_client: ::std::option::Option<crate::types::UserPoolClientType>,
}
impl DescribeUserPoolClientOutputBuilder {
    /// <p>The configuration of the app client.</p>
    pub fn user_pool_client(mut self, input: crate::types::UserPoolClientType) -> Self {
        self.user_pool_client = ::std::option::Option::Some(input);
        self
    }
    /// <p>The configuration of the app client.</p>
    pub fn set_user_pool_client(mut self, input: ::std::option::Option<crate::types::UserPoolClientType>) -> Self {
        self.user_pool_client = input;
        self
    }
    /// <p>The configuration of the app client.</p>
    pub fn get_user_pool_client(&self) -> &::std::option::Option<crate::types::UserPoolClientType> {
        &self.user_pool_client
    }
    /// Consumes the builder and constructs a [`DescribeUserPoolClientOutput`](crate::operation::describe_user_pool_client::DescribeUserPoolClientOutput).
    pub fn build(self) -> crate::operation::describe_user_pool_client::DescribeUserPoolClientOutput {
        crate::operation::describe_user_pool_client::DescribeUserPoolClientOutput {
            user_pool_client: self.user_pool_client,
        }
    }
}
