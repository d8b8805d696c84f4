/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `DescribeUserPoolClient`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeUserPoolClient;
impl DescribeUserPoolClient {
    /// Creates a new `DescribeUserPoolClient`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for DescribeUserPoolClient {
    const NAME: &'static str = "DescribeUserPoolClient";
    type Input = crate::operation::describe_user_pool_client::DescribeUserPoolClientInput;
    type Output = crate::operation::describe_user_pool_client::DescribeUserPoolClientOutput;
}
impl DescribeUserPoolClientInput {
    /// Sends this input as a `DescribeUserPoolClient` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<DescribeUserPoolClientOutput, crate::error::SdkError> {
        client.send::<DescribeUserPoolClient>(self).await
    }
}

pub use crate::operation::describe_user_pool_client::_describe_user_pool_client_input::DescribeUserPoolClientInput;

pub use crate::operation::describe_user_pool_client::_describe_user_pool_client_output::DescribeUserPoolClientOutput;

mod _describe_user_pool_client_input;

mod _describe_user_pool_client_output;

/// Builders
pub mod builders;
