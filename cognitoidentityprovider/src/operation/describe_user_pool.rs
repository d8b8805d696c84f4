/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `DescribeUserPool`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeUserPool;
impl DescribeUserPool {
    /// Creates a new `DescribeUserPool`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for DescribeUserPool {
    const NAME: &'static str = "DescribeUserPool";
    type Input = crate::operation::describe_user_pool::DescribeUserPoolInput;
    type Output = crate::operation::describe_user_pool::DescribeUserPoolOutput;
}
impl DescribeUserPoolInput {
    /// Sends this input as a `DescribeUserPool` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<DescribeUserPoolOutput, crate::error::SdkError> {
        client.send::<DescribeUserPool>(self).await
    }
}

pub use crate::operation::describe_user_pool::_describe_user_pool_input::DescribeUserPoolInput;

pub use crate::operation::describe_user_pool::_describe_user_pool_output::DescribeUserPoolOutput;

mod _describe_user_pool_input;

mod _describe_user_pool_output;

/// Builders
pub mod builders;
