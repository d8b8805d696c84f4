/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `CreateGroup`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct CreateGroup;
impl CreateGroup {
    /// Creates a new `CreateGroup`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for CreateGroup {
    const NAME: &'static str = "CreateGroup";
    type Input = crate::operation::create_group::CreateGroupInput;
    type Output = crate::operation::create_group::CreateGroupOutput;
}
impl CreateGroupInput {
    /// Sends this input as a `CreateGroup` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<CreateGroupOutput, crate::error::SdkError> {
        client.send::<CreateGroup>(self).await
    }
}

pub use crate::operation::create_group::_create_group_input::CreateGroupInput;

pub use crate::operation::create_group::_create_group_output::CreateGroupOutput;

mod _create_group_input;

mod _create_group_output;

/// Builders
pub mod builders;
