/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `AdminAddUserToGroup`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AdminAddUserToGroup;
impl AdminAddUserToGroup {
    /// Creates a new `AdminAddUserToGroup`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for AdminAddUserToGroup {
    const NAME: &'static str = "AdminAddUserToGroup";
    type Input = crate::operation::admin_add_user_to_group::AdminAddUserToGroupInput;
    type Output = crate::operation::admin_add_user_to_group::AdminAddUserToGroupOutput;
}
impl AdminAddUserToGroupInput {
    /// Sends this input as a `AdminAddUserToGroup` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<AdminAddUserToGroupOutput, crate::error::SdkError> {
        client.send::<AdminAddUserToGroup>(self).await
    }
}

pub use crate::operation::admin_add_user_to_group::_admin_add_user_to_group_input::AdminAddUserToGroupInput;

pub use crate::operation::admin_add_user_to_group::_admin_add_user_to_group_output::AdminAddUserToGroupOutput;

mod _admin_add_user_to_group_input;

mod _admin_add_user_to_group_output;

/// Builders
pub mod builders;
