/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `AdminDisableUser`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AdminDisableUser;
impl AdminDisableUser {
    /// Creates a new `AdminDisableUser`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for AdminDisableUser {
    const NAME: &'static str = "AdminDisableUser";
    type Input = crate::operation::admin_disable_user::AdminDisableUserInput;
    type Output = crate::operation::admin_disable_user::AdminDisableUserOutput;
}
impl AdminDisableUserInput {
    /// Sends this input as a `AdminDisableUser` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<AdminDisableUserOutput, crate::error::SdkError> {
        client.send::<AdminDisableUser>(self).await
    }
}

pub use crate::operation::admin_disable_user::_admin_disable_user_input::AdminDisableUserInput;

pub use crate::operation::admin_disable_user::_admin_disable_user_output::AdminDisableUserOutput;

mod _admin_disable_user_input;

mod _admin_disable_user_output;

/// Builders
pub mod builders;
