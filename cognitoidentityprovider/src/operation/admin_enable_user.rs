/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `AdminEnableUser`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AdminEnableUser;
impl AdminEnableUser {
    /// Creates a new `AdminEnableUser`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for AdminEnableUser {
    const NAME: &'static str = "AdminEnableUser";
    type Input = crate::operation::admin_enable_user::AdminEnableUserInput;
    type Output = crate::operation::admin_enable_user::AdminEnableUserOutput;
}
impl AdminEnableUserInput {
    /// Sends this input as a `AdminEnableUser` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<AdminEnableUserOutput, crate::error::SdkError> {
        client.send::<AdminEnableUser>(self).await
    }
}

pub use crate::operation::admin_enable_user::_admin_enable_user_input::AdminEnableUserInput;

pub use crate::operation::admin_enable_user::_admin_enable_user_output::AdminEnableUserOutput;

mod _admin_enable_user_input;

mod _admin_enable_user_output;

/// Builders
pub mod builders;
