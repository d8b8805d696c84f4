/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `ChangePassword`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ChangePassword;
impl ChangePassword {
    /// Creates a new `ChangePassword`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for ChangePassword {
    const NAME: &'static str = "ChangePassword";
    type Input = crate::operation::change_password::ChangePasswordInput;
    type Output = crate::operation::change_password::ChangePasswordOutput;
}
impl ChangePasswordInput {
    /// Sends this input as a `ChangePassword` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<ChangePasswordOutput, crate::error::SdkError> {
        client.send::<ChangePassword>(self).await
    }
}

pub use crate::operation::change_password::_change_password_input::ChangePasswordInput;

pub use crate::operation::change_password::_change_password_output::ChangePasswordOutput;

mod _change_password_input;

mod _change_password_output;

/// Builders
pub mod builders;
