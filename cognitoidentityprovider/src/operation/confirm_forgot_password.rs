/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `ConfirmForgotPassword`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ConfirmForgotPassword;
impl ConfirmForgotPassword {
    /// Creates a new `ConfirmForgotPassword`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for ConfirmForgotPassword {
    const NAME: &'static str = "ConfirmForgotPassword";
    type Input = crate::operation::confirm_forgot_password::ConfirmForgotPasswordInput;
    type Output = crate::operation::confirm_forgot_password::ConfirmForgotPasswordOutput;
}
impl ConfirmForgotPasswordInput {
    /// Sends this input as a `ConfirmForgotPassword` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<ConfirmForgotPasswordOutput, crate::error::SdkError> {
        client.send::<ConfirmForgotPassword>(self).await
    }
}

pub use crate::operation::confirm_forgot_password::_confirm_forgot_password_input::ConfirmForgotPasswordInput;

pub use crate::operation::confirm_forgot_password::_confirm_forgot_password_output::ConfirmForgotPasswordOutput;

mod _confirm_forgot_password_input;

mod _confirm_forgot_password_output;

/// Builders
pub mod builders;
