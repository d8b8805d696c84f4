/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `ForgotPassword`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ForgotPassword;
impl ForgotPassword {
    /// Creates a new `ForgotPassword`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for ForgotPassword {
    const NAME: &'static str = "ForgotPassword";
    type Input = crate::operation::forgot_password::ForgotPasswordInput;
    type Output = crate::operation::forgot_password::ForgotPasswordOutput;
}
impl ForgotPasswordInput {
    /// Sends this input as a `ForgotPassword` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<ForgotPasswordOutput, crate::error::SdkError> {
        client.send::<ForgotPassword>(self).await
    }
}

pub use crate::operation::forgot_password::_forgot_password_input::ForgotPasswordInput;

pub use crate::operation::forgot_password::_forgot_password_output::ForgotPasswordOutput;

mod _forgot_password_input;

mod _forgot_password_output;

/// Builders
pub mod builders;
