/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `ConfirmSignUp`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ConfirmSignUp;
impl ConfirmSignUp {
    /// Creates a new `ConfirmSignUp`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for ConfirmSignUp {
    const NAME: &'static str = "ConfirmSignUp";
    type Input = crate::operation::confirm_sign_up::ConfirmSignUpInput;
    type Output = crate::operation::confirm_sign_up::ConfirmSignUpOutput;
}
impl ConfirmSignUpInput {
    /// Sends this input as a `ConfirmSignUp` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<ConfirmSignUpOutput, crate::error::SdkError> {
        client.send::<ConfirmSignUp>(self).await
    }
}

pub use crate::operation::confirm_sign_up::_confirm_sign_up_input::ConfirmSignUpInput;

pub use crate::operation::confirm_sign_up::_confirm_sign_up_output::ConfirmSignUpOutput;

mod _confirm_sign_up_input;

mod _confirm_sign_up_output;

/// Builders
pub mod builders;
