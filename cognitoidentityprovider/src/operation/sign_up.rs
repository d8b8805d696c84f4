/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `SignUp`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct SignUp;
impl SignUp {
    /// Creates a new `SignUp`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for SignUp {
    const NAME: &'static str = "SignUp";
    type Input = crate::operation::sign_up::SignUpInput;
    type Output = crate::operation::sign_up::SignUpOutput;
}
impl SignUpInput {
    /// Sends this input as a `SignUp` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<SignUpOutput, crate::error::SdkError> {
        client.send::<SignUp>(self).await
    }
}

pub use crate::operation::sign_up::_sign_up_input::SignUpInput;

pub use crate::operation::sign_up::_sign_up_output::SignUpOutput;

mod _sign_up_input;

mod _sign_up_output;

/// Builders
pub mod builders;
