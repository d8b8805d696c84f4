/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `RespondToAuthChallenge`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct RespondToAuthChallenge;
impl RespondToAuthChallenge {
    /// Creates a new `RespondToAuthChallenge`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for RespondToAuthChallenge {
    const NAME: &'static str = "RespondToAuthChallenge";
    type Input = crate::operation::respond_to_auth_challenge::RespondToAuthChallengeInput;
    type Output = crate::operation::respond_to_auth_challenge::RespondToAuthChallengeOutput;
}
impl RespondToAuthChallengeInput {
    /// Sends this input as a `RespondToAuthChallenge` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<RespondToAuthChallengeOutput, crate::error::SdkError> {
        client.send::<RespondToAuthChallenge>(self).await
    }
}

pub use crate::operation::respond_to_auth_challenge::_respond_to_auth_challenge_input::RespondToAuthChallengeInput;

pub use crate::operation::respond_to_auth_challenge::_respond_to_auth_challenge_output::RespondToAuthChallengeOutput;

mod _respond_to_auth_challenge_input;

mod _respond_to_auth_challenge_output;

/// Builders
pub mod builders;
