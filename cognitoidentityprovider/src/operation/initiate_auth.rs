/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `InitiateAuth`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct InitiateAuth;
impl InitiateAuth {
    /// Creates a new `InitiateAuth`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for InitiateAuth {
    const NAME: &'static str = "InitiateAuth";
    type Input = crate::operation::initiate_auth::InitiateAuthInput;
    type Output = crate::operation::initiate_auth::InitiateAuthOutput;
}
impl InitiateAuthInput {
    /// Sends this input as a `InitiateAuth` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<InitiateAuthOutput, crate::error::SdkError> {
        client.send::<InitiateAuth>(self).await
    }
}

pub use crate::operation::initiate_auth::_initiate_auth_input::InitiateAuthInput;

pub use crate::operation::initiate_auth::_initiate_auth_output::InitiateAuthOutput;

mod _initiate_auth_input;

mod _initiate_auth_output;

/// Builders
pub mod builders;
