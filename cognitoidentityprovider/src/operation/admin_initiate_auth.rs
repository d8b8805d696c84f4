/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `AdminInitiateAuth`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AdminInitiateAuth;
impl AdminInitiateAuth {
    /// Creates a new `AdminInitiateAuth`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for AdminInitiateAuth {
    const NAME: &'static str = "AdminInitiateAuth";
    type Input = crate::operation::admin_initiate_auth::AdminInitiateAuthInput;
    type Output = crate::operation::admin_initiate_auth::AdminInitiateAuthOutput;
}
impl AdminInitiateAuthInput {
    /// Sends this input as a `AdminInitiateAuth` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<AdminInitiateAuthOutput, crate::error::SdkError> {
        client.send::<AdminInitiateAuth>(self).await
    }
}

pub use crate::operation::admin_initiate_auth::_admin_initiate_auth_input::AdminInitiateAuthInput;

pub use crate::operation::admin_initiate_auth::_admin_initiate_auth_output::AdminInitiateAuthOutput;

mod _admin_initiate_auth_input;

mod _admin_initiate_auth_output;

/// Builders
pub mod builders;
