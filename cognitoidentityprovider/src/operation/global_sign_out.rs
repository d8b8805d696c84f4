/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `GlobalSignOut`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GlobalSignOut;
impl GlobalSignOut {
    /// Creates a new `GlobalSignOut`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for GlobalSignOut {
    const NAME: &'static str = "GlobalSignOut";
    type Input = crate::operation::global_sign_out::GlobalSignOutInput;
    type Output = crate::operation::global_sign_out::GlobalSignOutOutput;
}
impl GlobalSignOutInput {
    /// Sends this input as a `GlobalSignOut` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<GlobalSignOutOutput, crate::error::SdkError> {
        client.send::<GlobalSignOut>(self).await
    }
}

pub use crate::operation::global_sign_out::_global_sign_out_input::GlobalSignOutInput;

pub use crate::operation::global_sign_out::_global_sign_out_output::GlobalSignOutOutput;

mod _global_sign_out_input;

mod _global_sign_out_output;

/// Builders
pub mod builders;
