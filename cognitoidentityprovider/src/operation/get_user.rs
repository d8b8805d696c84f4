/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `GetUser`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetUser;
impl GetUser {
    /// Creates a new `GetUser`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for GetUser {
    const NAME: &'static str = "GetUser";
    type Input = crate::operation::get_user::GetUserInput;
    type Output = crate::operation::get_user::GetUserOutput;
}
impl GetUserInput {
    /// Sends this input as a `GetUser` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<GetUserOutput, crate::error::SdkError> {
        client.send::<GetUser>(self).await
    }
}

pub use crate::operation::get_user::_get_user_input::GetUserInput;

pub use crate::operation::get_user::_get_user_output::GetUserOutput;

mod _get_user_input;

mod _get_user_output;

/// Builders
pub mod builders;
