/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `AdminGetUser`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AdminGetUser;
impl AdminGetUser {
    /// Creates a new `AdminGetUser`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for AdminGetUser {
    const NAME: &'static str = "AdminGetUser";
    type Input = crate::operation::admin_get_user::AdminGetUserInput;
    type Output = crate::operation::admin_get_user::AdminGetUserOutput;
}
impl AdminGetUserInput {
    /// Sends this input as a `AdminGetUser` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<AdminGetUserOutput, crate::error::SdkError> {
        client.send::<AdminGetUser>(self).await
    }
}

pub use crate::operation::admin_get_user::_admin_get_user_input::AdminGetUserInput;

pub use crate::operation::admin_get_user::_admin_get_user_output::AdminGetUserOutput;

mod _admin_get_user_input;

mod _admin_get_user_output;

/// Builders
pub mod builders;
