/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `AdminCreateUser`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AdminCreateUser;
impl AdminCreateUser {
    /// Creates a new `AdminCreateUser`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for AdminCreateUser {
    const NAME: &'static str = "AdminCreateUser";
    type Input = crate::operation::admin_create_user::AdminCreateUserInput;
    type Output = crate::operation::admin_create_user::AdminCreateUserOutput;
}
impl AdminCreateUserInput {
    /// Sends this input as a `AdminCreateUser` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<AdminCreateUserOutput, crate::error::SdkError> {
        client.send::<AdminCreateUser>(self).await
    }
}

pub use crate::operation::admin_create_user::_admin_create_user_input::AdminCreateUserInput;

pub use crate::operation::admin_create_user::_admin_create_user_output::AdminCreateUserOutput;

mod _admin_create_user_input;

mod _admin_create_user_output;

/// Builders
pub mod builders;
