/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `AdminDeleteUser`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AdminDeleteUser;
impl AdminDeleteUser {
    /// Creates a new `AdminDeleteUser`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for AdminDeleteUser {
    const NAME: &'static str = "AdminDeleteUser";
    type Input = crate::operation::admin_delete_user::AdminDeleteUserInput;
    type Output = crate::operation::admin_delete_user::AdminDeleteUserOutput;
}
impl AdminDeleteUserInput {
    /// Sends this input as a `AdminDeleteUser` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<AdminDeleteUserOutput, crate::error::SdkError> {
        client.send::<AdminDeleteUser>(self).await
    }
}

pub use crate::operation::admin_delete_user::_admin_delete_user_input::AdminDeleteUserInput;

pub use crate::operation::admin_delete_user::_admin_delete_user_output::AdminDeleteUserOutput;

mod _admin_delete_user_input;

mod _admin_delete_user_output;

/// Builders
pub mod builders;
