/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `AdminListGroupsForUser`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AdminListGroupsForUser;
impl AdminListGroupsForUser {
    /// Creates a new `AdminListGroupsForUser`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for AdminListGroupsForUser {
    const NAME: &'static str = "AdminListGroupsForUser";
    type Input = crate::operation::admin_list_groups_for_user::AdminListGroupsForUserInput;
    type Output = crate::operation::admin_list_groups_for_user::AdminListGroupsForUserOutput;
}
impl crate::operation::PaginatedOperation for AdminListGroupsForUser {
    fn next_token(output: &Self::Output) -> ::std::option::Option<&str> {
        output.next_token()
    }

    fn input_token(input: &Self::Input) -> ::std::option::Option<&str> {
        input.next_token.as_deref()
    }

    fn set_next_token(input: &mut Self::Input, token: ::std::option::Option<::std::string::String>) {
        input.next_token = token;
    }
}
impl AdminListGroupsForUserInput {
    /// Sends this input as a `AdminListGroupsForUser` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<AdminListGroupsForUserOutput, crate::error::SdkError> {
        client.send::<AdminListGroupsForUser>(self).await
    }
}

pub use crate::operation::admin_list_groups_for_user::_admin_list_groups_for_user_input::AdminListGroupsForUserInput;

pub use crate::operation::admin_list_groups_for_user::_admin_list_groups_for_user_output::AdminListGroupsForUserOutput;

mod _admin_list_groups_for_user_input;

mod _admin_list_groups_for_user_output;

/// Builders
pub mod builders;
