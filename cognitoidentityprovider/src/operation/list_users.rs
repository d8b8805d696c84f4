/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `ListUsers`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListUsers;
impl ListUsers {
    /// Creates a new `ListUsers`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for ListUsers {
    const NAME: &'static str = "ListUsers";
    type Input = crate::operation::list_users::ListUsersInput;
    type Output = crate::operation::list_users::ListUsersOutput;
}
impl crate::operation::PaginatedOperation for ListUsers {
    fn next_token(output: &Self::Output) -> ::std::option::Option<&str> {
        output.pagination_token()
    }

    fn input_token(input: &Self::Input) -> ::std::option::Option<&str> {
        input.pagination_token.as_deref()
    }

    fn set_next_token(input: &mut Self::Input, token: ::std::option::Option<::std::string::String>) {
        input.pagination_token = token;
    }
}
impl ListUsersInput {
    /// Sends this input as a `ListUsers` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<ListUsersOutput, crate::error::SdkError> {
        client.send::<ListUsers>(self).await
    }
}

pub use crate::operation::list_users::_list_users_input::ListUsersInput;

pub use crate::operation::list_users::_list_users_output::ListUsersOutput;

mod _list_users_input;

mod _list_users_output;

/// Builders
pub mod builders;
