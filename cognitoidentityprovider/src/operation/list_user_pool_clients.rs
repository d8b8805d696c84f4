/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `ListUserPoolClients`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListUserPoolClients;
impl ListUserPoolClients {
    /// Creates a new `ListUserPoolClients`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for ListUserPoolClients {
    const NAME: &'static str = "ListUserPoolClients";
    type Input = crate::operation::list_user_pool_clients::ListUserPoolClientsInput;
    type Output = crate::operation::list_user_pool_clients::ListUserPoolClientsOutput;
}
impl crate::operation::PaginatedOperation for ListUserPoolClients {
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
impl ListUserPoolClientsInput {
    /// Sends this input as a `ListUserPoolClients` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<ListUserPoolClientsOutput, crate::error::SdkError> {
        client.send::<ListUserPoolClients>(self).await
    }
}

pub use crate::operation::list_user_pool_clients::_list_user_pool_clients_input::ListUserPoolClientsInput;

pub use crate::operation::list_user_pool_clients::_list_user_pool_clients_output::ListUserPoolClientsOutput;

mod _list_user_pool_clients_input;

mod _list_user_pool_clients_output;

/// Builders
pub mod builders;
