/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `ListGroups`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListGroups;
impl ListGroups {
    /// Creates a new `ListGroups`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for ListGroups {
    const NAME: &'static str = "ListGroups";
    type Input = crate::operation::list_groups::ListGroupsInput;
    type Output = crate::operation::list_groups::ListGroupsOutput;
}
impl crate::operation::PaginatedOperation for ListGroups {
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
impl ListGroupsInput {
    /// Sends this input as a `ListGroups` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<ListGroupsOutput, crate::error::SdkError> {
        client.send::<ListGroups>(self).await
    }
}

pub use crate::operation::list_groups::_list_groups_input::ListGroupsInput;

pub use crate::operation::list_groups::_list_groups_output::ListGroupsOutput;

mod _list_groups_input;

mod _list_groups_output;

/// Builders
pub mod builders;
