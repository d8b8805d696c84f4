/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `AdminDeleteUserAttributes`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AdminDeleteUserAttributes;
impl AdminDeleteUserAttributes {
    /// Creates a new `AdminDeleteUserAttributes`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for AdminDeleteUserAttributes {
    const NAME: &'static str = "AdminDeleteUserAttributes";
    type Input = crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesInput;
    type Output = crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesOutput;
}
impl AdminDeleteUserAttributesInput {
    /// Sends this input as a `AdminDeleteUserAttributes` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<AdminDeleteUserAttributesOutput, crate::error::SdkError> {
        client.send::<AdminDeleteUserAttributes>(self).await
    }
}

pub use crate::operation::admin_delete_user_attributes::_admin_delete_user_attributes_input::AdminDeleteUserAttributesInput;

pub use crate::operation::admin_delete_user_attributes::_admin_delete_user_attributes_output::AdminDeleteUserAttributesOutput;

mod _admin_delete_user_attributes_input;

mod _admin_delete_user_attributes_output;

/// Builders
pub mod builders;
