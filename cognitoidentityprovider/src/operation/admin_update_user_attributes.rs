/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// Orchestration and serialization glue logic for `AdminUpdateUserAttributes`.
#[derive(::std::clone::Clone, ::std::marker::Copy, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AdminUpdateUserAttributes;
impl AdminUpdateUserAttributes {
    /// Creates a new `AdminUpdateUserAttributes`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::Operation for AdminUpdateUserAttributes {
    const NAME: &'static str = "AdminUpdateUserAttributes";
    type Input = crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesInput;
    type Output = crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesOutput;
}
impl AdminUpdateUserAttributesInput {
    /// Sends this input as a `AdminUpdateUserAttributes` request through `client`.
    pub async fn send_with(self, client: &crate::Client) -> ::std::result::Result<AdminUpdateUserAttributesOutput, crate::error::SdkError> {
        client.send::<AdminUpdateUserAttributes>(self).await
    }
}

pub use crate::operation::admin_update_user_attributes::_admin_update_user_attributes_input::AdminUpdateUserAttributesInput;

pub use crate::operation::admin_update_user_attributes::_admin_update_user_attributes_output::AdminUpdateUserAttributesOutput;

mod _admin_update_user_attributes_input;

mod _admin_update_user_attributes_output;

/// Builders
pub mod builders;
