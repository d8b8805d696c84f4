/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>AdminUpdateUserAttributes</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminUpdateUserAttributesOutput {}
impl ::std::fmt::Display for AdminUpdateUserAttributesOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f).finish()
    }
}
impl AdminUpdateUserAttributesOutput {
    /// Creates a new builder-style object to manufacture [`AdminUpdateUserAttributesOutput`](crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesOutput).
    pub fn builder() -> crate::operation::admin_update_user_attributes::builders::AdminUpdateUserAttributesOutputBuilder {
        crate::operation::admin_update_user_attributes::builders::AdminUpdateUserAttributesOutputBuilder::default()
    }
}

/// A builder for [`AdminUpdateUserAttributesOutput`](crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AdminUpdateUserAttributesOutputBuilder {}
impl AdminUpdateUserAttributesOutputBuilder {
    /// Consumes the builder and constructs a [`AdminUpdateUserAttributesOutput`](crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesOutput).
    pub fn build(self) -> crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesOutput {
        crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesOutput {}
    }
}
