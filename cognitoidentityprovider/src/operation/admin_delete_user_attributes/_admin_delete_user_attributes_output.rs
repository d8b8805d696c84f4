/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>AdminDeleteUserAttributes</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminDeleteUserAttributesOutput {}
impl ::std::fmt::Display for AdminDeleteUserAttributesOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f).finish()
    }
}
impl AdminDeleteUserAttributesOutput {
    /// Creates a new builder-style object to manufacture [`AdminDeleteUserAttributesOutput`](crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesOutput).
    pub fn builder() -> crate::operation::admin_delete_user_attributes::builders::AdminDeleteUserAttributesOutputBuilder {
        crate::operation::admin_delete_user_attributes::builders::AdminDeleteUserAttributesOutputBuilder::default()
    }
}

/// A builder for [`AdminDeleteUserAttributesOutput`](crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AdminDeleteUserAttributesOutputBuilder {}
impl AdminDeleteUserAttributesOutputBuilder {
    /// Consumes the builder and constructs a [`AdminDeleteUserAttributesOutput`](crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesOutput).
    pub fn build(self) -> crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesOutput {
        crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesOutput {}
    }
}
