/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>AdminDisableUser</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminDisableUserOutput {}
impl ::std::fmt::Display for AdminDisableUserOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f).finish()
    }
}
impl AdminDisableUserOutput {
    /// Creates a new builder-style object to manufacture [`AdminDisableUserOutput`](crate::operation::admin_disable_user::AdminDisableUserOutput).
    pub fn builder() -> crate::operation::admin_disable_user::builders::AdminDisableUserOutputBuilder {
        crate::operation::admin_disable_user::builders::AdminDisableUserOutputBuilder::default()
    }
}

/// A builder for [`AdminDisableUserOutput`](crate::operation::admin_disable_user::AdminDisableUserOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AdminDisableUserOutputBuilder {}
impl AdminDisableUserOutputBuilder {
    /// Consumes the builder and constructs a [`AdminDisableUserOutput`](crate::operation::admin_disable_user::AdminDisableUserOutput).
    pub fn build(self) -> crate::operation::admin_disable_user::AdminDisableUserOutput {
        crate::operation::admin_disable_user::AdminDisableUserOutput {}
    }
}
