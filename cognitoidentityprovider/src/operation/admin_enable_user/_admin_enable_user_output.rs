/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>AdminEnableUser</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminEnableUserOutput {}
impl ::std::fmt::Display for AdminEnableUserOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f).finish()
    }
}
impl AdminEnableUserOutput {
    /// Creates a new builder-style object to manufacture [`AdminEnableUserOutput`](crate::operation::admin_enable_user::AdminEnableUserOutput).
    pub fn builder() -> crate::operation::admin_enable_user::builders::AdminEnableUserOutputBuilder {
        crate::operation::admin_enable_user::builders::AdminEnableUserOutputBuilder::default()
    }
}

/// A builder for [`AdminEnableUserOutput`](crate::operation::admin_enable_user::AdminEnableUserOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AdminEnableUserOutputBuilder {}
impl AdminEnableUserOutputBuilder {
    /// Consumes the builder and constructs a [`AdminEnableUserOutput`](crate::operation::admin_enable_user::AdminEnableUserOutput).
    pub fn build(self) -> crate::operation::admin_enable_user::AdminEnableUserOutput {
        crate::operation::admin_enable_user::AdminEnableUserOutput {}
    }
}
