/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>AdminDeleteUser</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminDeleteUserOutput {}
impl ::std::fmt::Display for AdminDeleteUserOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f).finish()
    }
}
impl AdminDeleteUserOutput {
    /// Creates a new builder-style object to manufacture [`AdminDeleteUserOutput`](crate::operation::admin_delete_user::AdminDeleteUserOutput).
    pub fn builder() -> crate::operation::admin_delete_user::builders::AdminDeleteUserOutputBuilder {
        crate::operation::admin_delete_user::builders::AdminDeleteUserOutputBuilder::default()
    }
}

/// A builder for [`AdminDeleteUserOutput`](crate::operation::admin_delete_user::AdminDeleteUserOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AdminDeleteUserOutputBuilder {}
impl AdminDeleteUserOutputBuilder {
    /// Consumes the builder and constructs a [`AdminDeleteUserOutput`](crate::operation::admin_delete_user::AdminDeleteUserOutput).
    pub fn build(self) -> crate::operation::admin_delete_user::AdminDeleteUserOutput {
        crate::operation::admin_delete_user::AdminDeleteUserOutput {}
    }
}
