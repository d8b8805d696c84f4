/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>ChangePassword</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ChangePasswordOutput {}
impl ::std::fmt::Display for ChangePasswordOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f).finish()
    }
}
impl ChangePasswordOutput {
    /// Creates a new builder-style object to manufacture [`ChangePasswordOutput`](crate::operation::change_password::ChangePasswordOutput).
    pub fn builder() -> crate::operation::change_password::builders::ChangePasswordOutputBuilder {
        crate::operation::change_password::builders::ChangePasswordOutputBuilder::default()
    }
}

/// A builder for [`ChangePasswordOutput`](crate::operation::change_password::ChangePasswordOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ChangePasswordOutputBuilder {}
impl ChangePasswordOutputBuilder {
    /// Consumes the builder and constructs a [`ChangePasswordOutput`](crate::operation::change_password::ChangePasswordOutput).
    pub fn build(self) -> crate::operation::change_password::ChangePasswordOutput {
        crate::operation::change_password::ChangePasswordOutput {}
    }
}
