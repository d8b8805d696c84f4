/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>GlobalSignOut</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GlobalSignOutOutput {}
impl ::std::fmt::Display for GlobalSignOutOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f).finish()
    }
}
impl GlobalSignOutOutput {
    /// Creates a new builder-style object to manufacture [`GlobalSignOutOutput`](crate::operation::global_sign_out::GlobalSignOutOutput).
    pub fn builder() -> crate::operation::global_sign_out::builders::GlobalSignOutOutputBuilder {
        crate::operation::global_sign_out::builders::GlobalSignOutOutputBuilder::default()
    }
}

/// A builder for [`GlobalSignOutOutput`](crate::operation::global_sign_out::GlobalSignOutOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GlobalSignOutOutputBuilder {}
impl GlobalSignOutOutputBuilder {
    /// Consumes the builder and constructs a [`GlobalSignOutOutput`](crate::operation::global_sign_out::GlobalSignOutOutput).
    pub fn build(self) -> crate::operation::global_sign_out::GlobalSignOutOutput {
        crate::operation::global_sign_out::GlobalSignOutOutput {}
    }
}
