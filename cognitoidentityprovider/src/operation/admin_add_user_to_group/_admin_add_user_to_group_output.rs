/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>AdminAddUserToGroup</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminAddUserToGroupOutput {}
impl ::std::fmt::Display for AdminAddUserToGroupOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f).finish()
    }
}
impl AdminAddUserToGroupOutput {
    /// Creates a new builder-style object to manufacture [`AdminAddUserToGroupOutput`](crate::operation::admin_add_user_to_group::AdminAddUserToGroupOutput).
    pub fn builder() -> crate::operation::admin_add_user_to_group::builders::AdminAddUserToGroupOutputBuilder {
        crate::operation::admin_add_user_to_group::builders::AdminAddUserToGroupOutputBuilder::default()
    }
}

/// A builder for [`AdminAddUserToGroupOutput`](crate::operation::admin_add_user_to_group::AdminAddUserToGroupOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AdminAddUserToGroupOutputBuilder {}
impl AdminAddUserToGroupOutputBuilder {
    /// Consumes the builder and constructs a [`AdminAddUserToGroupOutput`](crate::operation::admin_add_user_to_group::AdminAddUserToGroupOutput).
    pub fn build(self) -> crate::operation::admin_add_user_to_group::AdminAddUserToGroupOutput {
        crate::operation::admin_add_user_to_group::AdminAddUserToGroupOutput {}
    }
}
