/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>ConfirmForgotPassword</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConfirmForgotPasswordOutput {}
impl ::std::fmt::Display for ConfirmForgotPasswordOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f).finish()
    }
}
impl ConfirmForgotPasswordOutput {
    /// Creates a new builder-style object to manufacture [`ConfirmForgotPasswordOutput`](crate::operation::confirm_forgot_password::ConfirmForgotPasswordOutput).
    pub fn builder() -> crate::operation::confirm_forgot_password::builders::ConfirmForgotPasswordOutputBuilder {
        crate::operation::confirm_forgot_password::builders::ConfirmForgotPasswordOutputBuilder::default()
    }
}

/// A builder for [`ConfirmForgotPasswordOutput`](crate::operation::confirm_forgot_password::ConfirmForgotPasswordOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ConfirmForgotPasswordOutputBuilder {}
impl ConfirmForgotPasswordOutputBuilder {
    /// Consumes the builder and constructs a [`ConfirmForgotPasswordOutput`](crate::operation::confirm_forgot_password::ConfirmForgotPasswordOutput).
    pub fn build(self) -> crate::operation::confirm_forgot_password::ConfirmForgotPasswordOutput {
        crate::operation::confirm_forgot_password::ConfirmForgotPasswordOutput {}
    }
}
