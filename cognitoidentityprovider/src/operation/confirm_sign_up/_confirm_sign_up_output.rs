/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>ConfirmSignUp</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConfirmSignUpOutput {}
impl ::std::fmt::Display for ConfirmSignUpOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f).finish()
    }
}
impl ConfirmSignUpOutput {
    /// Creates a new builder-style object to manufacture [`ConfirmSignUpOutput`](crate::operation::confirm_sign_up::ConfirmSignUpOutput).
    pub fn builder() -> crate::operation::confirm_sign_up::builders::ConfirmSignUpOutputBuilder {
        crate::operation::confirm_sign_up::builders::ConfirmSignUpOutputBuilder::default()
    }
}

/// A builder for [`ConfirmSignUpOutput`](crate::operation::confirm_sign_up::ConfirmSignUpOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ConfirmSignUpOutputBuilder {}
impl ConfirmSignUpOutputBuilder {
    /// Consumes the builder and constructs a [`ConfirmSignUpOutput`](crate::operation::confirm_sign_up::ConfirmSignUpOutput).
    pub fn build(self) -> crate::operation::confirm_sign_up::ConfirmSignUpOutput {
        crate::operation::confirm_sign_up::ConfirmSignUpOutput {}
    }
}
