/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>ForgotPassword</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ForgotPasswordOutput {
    /// <p>Where the reset code was sent.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_delivery_details: ::std::option::Option<crate::types::CodeDeliveryDetailsType>,
}
impl ForgotPasswordOutput {
    /// <p>Where the reset code was sent.</p>
    pub fn code_delivery_details(&self) -> ::std::option::Option<&crate::types::CodeDeliveryDetailsType> {
        self.code_delivery_details.as_ref()
    }
}
impl ::std::fmt::Display for ForgotPasswordOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("CodeDeliveryDetails", &self.code_delivery_details)
            .finish()
    }
}
impl ForgotPasswordOutput {
    /// Creates a new builder-style object to manufacture [`ForgotPasswordOutput`](crate::operation::forgot_password::ForgotPasswordOutput).
    pub fn builder() -> crate::operation::forgot_password::builders::ForgotPasswordOutputBuilder {
        crate::operation::forgot_password::builders::ForgotPasswordOutputBuilder::default()
    }
}

/// A builder for [`ForgotPasswordOutput`](crate::operation::forgot_password::ForgotPasswordOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ForgotPasswordOutputBuilder {
    pub(crate) code_delivery_details: ::std::option::Option<crate::types::CodeDeliveryDetailsType>,
}
impl ForgotPasswordOutputBuilder {
    /// <p>Where the reset code was sent.</p>
    pub fn code_delivery_details(mut self, input: crate::types::CodeDeliveryDetailsType) -> Self {
        self.code_delivery_details = ::std::option::Option::Some(input);
        self
    }
    /// <p>Where the reset code was sent.</p>
    pub fn set_code_delivery_details(mut self, input: ::std::option::Option<crate::types::CodeDeliveryDetailsType>) -> Self {
        self.code_delivery_details = input;
        self
    }
    /// <p>Where the reset code was sent.</p>
    pub fn get_code_delivery_details(&self) -> &::std::option::Option<crate::types::CodeDeliveryDetailsType> {
        &self.code_delivery_details
    }
    /// Consumes the builder and constructs a [`ForgotPasswordOutput`](crate::operation::forgot_password::ForgotPasswordOutput).
    pub fn build(self) -> crate::operation::forgot_password::ForgotPasswordOutput {
        crate::operation::forgot_password::ForgotPasswordOutput {
            code_delivery_details: self.code_delivery_details,
        }
    }
}
