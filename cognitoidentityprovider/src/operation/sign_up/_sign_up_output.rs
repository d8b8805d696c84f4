/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>SignUp</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SignUpOutput {
    /// <p>Whether the user was confirmed on registration.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_confirmed: ::std::option::Option<bool>,
    /// <p>Where the confirmation code was sent.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_delivery_details: ::std::option::Option<crate::types::CodeDeliveryDetailsType>,
    /// <p>The unique identifier of the new user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_sub: ::std::option::Option<::std::string::String>,
}
impl SignUpOutput {
    /// <p>Whether the user was confirmed on registration.</p>
    pub fn user_confirmed(&self) -> ::std::option::Option<bool> {
        self.user_confirmed
    }

    /// <p>Where the confirmation code was sent.</p>
    pub fn code_delivery_details(&self) -> ::std::option::Option<&crate::types::CodeDeliveryDetailsType> {
        self.code_delivery_details.as_ref()
    }

    /// <p>The unique identifier of the new user.</p>
    pub fn user_sub(&self) -> ::std::option::Option<&str> {
        self.user_sub.as_deref()
    }
}
impl ::std::fmt::Display for SignUpOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserConfirmed", &self.user_confirmed)
            .field("CodeDeliveryDetails", &self.code_delivery_details)
            .field("UserSub", &self.user_sub)
            .finish()
    }
}
impl SignUpOutput {
    /// Creates a new builder-style object to manufacture [`SignUpOutput`](crate::operation::sign_up::SignUpOutput).
    pub fn builder() -> crate::operation::sign_up::builders::SignUpOutputBuilder {
        crate::operation::sign_up::builders::SignUpOutputBuilder::default()
    }
}

/// A builder for [`SignUpOutput`](crate::operation::sign_up::SignUpOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct SignUpOutputBuilder {
    pub(crate) user_confirmed: ::std::option::Option<bool>,
    pub(crate) code_delivery_details: ::std::option::Option<crate::types::CodeDeliveryDetailsType>,
    pub(crate) user_sub: ::std::option::Option<::std::string::String>,
}
impl SignUpOutputBuilder {
    /// <p>Whether the user was confirmed on registration.</p>
    pub fn user_confirmed(mut self, input: bool) -> Self {
        self.user_confirmed = ::std::option::Option::Some(input);
        self
    }
    /// <p>Whether the user was confirmed on registration.</p>
    pub fn set_user_confirmed(mut self, input: ::std::option::Option<bool>) -> Self {
        self.user_confirmed = input;
        self
    }
    /// <p>Whether the user was confirmed on registration.</p>
    pub fn get_user_confirmed(&self) -> &::std::option::Option<bool> {
        &self.user_confirmed
    }

    /// <p>Where the confirmation code was sent.</p>
    pub fn code_delivery_details(mut self, input: crate::types::CodeDeliveryDetailsType) -> Self {
        self.code_delivery_details = ::std::option::Option::Some(input);
        self
    }
    /// <p>Where the confirmation code was sent.</p>
    pub fn set_code_delivery_details(mut self, input: ::std::option::Option<crate::types::CodeDeliveryDetailsType>) -> Self {
        self.code_delivery_details = input;
        self
    }
    /// <p>Where the confirmation code was sent.</p>
    pub fn get_code_delivery_details(&self) -> &::std::option::Option<crate::types::CodeDeliveryDetailsType> {
        &self.code_delivery_details
    }

    /// <p>The unique identifier of the new user.</p>
    pub fn user_sub(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.user_sub = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The unique identifier of the new user.</p>
    pub fn set_user_sub(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.user_sub = input;
        self
    }
    /// <p>The unique identifier of the new user.</p>
    pub fn get_user_sub(&self) -> &::std::option::Option<::std::string::String> {
        &self.user_sub
    }
    /// Consumes the builder and constructs a [`SignUpOutput`](crate::operation::sign_up::SignUpOutput).
    pub fn build(self) -> crate::operation::sign_up::SignUpOutput {
        crate::operation::sign_up::SignUpOutput {
            user_confirmed: self.user_confirmed,
            code_delivery_details: self.code_delivery_details,
            user_sub: self.user_sub,
        }
    }
}
