/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Legacy SMS multi-factor authentication settings of a user.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MfaOptionType {
    /// <p>The delivery medium for the authentication code. Only <code>SMS</code> is supported.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_medium: ::std::option::Option<crate::types::DeliveryMediumType>,
    /// <p>The attribute that receives the authentication code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: ::std::option::Option<::std::string::String>,
}
impl MfaOptionType {
    /// <p>The delivery medium for the authentication code. Only <code>SMS</code> is supported.</p>
    pub fn delivery_medium(&self) -> ::std::option::Option<&crate::types::DeliveryMediumType> {
        self.delivery_medium.as_ref()
    }

    /// <p>The attribute that receives the authentication code.</p>
    pub fn attribute_name(&self) -> ::std::option::Option<&str> {
        self.attribute_name.as_deref()
    }
}
impl ::std::fmt::Display for MfaOptionType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("DeliveryMedium", &self.delivery_medium)
            .field("AttributeName", &self.attribute_name)
            .finish()
    }
}
impl MfaOptionType {
    /// Creates a new builder-style object to manufacture [`MfaOptionType`](crate::types::MfaOptionType).
    pub fn builder() -> crate::types::builders::MfaOptionTypeBuilder {
        crate::types::builders::MfaOptionTypeBuilder::default()
    }
}

/// A builder for [`MfaOptionType`](crate::types::MfaOptionType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct MfaOptionTypeBuilder {
    pub(crate) delivery_medium: ::std::option::Option<crate::types::DeliveryMediumType>,
    pub(crate) attribute_name: ::std::option::Option<::std::string::String>,
}
impl MfaOptionTypeBuilder {
    /// <p>The delivery medium for the authentication code. Only <code>SMS</code> is supported.</p>
    pub fn delivery_medium(mut self, input: impl ::std::convert::Into<crate::types::DeliveryMediumType>) -> Self {
        self.delivery_medium = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The delivery medium for the authentication code. Only <code>SMS</code> is supported.</p>
    pub fn set_delivery_medium(mut self, input: ::std::option::Option<crate::types::DeliveryMediumType>) -> Self {
        self.delivery_medium = input;
        self
    }
    /// <p>The delivery medium for the authentication code. Only <code>SMS</code> is supported.</p>
    pub fn get_delivery_medium(&self) -> &::std::option::Option<crate::types::DeliveryMediumType> {
        &self.delivery_medium
    }

    /// <p>The attribute that receives the authentication code.</p>
    pub fn attribute_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.attribute_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The attribute that receives the authentication code.</p>
    pub fn set_attribute_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.attribute_name = input;
        self
    }
    /// <p>The attribute that receives the authentication code.</p>
    pub fn get_attribute_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.attribute_name
    }
    /// Consumes the builder and constructs a [`MfaOptionType`](crate::types::MfaOptionType).
    pub fn build(self) -> crate::types::MfaOptionType {
        crate::types::MfaOptionType {
            delivery_medium: self.delivery_medium,
            attribute_name: self.attribute_name,
        }
    }
}
