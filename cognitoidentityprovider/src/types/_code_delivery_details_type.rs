/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Where and how a verification code was delivered.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CodeDeliveryDetailsType {
    /// <p>The masked email address or phone number the code was sent to.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: ::std::option::Option<::std::string::String>,
    /// <p>The method that delivered the code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_medium: ::std::option::Option<crate::types::DeliveryMediumType>,
    /// <p>The name of the attribute the code was sent for.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: ::std::option::Option<::std::string::String>,
}
impl CodeDeliveryDetailsType {
    /// <p>The masked email address or phone number the code was sent to.</p>
    pub fn destination(&self) -> ::std::option::Option<&str> {
        self.destination.as_deref()
    }

    /// <p>The method that delivered the code.</p>
    pub fn delivery_medium(&self) -> ::std::option::Option<&crate::types::DeliveryMediumType> {
        self.delivery_medium.as_ref()
    }

    /// <p>The name of the attribute the code was sent for.</p>
    pub fn attribute_name(&self) -> ::std::option::Option<&str> {
        self.attribute_name.as_deref()
    }
}
impl ::std::fmt::Display for CodeDeliveryDetailsType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("Destination", &self.destination)
            .field("DeliveryMedium", &self.delivery_medium)
            .field("AttributeName", &self.attribute_name)
            .finish()
    }
}
impl CodeDeliveryDetailsType {
    /// Creates a new builder-style object to manufacture [`CodeDeliveryDetailsType`](crate::types::CodeDeliveryDetailsType).
    pub fn builder() -> crate::types::builders::CodeDeliveryDetailsTypeBuilder {
        crate::types::builders::CodeDeliveryDetailsTypeBuilder::default()
    }
}

/// A builder for [`CodeDeliveryDetailsType`](crate::types::CodeDeliveryDetailsType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CodeDeliveryDetailsTypeBuilder {
    pub(crate) destination: ::std::option::Option<::std::string::String>,
    pub(crate) delivery_medium: ::std::option::Option<crate::types::DeliveryMediumType>,
    pub(crate) attribute_name: ::std::option::Option<::std::string::String>,
}
impl CodeDeliveryDetailsTypeBuilder {
    /// <p>The masked email address or phone number the code was sent to.</p>
    pub fn destination(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.destination = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The masked email address or phone number the code was sent to.</p>
    pub fn set_destination(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.destination = input;
        self
    }
    /// <p>The masked email address or phone number the code was sent to.</p>
    pub fn get_destination(&self) -> &::std::option::Option<::std::string::String> {
        &self.destination
    }

    /// <p>The method that delivered the code.</p>
    pub fn delivery_medium(mut self, input: impl ::std::convert::Into<crate::types::DeliveryMediumType>) -> Self {
        self.delivery_medium = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The method that delivered the code.</p>
    pub fn set_delivery_medium(mut self, input: ::std::option::Option<crate::types::DeliveryMediumType>) -> Self {
        self.delivery_medium = input;
        self
    }
    /// <p>The method that delivered the code.</p>
    pub fn get_delivery_medium(&self) -> &::std::option::Option<crate::types::DeliveryMediumType> {
        &self.delivery_medium
    }

    /// <p>The name of the attribute the code was sent for.</p>
    pub fn attribute_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.attribute_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the attribute the code was sent for.</p>
    pub fn set_attribute_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.attribute_name = input;
        self
    }
    /// <p>The name of the attribute the code was sent for.</p>
    pub fn get_attribute_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.attribute_name
    }
    /// Consumes the builder and constructs a [`CodeDeliveryDetailsType`](crate::types::CodeDeliveryDetailsType).
    pub fn build(self) -> crate::types::CodeDeliveryDetailsType {
        crate::types::CodeDeliveryDetailsType {
            destination: self.destination,
            delivery_medium: self.delivery_medium,
            attribute_name: self.attribute_name,
        }
    }
}
