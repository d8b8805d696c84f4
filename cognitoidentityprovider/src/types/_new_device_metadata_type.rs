/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Metadata of a device that was remembered during authentication.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NewDeviceMetadataType {
    /// <p>The device key.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_key: ::std::option::Option<::std::string::String>,
    /// <p>The device group key.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_group_key: ::std::option::Option<::std::string::String>,
}
impl NewDeviceMetadataType {
    /// <p>The device key.</p>
    pub fn device_key(&self) -> ::std::option::Option<&str> {
        self.device_key.as_deref()
    }

    /// <p>The device group key.</p>
    pub fn device_group_key(&self) -> ::std::option::Option<&str> {
        self.device_group_key.as_deref()
    }
}
impl ::std::fmt::Display for NewDeviceMetadataType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("DeviceKey", &self.device_key)
            .field("DeviceGroupKey", &self.device_group_key)
            .finish()
    }
}
impl NewDeviceMetadataType {
    /// Creates a new builder-style object to manufacture [`NewDeviceMetadataType`](crate::types::NewDeviceMetadataType).
    pub fn builder() -> crate::types::builders::NewDeviceMetadataTypeBuilder {
        crate::types::builders::NewDeviceMetadataTypeBuilder::default()
    }
}

/// A builder for [`NewDeviceMetadataType`](crate::types::NewDeviceMetadataType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct NewDeviceMetadataTypeBuilder {
    pub(crate) device_key: ::std::option::Option<::std::string::String>,
    pub(crate) device_group_key: ::std::option::Option<::std::string::String>,
}
impl NewDeviceMetadataTypeBuilder {
    /// <p>The device key.</p>
    pub fn device_key(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.device_key = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The device key.</p>
    pub fn set_device_key(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.device_key = input;
        self
    }
    /// <p>The device key.</p>
    pub fn get_device_key(&self) -> &::std::option::Option<::std::string::String> {
        &self.device_key
    }

    /// <p>The device group key.</p>
    pub fn device_group_key(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.device_group_key = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The device group key.</p>
    pub fn set_device_group_key(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.device_group_key = input;
        self
    }
    /// <p>The device group key.</p>
    pub fn get_device_group_key(&self) -> &::std::option::Option<::std::string::String> {
        &self.device_group_key
    }
    /// Consumes the builder and constructs a [`NewDeviceMetadataType`](crate::types::NewDeviceMetadataType).
    pub fn build(self) -> crate::types::NewDeviceMetadataType {
        crate::types::NewDeviceMetadataType {
            device_key: self.device_key,
            device_group_key: self.device_group_key,
        }
    }
}
