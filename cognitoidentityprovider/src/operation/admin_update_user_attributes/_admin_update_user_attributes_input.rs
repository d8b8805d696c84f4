/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Updates the attributes of a user as an administrator.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminUpdateUserAttributesInput {
    /// <p>The ID of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: ::std::option::Option<::std::string::String>,
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: ::std::option::Option<::std::string::String>,
    /// <p>The attributes to update.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attributes: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>,
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
}
impl AdminUpdateUserAttributesInput {
    /// <p>The ID of the user pool.</p>
    pub fn user_pool_id(&self) -> ::std::option::Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn username(&self) -> ::std::option::Option<&str> {
        self.username.as_deref()
    }

    /// <p>The attributes to update.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.user_attributes.is_none()`.
    pub fn user_attributes(&self) -> &[crate::types::AttributeType] {
        self.user_attributes.as_deref().unwrap_or_default()
    }

    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn client_metadata(&self) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        self.client_metadata.as_ref()
    }
}
impl ::std::fmt::Debug for AdminUpdateUserAttributesInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminUpdateUserAttributesInput");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("user_attributes", &self.user_attributes);
        formatter.field("client_metadata", &self.client_metadata);
        formatter.finish()
    }
}
impl ::std::fmt::Display for AdminUpdateUserAttributesInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPoolId", &self.user_pool_id)
            .sensitive("Username", &self.username)
            .list("UserAttributes", &self.user_attributes)
            .map("ClientMetadata", &self.client_metadata)
            .finish()
    }
}
impl AdminUpdateUserAttributesInput {
    /// Creates a new builder-style object to manufacture [`AdminUpdateUserAttributesInput`](crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesInput).
    pub fn builder() -> crate::operation::admin_update_user_attributes::builders::AdminUpdateUserAttributesInputBuilder {
        crate::operation::admin_update_user_attributes::builders::AdminUpdateUserAttributesInputBuilder::default()
    }
}

/// A builder for [`AdminUpdateUserAttributesInput`](crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct AdminUpdateUserAttributesInputBuilder {
    pub(crate) user_pool_id: ::std::option::Option<::std::string::String>,
    pub(crate) username: ::std::option::Option<::std::string::String>,
    pub(crate) user_attributes: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>,
    pub(crate) client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
}
impl AdminUpdateUserAttributesInputBuilder {
    /// <p>The ID of the user pool.</p>
    pub fn user_pool_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.user_pool_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID of the user pool.</p>
    pub fn set_user_pool_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.user_pool_id = input;
        self
    }
    /// <p>The ID of the user pool.</p>
    pub fn get_user_pool_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.user_pool_id
    }

    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn username(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.username = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn set_username(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.username = input;
        self
    }
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn get_username(&self) -> &::std::option::Option<::std::string::String> {
        &self.username
    }

    /// Appends an item to `user_attributes`.
    ///
    /// To override the contents of this collection use [`set_user_attributes`](Self::set_user_attributes).
    ///
    /// <p>The attributes to update.</p>
    pub fn user_attributes(mut self, input: crate::types::AttributeType) -> Self {
        let mut v = self.user_attributes.unwrap_or_default();
        v.push(input);
        self.user_attributes = ::std::option::Option::Some(v);
        self
    }
    /// <p>The attributes to update.</p>
    pub fn set_user_attributes(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>) -> Self {
        self.user_attributes = input;
        self
    }
    /// <p>The attributes to update.</p>
    pub fn get_user_attributes(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::AttributeType>> {
        &self.user_attributes
    }

    /// Adds a key-value pair to `client_metadata`, failing if `k` is already present.
    ///
    /// To override the contents of this collection use [`set_client_metadata`](Self::set_client_metadata).
    ///
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn client_metadata(
        mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<Self, crate::error::DuplicateKeyError> {
        self.add_client_metadata_entry(k, v)?;
        ::std::result::Result::Ok(self)
    }
    /// Adds a key-value pair to `client_metadata` in place, failing if `k` is already present.
    pub fn add_client_metadata_entry(
        &mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<&mut Self, crate::error::DuplicateKeyError> {
        crate::collections::insert_unique(&mut self.client_metadata, "ClientMetadata", k.into(), v.into())?;
        ::std::result::Result::Ok(self)
    }
    /// Removes every entry of `client_metadata`, leaving it absent.
    pub fn clear_client_metadata_entries(&mut self) -> &mut Self {
        self.client_metadata = ::std::option::Option::None;
        self
    }
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn set_client_metadata(mut self, input: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>) -> Self {
        self.client_metadata = input;
        self
    }
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn get_client_metadata(&self) -> &::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        &self.client_metadata
    }
    /// Consumes the builder and constructs a [`AdminUpdateUserAttributesInput`](crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::admin_update_user_attributes::AdminUpdateUserAttributesInput {
            user_pool_id: self.user_pool_id,
            username: self.username,
            user_attributes: self.user_attributes,
            client_metadata: self.client_metadata,
        })
    }
}
impl ::std::fmt::Debug for AdminUpdateUserAttributesInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminUpdateUserAttributesInputBuilder");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("user_attributes", &self.user_attributes);
        formatter.field("client_metadata", &self.client_metadata);
        formatter.finish()
    }
}
