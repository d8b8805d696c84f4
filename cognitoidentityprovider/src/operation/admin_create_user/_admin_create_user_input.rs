/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Creates a user in a user pool as an administrator.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminCreateUserInput {
    /// <p>The ID of the user pool to create the user in.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: ::std::option::Option<::std::string::String>,
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: ::std::option::Option<::std::string::String>,
    /// <p>The attributes to set on the new user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attributes: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>,
    /// <p>Temporary attributes passed to the pre sign-up trigger and not stored.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_data: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>,
    /// <p>The temporary password of the user. Generated by the service when absent.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_password: ::std::option::Option<::std::string::String>,
    /// <p>Whether to move an alias that already belongs to another user to this user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_alias_creation: ::std::option::Option<bool>,
    /// <p>Set to <code>RESEND</code> to resend the invitation to an existing user, or <code>SUPPRESS</code> to send nothing.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_action: ::std::option::Option<crate::types::MessageActionType>,
    /// <p>How the welcome message is delivered.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_delivery_mediums: ::std::option::Option<::std::vec::Vec<crate::types::DeliveryMediumType>>,
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
}
impl AdminCreateUserInput {
    /// <p>The ID of the user pool to create the user in.</p>
    pub fn user_pool_id(&self) -> ::std::option::Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn username(&self) -> ::std::option::Option<&str> {
        self.username.as_deref()
    }

    /// <p>The attributes to set on the new user.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.user_attributes.is_none()`.
    pub fn user_attributes(&self) -> &[crate::types::AttributeType] {
        self.user_attributes.as_deref().unwrap_or_default()
    }

    /// <p>Temporary attributes passed to the pre sign-up trigger and not stored.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.validation_data.is_none()`.
    pub fn validation_data(&self) -> &[crate::types::AttributeType] {
        self.validation_data.as_deref().unwrap_or_default()
    }

    /// <p>The temporary password of the user. Generated by the service when absent.</p>
    pub fn temporary_password(&self) -> ::std::option::Option<&str> {
        self.temporary_password.as_deref()
    }

    /// <p>Whether to move an alias that already belongs to another user to this user.</p>
    pub fn force_alias_creation(&self) -> ::std::option::Option<bool> {
        self.force_alias_creation
    }

    /// <p>Set to <code>RESEND</code> to resend the invitation to an existing user, or <code>SUPPRESS</code> to send nothing.</p>
    pub fn message_action(&self) -> ::std::option::Option<&crate::types::MessageActionType> {
        self.message_action.as_ref()
    }

    /// <p>How the welcome message is delivered.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.desired_delivery_mediums.is_none()`.
    pub fn desired_delivery_mediums(&self) -> &[crate::types::DeliveryMediumType] {
        self.desired_delivery_mediums.as_deref().unwrap_or_default()
    }

    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn client_metadata(&self) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        self.client_metadata.as_ref()
    }
}
impl ::std::fmt::Debug for AdminCreateUserInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminCreateUserInput");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("user_attributes", &self.user_attributes);
        formatter.field("validation_data", &self.validation_data);
        formatter.field("temporary_password", &"*** Sensitive Data Redacted ***");
        formatter.field("force_alias_creation", &self.force_alias_creation);
        formatter.field("message_action", &self.message_action);
        formatter.field("desired_delivery_mediums", &self.desired_delivery_mediums);
        formatter.field("client_metadata", &self.client_metadata);
        formatter.finish()
    }
}
impl ::std::fmt::Display for AdminCreateUserInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPoolId", &self.user_pool_id)
            .sensitive("Username", &self.username)
            .list("UserAttributes", &self.user_attributes)
            .list("ValidationData", &self.validation_data)
            .sensitive("TemporaryPassword", &self.temporary_password)
            .field("ForceAliasCreation", &self.force_alias_creation)
            .field("MessageAction", &self.message_action)
            .list("DesiredDeliveryMediums", &self.desired_delivery_mediums)
            .map("ClientMetadata", &self.client_metadata)
            .finish()
    }
}
impl AdminCreateUserInput {
    /// Creates a new builder-style object to manufacture [`AdminCreateUserInput`](crate::operation::admin_create_user::AdminCreateUserInput).
    pub fn builder() -> crate::operation::admin_create_user::builders::AdminCreateUserInputBuilder {
        crate::operation::admin_create_user::builders::AdminCreateUserInputBuilder::default()
    }
}

/// A builder for [`AdminCreateUserInput`](crate::operation::admin_create_user::AdminCreateUserInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct AdminCreateUserInputBuilder {
    pub(crate) user_pool_id: ::std::option::Option<::std::string::String>,
    pub(crate) username: ::std::option::Option<::std::string::String>,
    pub(crate) user_attributes: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>,
    pub(crate) validation_data: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>,
    pub(crate) temporary_password: ::std::option::Option<::std::string::String>,
    pub(crate) force_alias_creation: ::std::option::Option<bool>,
    pub(crate) message_action: ::std::option::Option<crate::types::MessageActionType>,
    pub(crate) desired_delivery_mediums: ::std::option::Option<::std::vec::Vec<crate::types::DeliveryMediumType>>,
    pub(crate) client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
}
impl AdminCreateUserInputBuilder {
    /// <p>The ID of the user pool to create the user in.</p>
    pub fn user_pool_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.user_pool_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID of the user pool to create the user in.</p>
    pub fn set_user_pool_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.user_pool_id = input;
        self
    }
    /// <p>The ID of the user pool to create the user in.</p>
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
    /// <p>The attributes to set on the new user.</p>
    pub fn user_attributes(mut self, input: crate::types::AttributeType) -> Self {
        let mut v = self.user_attributes.unwrap_or_default();
        v.push(input);
        self.user_attributes = ::std::option::Option::Some(v);
        self
    }
    /// <p>The attributes to set on the new user.</p>
    pub fn set_user_attributes(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>) -> Self {
        self.user_attributes = input;
        self
    }
    /// <p>The attributes to set on the new user.</p>
    pub fn get_user_attributes(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::AttributeType>> {
        &self.user_attributes
    }

    /// Appends an item to `validation_data`.
    ///
    /// To override the contents of this collection use [`set_validation_data`](Self::set_validation_data).
    ///
    /// <p>Temporary attributes passed to the pre sign-up trigger and not stored.</p>
    pub fn validation_data(mut self, input: crate::types::AttributeType) -> Self {
        let mut v = self.validation_data.unwrap_or_default();
        v.push(input);
        self.validation_data = ::std::option::Option::Some(v);
        self
    }
    /// <p>Temporary attributes passed to the pre sign-up trigger and not stored.</p>
    pub fn set_validation_data(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>) -> Self {
        self.validation_data = input;
        self
    }
    /// <p>Temporary attributes passed to the pre sign-up trigger and not stored.</p>
    pub fn get_validation_data(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::AttributeType>> {
        &self.validation_data
    }

    /// <p>The temporary password of the user. Generated by the service when absent.</p>
    pub fn temporary_password(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.temporary_password = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The temporary password of the user. Generated by the service when absent.</p>
    pub fn set_temporary_password(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.temporary_password = input;
        self
    }
    /// <p>The temporary password of the user. Generated by the service when absent.</p>
    pub fn get_temporary_password(&self) -> &::std::option::Option<::std::string::String> {
        &self.temporary_password
    }

    /// <p>Whether to move an alias that already belongs to another user to this user.</p>
    pub fn force_alias_creation(mut self, input: bool) -> Self {
        self.force_alias_creation = ::std::option::Option::Some(input);
        self
    }
    /// <p>Whether to move an alias that already belongs to another user to this user.</p>
    pub fn set_force_alias_creation(mut self, input: ::std::option::Option<bool>) -> Self {
        self.force_alias_creation = input;
        self
    }
    /// <p>Whether to move an alias that already belongs to another user to this user.</p>
    pub fn get_force_alias_creation(&self) -> &::std::option::Option<bool> {
        &self.force_alias_creation
    }

    /// <p>Set to <code>RESEND</code> to resend the invitation to an existing user, or <code>SUPPRESS</code> to send nothing.</p>
    pub fn message_action(mut self, input: impl ::std::convert::Into<crate::types::MessageActionType>) -> Self {
        self.message_action = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Set to <code>RESEND</code> to resend the invitation to an existing user, or <code>SUPPRESS</code> to send nothing.</p>
    pub fn set_message_action(mut self, input: ::std::option::Option<crate::types::MessageActionType>) -> Self {
        self.message_action = input;
        self
    }
    /// <p>Set to <code>RESEND</code> to resend the invitation to an existing user, or <code>SUPPRESS</code> to send nothing.</p>
    pub fn get_message_action(&self) -> &::std::option::Option<crate::types::MessageActionType> {
        &self.message_action
    }

    /// Appends an item to `desired_delivery_mediums`.
    ///
    /// To override the contents of this collection use [`set_desired_delivery_mediums`](Self::set_desired_delivery_mediums).
    ///
    /// <p>How the welcome message is delivered.</p>
    pub fn desired_delivery_mediums(mut self, input: impl ::std::convert::Into<crate::types::DeliveryMediumType>) -> Self {
        let mut v = self.desired_delivery_mediums.unwrap_or_default();
        v.push(input.into());
        self.desired_delivery_mediums = ::std::option::Option::Some(v);
        self
    }
    /// <p>How the welcome message is delivered.</p>
    pub fn set_desired_delivery_mediums(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::DeliveryMediumType>>) -> Self {
        self.desired_delivery_mediums = input;
        self
    }
    /// <p>How the welcome message is delivered.</p>
    pub fn get_desired_delivery_mediums(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::DeliveryMediumType>> {
        &self.desired_delivery_mediums
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
    /// Consumes the builder and constructs a [`AdminCreateUserInput`](crate::operation::admin_create_user::AdminCreateUserInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::admin_create_user::AdminCreateUserInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::admin_create_user::AdminCreateUserInput {
            user_pool_id: self.user_pool_id,
            username: self.username,
            user_attributes: self.user_attributes,
            validation_data: self.validation_data,
            temporary_password: self.temporary_password,
            force_alias_creation: self.force_alias_creation,
            message_action: self.message_action,
            desired_delivery_mediums: self.desired_delivery_mediums,
            client_metadata: self.client_metadata,
        })
    }
}
impl ::std::fmt::Debug for AdminCreateUserInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminCreateUserInputBuilder");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("user_attributes", &self.user_attributes);
        formatter.field("validation_data", &self.validation_data);
        formatter.field("temporary_password", &"*** Sensitive Data Redacted ***");
        formatter.field("force_alias_creation", &self.force_alias_creation);
        formatter.field("message_action", &self.message_action);
        formatter.field("desired_delivery_mediums", &self.desired_delivery_mediums);
        formatter.field("client_metadata", &self.client_metadata);
        formatter.finish()
    }
}
