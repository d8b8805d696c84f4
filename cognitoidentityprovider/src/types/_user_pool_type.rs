/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The configuration of a user pool.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserPoolType {
    /// <p>The ID of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: ::std::option::Option<::std::string::String>,
    /// <p>The name of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The Lambda triggers of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_config: ::std::option::Option<crate::types::LambdaConfigType>,
    /// <p>Whether the user pool is enabled.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: ::std::option::Option<crate::types::StatusType>,
    /// <p>The date the user pool was last modified.</p>
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::serde_util::epoch_seconds")]
    pub last_modified_date: ::std::option::Option<crate::primitives::DateTime>,
    /// <p>The date the user pool was created.</p>
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::serde_util::epoch_seconds")]
    pub creation_date: ::std::option::Option<crate::primitives::DateTime>,
    /// <p>The attributes that are verified automatically.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_verified_attributes: ::std::option::Option<::std::vec::Vec<crate::types::VerifiedAttributeType>>,
    /// <p>The attributes users can sign in with as an alias.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_attributes: ::std::option::Option<::std::vec::Vec<crate::types::AliasAttributeType>>,
    /// <p>The attributes users can supply as their username.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_attributes: ::std::option::Option<::std::vec::Vec<crate::types::UsernameAttributeType>>,
    /// <p>The multi-factor authentication configuration.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_configuration: ::std::option::Option<crate::types::UserPoolMfaType>,
    /// <p>An estimate of the number of users in the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_number_of_users: ::std::option::Option<i32>,
    /// <p>The tags attached to the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_tags: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
    /// <p>The ARN of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: ::std::option::Option<::std::string::String>,
    /// <p>The domain prefix of the hosted UI, if one is configured.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: ::std::option::Option<::std::string::String>,
}
impl UserPoolType {
    /// <p>The ID of the user pool.</p>
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }

    /// <p>The name of the user pool.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }

    /// <p>The Lambda triggers of the user pool.</p>
    pub fn lambda_config(&self) -> ::std::option::Option<&crate::types::LambdaConfigType> {
        self.lambda_config.as_ref()
    }

    /// <p>Whether the user pool is enabled.</p>
    pub fn status(&self) -> ::std::option::Option<&crate::types::StatusType> {
        self.status.as_ref()
    }

    /// <p>The date the user pool was last modified.</p>
    pub fn last_modified_date(&self) -> ::std::option::Option<&crate::primitives::DateTime> {
        self.last_modified_date.as_ref()
    }

    /// <p>The date the user pool was created.</p>
    pub fn creation_date(&self) -> ::std::option::Option<&crate::primitives::DateTime> {
        self.creation_date.as_ref()
    }

    /// <p>The attributes that are verified automatically.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.auto_verified_attributes.is_none()`.
    pub fn auto_verified_attributes(&self) -> &[crate::types::VerifiedAttributeType] {
        self.auto_verified_attributes.as_deref().unwrap_or_default()
    }

    /// <p>The attributes users can sign in with as an alias.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.alias_attributes.is_none()`.
    pub fn alias_attributes(&self) -> &[crate::types::AliasAttributeType] {
        self.alias_attributes.as_deref().unwrap_or_default()
    }

    /// <p>The attributes users can supply as their username.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.username_attributes.is_none()`.
    pub fn username_attributes(&self) -> &[crate::types::UsernameAttributeType] {
        self.username_attributes.as_deref().unwrap_or_default()
    }

    /// <p>The multi-factor authentication configuration.</p>
    pub fn mfa_configuration(&self) -> ::std::option::Option<&crate::types::UserPoolMfaType> {
        self.mfa_configuration.as_ref()
    }

    /// <p>An estimate of the number of users in the user pool.</p>
    pub fn estimated_number_of_users(&self) -> ::std::option::Option<i32> {
        self.estimated_number_of_users
    }

    /// <p>The tags attached to the user pool.</p>
    pub fn user_pool_tags(&self) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        self.user_pool_tags.as_ref()
    }

    /// <p>The ARN of the user pool.</p>
    pub fn arn(&self) -> ::std::option::Option<&str> {
        self.arn.as_deref()
    }

    /// <p>The domain prefix of the hosted UI, if one is configured.</p>
    pub fn domain(&self) -> ::std::option::Option<&str> {
        self.domain.as_deref()
    }
}
impl ::std::fmt::Display for UserPoolType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("Id", &self.id)
            .field("Name", &self.name)
            .field("LambdaConfig", &self.lambda_config)
            .field("Status", &self.status)
            .timestamp("LastModifiedDate", &self.last_modified_date)
            .timestamp("CreationDate", &self.creation_date)
            .list("AutoVerifiedAttributes", &self.auto_verified_attributes)
            .list("AliasAttributes", &self.alias_attributes)
            .list("UsernameAttributes", &self.username_attributes)
            .field("MfaConfiguration", &self.mfa_configuration)
            .field("EstimatedNumberOfUsers", &self.estimated_number_of_users)
            .map("UserPoolTags", &self.user_pool_tags)
            .field("Arn", &self.arn)
            .field("Domain", &self.domain)
            .finish()
    }
}
impl UserPoolType {
    /// Creates a new builder-style object to manufacture [`UserPoolType`](crate::types::UserPoolType).
    pub fn builder() -> crate::types::builders::UserPoolTypeBuilder {
        crate::types::builders::UserPoolTypeBuilder::default()
    }
}

/// A builder for [`UserPoolType`](crate::types::UserPoolType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct UserPoolTypeBuilder {
    pub(crate) id: ::std::option::Option<::std::string::String>,
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) lambda_config: ::std::option::Option<crate::types::LambdaConfigType>,
    pub(crate) status: ::std::option::Option<crate::types::StatusType>,
    pub(crate) last_modified_date: ::std::option::Option<crate::primitives::DateTime>,
    pub(crate) creation_date: ::std::option::Option<crate::primitives::DateTime>,
    pub(crate) auto_verified_attributes: ::std::option::Option<::std::vec::Vec<crate::types::VerifiedAttributeType>>,
    pub(crate) alias_attributes: ::std::option::Option<::std::vec::Vec<crate::types::AliasAttributeType>>,
    pub(crate) username_attributes: ::std::option::Option<::std::vec::Vec<crate::types::UsernameAttributeType>>,
    pub(crate) mfa_configuration: ::std::option::Option<crate::types::UserPoolMfaType>,
    pub(crate) estimated_number_of_users: ::std::option::Option<i32>,
    pub(crate) user_pool_tags: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
    pub(crate) arn: ::std::option::Option<::std::string::String>,
    pub(crate) domain: ::std::option::Option<::std::string::String>,
}
impl UserPoolTypeBuilder {
    /// <p>The ID of the user pool.</p>
    pub fn id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID of the user pool.</p>
    pub fn set_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.id = input;
        self
    }
    /// <p>The ID of the user pool.</p>
    pub fn get_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.id
    }

    /// <p>The name of the user pool.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the user pool.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the user pool.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }

    /// <p>The Lambda triggers of the user pool.</p>
    pub fn lambda_config(mut self, input: crate::types::LambdaConfigType) -> Self {
        self.lambda_config = ::std::option::Option::Some(input);
        self
    }
    /// <p>The Lambda triggers of the user pool.</p>
    pub fn set_lambda_config(mut self, input: ::std::option::Option<crate::types::LambdaConfigType>) -> Self {
        self.lambda_config = input;
        self
    }
    /// <p>The Lambda triggers of the user pool.</p>
    pub fn get_lambda_config(&self) -> &::std::option::Option<crate::types::LambdaConfigType> {
        &self.lambda_config
    }

    /// <p>Whether the user pool is enabled.</p>
    pub fn status(mut self, input: impl ::std::convert::Into<crate::types::StatusType>) -> Self {
        self.status = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Whether the user pool is enabled.</p>
    pub fn set_status(mut self, input: ::std::option::Option<crate::types::StatusType>) -> Self {
        self.status = input;
        self
    }
    /// <p>Whether the user pool is enabled.</p>
    pub fn get_status(&self) -> &::std::option::Option<crate::types::StatusType> {
        &self.status
    }

    /// <p>The date the user pool was last modified.</p>
    pub fn last_modified_date(mut self, input: crate::primitives::DateTime) -> Self {
        self.last_modified_date = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date the user pool was last modified.</p>
    pub fn set_last_modified_date(mut self, input: ::std::option::Option<crate::primitives::DateTime>) -> Self {
        self.last_modified_date = input;
        self
    }
    /// <p>The date the user pool was last modified.</p>
    pub fn get_last_modified_date(&self) -> &::std::option::Option<crate::primitives::DateTime> {
        &self.last_modified_date
    }

    /// <p>The date the user pool was created.</p>
    pub fn creation_date(mut self, input: crate::primitives::DateTime) -> Self {
        self.creation_date = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date the user pool was created.</p>
    pub fn set_creation_date(mut self, input: ::std::option::Option<crate::primitives::DateTime>) -> Self {
        self.creation_date = input;
        self
    }
    /// <p>The date the user pool was created.</p>
    pub fn get_creation_date(&self) -> &::std::option::Option<crate::primitives::DateTime> {
        &self.creation_date
    }

    /// Appends an item to `auto_verified_attributes`.
    ///
    /// To override the contents of this collection use [`set_auto_verified_attributes`](Self::set_auto_verified_attributes).
    ///
    /// <p>The attributes that are verified automatically.</p>
    pub fn auto_verified_attributes(mut self, input: impl ::std::convert::Into<crate::types::VerifiedAttributeType>) -> Self {
        let mut v = self.auto_verified_attributes.unwrap_or_default();
        v.push(input.into());
        self.auto_verified_attributes = ::std::option::Option::Some(v);
        self
    }
    /// <p>The attributes that are verified automatically.</p>
    pub fn set_auto_verified_attributes(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::VerifiedAttributeType>>) -> Self {
        self.auto_verified_attributes = input;
        self
    }
    /// <p>The attributes that are verified automatically.</p>
    pub fn get_auto_verified_attributes(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::VerifiedAttributeType>> {
        &self.auto_verified_attributes
    }

    /// Appends an item to `alias_attributes`.
    ///
    /// To override the contents of this collection use [`set_alias_attributes`](Self::set_alias_attributes).
    ///
    /// <p>The attributes users can sign in with as an alias.</p>
    pub fn alias_attributes(mut self, input: impl ::std::convert::Into<crate::types::AliasAttributeType>) -> Self {
        let mut v = self.alias_attributes.unwrap_or_default();
        v.push(input.into());
        self.alias_attributes = ::std::option::Option::Some(v);
        self
    }
    /// <p>The attributes users can sign in with as an alias.</p>
    pub fn set_alias_attributes(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::AliasAttributeType>>) -> Self {
        self.alias_attributes = input;
        self
    }
    /// <p>The attributes users can sign in with as an alias.</p>
    pub fn get_alias_attributes(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::AliasAttributeType>> {
        &self.alias_attributes
    }

    /// Appends an item to `username_attributes`.
    ///
    /// To override the contents of this collection use [`set_username_attributes`](Self::set_username_attributes).
    ///
    /// <p>The attributes users can supply as their username.</p>
    pub fn username_attributes(mut self, input: impl ::std::convert::Into<crate::types::UsernameAttributeType>) -> Self {
        let mut v = self.username_attributes.unwrap_or_default();
        v.push(input.into());
        self.username_attributes = ::std::option::Option::Some(v);
        self
    }
    /// <p>The attributes users can supply as their username.</p>
    pub fn set_username_attributes(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::UsernameAttributeType>>) -> Self {
        self.username_attributes = input;
        self
    }
    /// <p>The attributes users can supply as their username.</p>
    pub fn get_username_attributes(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::UsernameAttributeType>> {
        &self.username_attributes
    }

    /// <p>The multi-factor authentication configuration.</p>
    pub fn mfa_configuration(mut self, input: impl ::std::convert::Into<crate::types::UserPoolMfaType>) -> Self {
        self.mfa_configuration = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The multi-factor authentication configuration.</p>
    pub fn set_mfa_configuration(mut self, input: ::std::option::Option<crate::types::UserPoolMfaType>) -> Self {
        self.mfa_configuration = input;
        self
    }
    /// <p>The multi-factor authentication configuration.</p>
    pub fn get_mfa_configuration(&self) -> &::std::option::Option<crate::types::UserPoolMfaType> {
        &self.mfa_configuration
    }

    /// <p>An estimate of the number of users in the user pool.</p>
    pub fn estimated_number_of_users(mut self, input: i32) -> Self {
        self.estimated_number_of_users = ::std::option::Option::Some(input);
        self
    }
    /// <p>An estimate of the number of users in the user pool.</p>
    pub fn set_estimated_number_of_users(mut self, input: ::std::option::Option<i32>) -> Self {
        self.estimated_number_of_users = input;
        self
    }
    /// <p>An estimate of the number of users in the user pool.</p>
    pub fn get_estimated_number_of_users(&self) -> &::std::option::Option<i32> {
        &self.estimated_number_of_users
    }

    /// Adds a key-value pair to `user_pool_tags`, failing if `k` is already present.
    ///
    /// To override the contents of this collection use [`set_user_pool_tags`](Self::set_user_pool_tags).
    ///
    /// <p>The tags attached to the user pool.</p>
    pub fn user_pool_tags(
        mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<Self, crate::error::DuplicateKeyError> {
        self.add_user_pool_tags_entry(k, v)?;
        ::std::result::Result::Ok(self)
    }
    /// Adds a key-value pair to `user_pool_tags` in place, failing if `k` is already present.
    pub fn add_user_pool_tags_entry(
        &mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<&mut Self, crate::error::DuplicateKeyError> {
        crate::collections::insert_unique(&mut self.user_pool_tags, "UserPoolTags", k.into(), v.into())?;
        ::std::result::Result::Ok(self)
    }
    /// Removes every entry of `user_pool_tags`, leaving it absent.
    pub fn clear_user_pool_tags_entries(&mut self) -> &mut Self {
        self.user_pool_tags = ::std::option::Option::None;
        self
    }
    /// <p>The tags attached to the user pool.</p>
    pub fn set_user_pool_tags(mut self, input: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>) -> Self {
        self.user_pool_tags = input;
        self
    }
    /// <p>The tags attached to the user pool.</p>
    pub fn get_user_pool_tags(&self) -> &::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        &self.user_pool_tags
    }

    /// <p>The ARN of the user pool.</p>
    pub fn arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ARN of the user pool.</p>
    pub fn set_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.arn = input;
        self
    }
    /// <p>The ARN of the user pool.</p>
    pub fn get_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.arn
    }

    /// <p>The domain prefix of the hosted UI, if one is configured.</p>
    pub fn domain(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.domain = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The domain prefix of the hosted UI, if one is configured.</p>
    pub fn set_domain(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.domain = input;
        self
    }
    /// <p>The domain prefix of the hosted UI, if one is configured.</p>
    pub fn get_domain(&self) -> &::std::option::Option<::std::string::String> {
        &self.domain
    }
    /// Consumes the builder and constructs a [`UserPoolType`](crate::types::UserPoolType).
    pub fn build(self) -> crate::types::UserPoolType {
        crate::types::UserPoolType {
            id: self.id,
            name: self.name,
            lambda_config: self.lambda_config,
            status: self.status,
            last_modified_date: self.last_modified_date,
            creation_date: self.creation_date,
            auto_verified_attributes: self.auto_verified_attributes,
            alias_attributes: self.alias_attributes,
            username_attributes: self.username_attributes,
            mfa_configuration: self.mfa_configuration,
            estimated_number_of_users: self.estimated_number_of_users,
            user_pool_tags: self.user_pool_tags,
            arn: self.arn,
            domain: self.domain,
        }
    }
}
