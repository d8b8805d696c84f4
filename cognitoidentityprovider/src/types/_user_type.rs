/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>A user profile in a user pool.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserType {
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: ::std::option::Option<::std::string::String>,
    /// <p>The attributes of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>,
    /// <p>The date the user was created.</p>
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::serde_util::epoch_seconds")]
    pub user_create_date: ::std::option::Option<crate::primitives::DateTime>,
    /// <p>The date the user was last modified.</p>
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::serde_util::epoch_seconds")]
    pub user_last_modified_date: ::std::option::Option<crate::primitives::DateTime>,
    /// <p>Whether the user is enabled.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: ::std::option::Option<bool>,
    /// <p>The confirmation and password state of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: ::std::option::Option<crate::types::UserStatusType>,
    /// <p>Legacy SMS multi-factor authentication settings of the user.</p>
    #[serde(rename = "MFAOptions", skip_serializing_if = "Option::is_none")]
    pub mfa_options: ::std::option::Option<::std::vec::Vec<crate::types::MfaOptionType>>,
}
impl UserType {
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn username(&self) -> ::std::option::Option<&str> {
        self.username.as_deref()
    }

    /// <p>The attributes of the user.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.attributes.is_none()`.
    pub fn attributes(&self) -> &[crate::types::AttributeType] {
        self.attributes.as_deref().unwrap_or_default()
    }

    /// <p>The date the user was created.</p>
    pub fn user_create_date(&self) -> ::std::option::Option<&crate::primitives::DateTime> {
        self.user_create_date.as_ref()
    }

    /// <p>The date the user was last modified.</p>
    pub fn user_last_modified_date(&self) -> ::std::option::Option<&crate::primitives::DateTime> {
        self.user_last_modified_date.as_ref()
    }

    /// <p>Whether the user is enabled.</p>
    pub fn enabled(&self) -> ::std::option::Option<bool> {
        self.enabled
    }

    /// <p>The confirmation and password state of the user.</p>
    pub fn user_status(&self) -> ::std::option::Option<&crate::types::UserStatusType> {
        self.user_status.as_ref()
    }

    /// <p>Legacy SMS multi-factor authentication settings of the user.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.mfa_options.is_none()`.
    pub fn mfa_options(&self) -> &[crate::types::MfaOptionType] {
        self.mfa_options.as_deref().unwrap_or_default()
    }
}
impl ::std::fmt::Debug for UserType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("UserType");
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("attributes", &self.attributes);
        formatter.field("user_create_date", &self.user_create_date);
        formatter.field("user_last_modified_date", &self.user_last_modified_date);
        formatter.field("enabled", &self.enabled);
        formatter.field("user_status", &self.user_status);
        formatter.field("mfa_options", &self.mfa_options);
        formatter.finish()
    }
}
impl ::std::fmt::Display for UserType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .sensitive("Username", &self.username)
            .list("Attributes", &self.attributes)
            .timestamp("UserCreateDate", &self.user_create_date)
            .timestamp("UserLastModifiedDate", &self.user_last_modified_date)
            .field("Enabled", &self.enabled)
            .field("UserStatus", &self.user_status)
            .list("MFAOptions", &self.mfa_options)
            .finish()
    }
}
impl UserType {
    /// Creates a new builder-style object to manufacture [`UserType`](crate::types::UserType).
    pub fn builder() -> crate::types::builders::UserTypeBuilder {
        crate::types::builders::UserTypeBuilder::default()
    }
}

/// A builder for [`UserType`](crate::types::UserType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct UserTypeBuilder {
    pub(crate) username: ::std::option::Option<::std::string::String>,
    pub(crate) attributes: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>,
    pub(crate) user_create_date: ::std::option::Option<crate::primitives::DateTime>,
    pub(crate) user_last_modified_date: ::std::option::Option<crate::primitives::DateTime>,
    pub(crate) enabled: ::std::option::Option<bool>,
    pub(crate) user_status: ::std::option::Option<crate::types::UserStatusType>,
    pub(crate) mfa_options: ::std::option::Option<::std::vec::Vec<crate::types::MfaOptionType>>,
}
impl UserTypeBuilder {
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

    /// Appends an item to `attributes`.
    ///
    /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
    ///
    /// <p>The attributes of the user.</p>
    pub fn attributes(mut self, input: crate::types::AttributeType) -> Self {
        let mut v = self.attributes.unwrap_or_default();
        v.push(input);
        self.attributes = ::std::option::Option::Some(v);
        self
    }
    /// <p>The attributes of the user.</p>
    pub fn set_attributes(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>) -> Self {
        self.attributes = input;
        self
    }
    /// <p>The attributes of the user.</p>
    pub fn get_attributes(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::AttributeType>> {
        &self.attributes
    }

    /// <p>The date the user was created.</p>
    pub fn user_create_date(mut self, input: crate::primitives::DateTime) -> Self {
        self.user_create_date = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date the user was created.</p>
    pub fn set_user_create_date(mut self, input: ::std::option::Option<crate::primitives::DateTime>) -> Self {
        self.user_create_date = input;
        self
    }
    /// <p>The date the user was created.</p>
    pub fn get_user_create_date(&self) -> &::std::option::Option<crate::primitives::DateTime> {
        &self.user_create_date
    }

    /// <p>The date the user was last modified.</p>
    pub fn user_last_modified_date(mut self, input: crate::primitives::DateTime) -> Self {
        self.user_last_modified_date = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date the user was last modified.</p>
    pub fn set_user_last_modified_date(mut self, input: ::std::option::Option<crate::primitives::DateTime>) -> Self {
        self.user_last_modified_date = input;
        self
    }
    /// <p>The date the user was last modified.</p>
    pub fn get_user_last_modified_date(&self) -> &::std::option::Option<crate::primitives::DateTime> {
        &self.user_last_modified_date
    }

    /// <p>Whether the user is enabled.</p>
    pub fn enabled(mut self, input: bool) -> Self {
        self.enabled = ::std::option::Option::Some(input);
        self
    }
    /// <p>Whether the user is enabled.</p>
    pub fn set_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
        self.enabled = input;
        self
    }
    /// <p>Whether the user is enabled.</p>
    pub fn get_enabled(&self) -> &::std::option::Option<bool> {
        &self.enabled
    }

    /// <p>The confirmation and password state of the user.</p>
    pub fn user_status(mut self, input: impl ::std::convert::Into<crate::types::UserStatusType>) -> Self {
        self.user_status = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The confirmation and password state of the user.</p>
    pub fn set_user_status(mut self, input: ::std::option::Option<crate::types::UserStatusType>) -> Self {
        self.user_status = input;
        self
    }
    /// <p>The confirmation and password state of the user.</p>
    pub fn get_user_status(&self) -> &::std::option::Option<crate::types::UserStatusType> {
        &self.user_status
    }

    /// Appends an item to `mfa_options`.
    ///
    /// To override the contents of this collection use [`set_mfa_options`](Self::set_mfa_options).
    ///
    /// <p>Legacy SMS multi-factor authentication settings of the user.</p>
    pub fn mfa_options(mut self, input: crate::types::MfaOptionType) -> Self {
        let mut v = self.mfa_options.unwrap_or_default();
        v.push(input);
        self.mfa_options = ::std::option::Option::Some(v);
        self
    }
    /// <p>Legacy SMS multi-factor authentication settings of the user.</p>
    pub fn set_mfa_options(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::MfaOptionType>>) -> Self {
        self.mfa_options = input;
        self
    }
    /// <p>Legacy SMS multi-factor authentication settings of the user.</p>
    pub fn get_mfa_options(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::MfaOptionType>> {
        &self.mfa_options
    }
    /// Consumes the builder and constructs a [`UserType`](crate::types::UserType).
    pub fn build(self) -> crate::types::UserType {
        crate::types::UserType {
            username: self.username,
            attributes: self.attributes,
            user_create_date: self.user_create_date,
            user_last_modified_date: self.user_last_modified_date,
            enabled: self.enabled,
            user_status: self.user_status,
            mfa_options: self.mfa_options,
        }
    }
}
impl ::std::fmt::Debug for UserTypeBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("UserTypeBuilder");
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("attributes", &self.attributes);
        formatter.field("user_create_date", &self.user_create_date);
        formatter.field("user_last_modified_date", &self.user_last_modified_date);
        formatter.field("enabled", &self.enabled);
        formatter.field("user_status", &self.user_status);
        formatter.field("mfa_options", &self.mfa_options);
        formatter.finish()
    }
}
