/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>GetUser</code> request.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetUserOutput {
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: ::std::option::Option<::std::string::String>,
    /// <p>The attributes of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attributes: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>,
    /// <p>Legacy SMS multi-factor authentication settings of the user.</p>
    #[serde(rename = "MFAOptions", skip_serializing_if = "Option::is_none")]
    pub mfa_options: ::std::option::Option<::std::vec::Vec<crate::types::MfaOptionType>>,
    /// <p>The preferred multi-factor authentication method of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_mfa_setting: ::std::option::Option<::std::string::String>,
    /// <p>The multi-factor authentication methods the user has enabled.</p>
    #[serde(rename = "UserMFASettingList", skip_serializing_if = "Option::is_none")]
    pub user_mfa_setting_list: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl GetUserOutput {
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn username(&self) -> ::std::option::Option<&str> {
        self.username.as_deref()
    }

    /// <p>The attributes of the user.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.user_attributes.is_none()`.
    pub fn user_attributes(&self) -> &[crate::types::AttributeType] {
        self.user_attributes.as_deref().unwrap_or_default()
    }

    /// <p>Legacy SMS multi-factor authentication settings of the user.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.mfa_options.is_none()`.
    pub fn mfa_options(&self) -> &[crate::types::MfaOptionType] {
        self.mfa_options.as_deref().unwrap_or_default()
    }

    /// <p>The preferred multi-factor authentication method of the user.</p>
    pub fn preferred_mfa_setting(&self) -> ::std::option::Option<&str> {
        self.preferred_mfa_setting.as_deref()
    }

    /// <p>The multi-factor authentication methods the user has enabled.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.user_mfa_setting_list.is_none()`.
    pub fn user_mfa_setting_list(&self) -> &[::std::string::String] {
        self.user_mfa_setting_list.as_deref().unwrap_or_default()
    }
}
impl ::std::fmt::Debug for GetUserOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("GetUserOutput");
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("user_attributes", &self.user_attributes);
        formatter.field("mfa_options", &self.mfa_options);
        formatter.field("preferred_mfa_setting", &self.preferred_mfa_setting);
        formatter.field("user_mfa_setting_list", &self.user_mfa_setting_list);
        formatter.finish()
    }
}
impl ::std::fmt::Display for GetUserOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .sensitive("Username", &self.username)
            .list("UserAttributes", &self.user_attributes)
            .list("MFAOptions", &self.mfa_options)
            .field("PreferredMfaSetting", &self.preferred_mfa_setting)
            .list("UserMFASettingList", &self.user_mfa_setting_list)
            .finish()
    }
}
impl GetUserOutput {
    /// Creates a new builder-style object to manufacture [`GetUserOutput`](crate::operation::get_user::GetUserOutput).
    pub fn builder() -> crate::operation::get_user::builders::GetUserOutputBuilder {
        crate::operation::get_user::builders::GetUserOutputBuilder::default()
    }
}

/// A builder for [`GetUserOutput`](crate::operation::get_user::GetUserOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct GetUserOutputBuilder {
    pub(crate) username: ::std::option::Option<::std::string::String>,
    pub(crate) user_attributes: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>,
    pub(crate) mfa_options: ::std::option::Option<::std::vec::Vec<crate::types::MfaOptionType>>,
    pub(crate) preferred_mfa_setting: ::std::option::Option<::std::string::String>,
    pub(crate) user_mfa_setting_list: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl GetUserOutputBuilder {
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
    /// <p>The attributes of the user.</p>
    pub fn user_attributes(mut self, input: crate::types::AttributeType) -> Self {
        let mut v = self.user_attributes.unwrap_or_default();
        v.push(input);
        self.user_attributes = ::std::option::Option::Some(v);
        self
    }
    /// <p>The attributes of the user.</p>
    pub fn set_user_attributes(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::AttributeType>>) -> Self {
        self.user_attributes = input;
        self
    }
    /// <p>The attributes of the user.</p>
    pub fn get_user_attributes(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::AttributeType>> {
        &self.user_attributes
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

    /// <p>The preferred multi-factor authentication method of the user.</p>
    pub fn preferred_mfa_setting(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.preferred_mfa_setting = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The preferred multi-factor authentication method of the user.</p>
    pub fn set_preferred_mfa_setting(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.preferred_mfa_setting = input;
        self
    }
    /// <p>The preferred multi-factor authentication method of the user.</p>
    pub fn get_preferred_mfa_setting(&self) -> &::std::option::Option<::std::string::String> {
        &self.preferred_mfa_setting
    }

    /// Appends an item to `user_mfa_setting_list`.
    ///
    /// To override the contents of this collection use [`set_user_mfa_setting_list`](Self::set_user_mfa_setting_list).
    ///
    /// <p>The multi-factor authentication methods the user has enabled.</p>
    pub fn user_mfa_setting_list(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.user_mfa_setting_list.unwrap_or_default();
        v.push(input.into());
        self.user_mfa_setting_list = ::std::option::Option::Some(v);
        self
    }
    /// <p>The multi-factor authentication methods the user has enabled.</p>
    pub fn set_user_mfa_setting_list(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.user_mfa_setting_list = input;
        self
    }
    /// <p>The multi-factor authentication methods the user has enabled.</p>
    pub fn get_user_mfa_setting_list(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.user_mfa_setting_list
    }
    /// Consumes the builder and constructs a [`GetUserOutput`](crate::operation::get_user::GetUserOutput).
    pub fn build(self) -> crate::operation::get_user::GetUserOutput {
        crate::operation::get_user::GetUserOutput {
            username: self.username,
            user_attributes: self.user_attributes,
            mfa_options: self.mfa_options,
            preferred_mfa_setting: self.preferred_mfa_setting,
            user_mfa_setting_list: self.user_mfa_setting_list,
        }
    }
}
impl ::std::fmt::Debug for GetUserOutputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("GetUserOutputBuilder");
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("user_attributes", &self.user_attributes);
        formatter.field("mfa_options", &self.mfa_options);
        formatter.field("preferred_mfa_setting", &self.preferred_mfa_setting);
        formatter.field("user_mfa_setting_list", &self.user_mfa_setting_list);
        formatter.finish()
    }
}
