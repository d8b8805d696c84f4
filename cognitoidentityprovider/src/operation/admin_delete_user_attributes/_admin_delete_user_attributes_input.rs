/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Deletes attributes of a user as an administrator.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminDeleteUserAttributesInput {
    /// <p>The ID of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: ::std::option::Option<::std::string::String>,
    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: ::std::option::Option<::std::string::String>,
    /// <p>The names of the attributes to delete.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attribute_names: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl AdminDeleteUserAttributesInput {
    /// <p>The ID of the user pool.</p>
    pub fn user_pool_id(&self) -> ::std::option::Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// <p>The username of the user. This can be the username, an alias, or the <code>sub</code> of the user.</p>
    pub fn username(&self) -> ::std::option::Option<&str> {
        self.username.as_deref()
    }

    /// <p>The names of the attributes to delete.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.user_attribute_names.is_none()`.
    pub fn user_attribute_names(&self) -> &[::std::string::String] {
        self.user_attribute_names.as_deref().unwrap_or_default()
    }
}
impl ::std::fmt::Debug for AdminDeleteUserAttributesInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminDeleteUserAttributesInput");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("user_attribute_names", &self.user_attribute_names);
        formatter.finish()
    }
}
impl ::std::fmt::Display for AdminDeleteUserAttributesInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPoolId", &self.user_pool_id)
            .sensitive("Username", &self.username)
            .list("UserAttributeNames", &self.user_attribute_names)
            .finish()
    }
}
impl AdminDeleteUserAttributesInput {
    /// Creates a new builder-style object to manufacture [`AdminDeleteUserAttributesInput`](crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesInput).
    pub fn builder() -> crate::operation::admin_delete_user_attributes::builders::AdminDeleteUserAttributesInputBuilder {
        crate::operation::admin_delete_user_attributes::builders::AdminDeleteUserAttributesInputBuilder::default()
    }
}

/// A builder for [`AdminDeleteUserAttributesInput`](crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct AdminDeleteUserAttributesInputBuilder {
    pub(crate) user_pool_id: ::std::option::Option<::std::string::String>,
    pub(crate) username: ::std::option::Option<::std::string::String>,
    pub(crate) user_attribute_names: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl AdminDeleteUserAttributesInputBuilder {
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

    /// Appends an item to `user_attribute_names`.
    ///
    /// To override the contents of this collection use [`set_user_attribute_names`](Self::set_user_attribute_names).
    ///
    /// <p>The names of the attributes to delete.</p>
    pub fn user_attribute_names(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.user_attribute_names.unwrap_or_default();
        v.push(input.into());
        self.user_attribute_names = ::std::option::Option::Some(v);
        self
    }
    /// <p>The names of the attributes to delete.</p>
    pub fn set_user_attribute_names(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.user_attribute_names = input;
        self
    }
    /// <p>The names of the attributes to delete.</p>
    pub fn get_user_attribute_names(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.user_attribute_names
    }
    /// Consumes the builder and constructs a [`AdminDeleteUserAttributesInput`](crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::admin_delete_user_attributes::AdminDeleteUserAttributesInput {
            user_pool_id: self.user_pool_id,
            username: self.username,
            user_attribute_names: self.user_attribute_names,
        })
    }
}
impl ::std::fmt::Debug for AdminDeleteUserAttributesInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminDeleteUserAttributesInputBuilder");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("username", &"*** Sensitive Data Redacted ***");
        formatter.field("user_attribute_names", &self.user_attribute_names);
        formatter.finish()
    }
}
