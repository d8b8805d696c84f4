/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>AdminListGroupsForUser</code> request.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminListGroupsForUserOutput {
    /// <p>The groups the user belongs to.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: ::std::option::Option<::std::vec::Vec<crate::types::GroupType>>,
    /// <p>An identifier that was returned from the previous call, used to return the next page of items.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: ::std::option::Option<::std::string::String>,
}
impl AdminListGroupsForUserOutput {
    /// <p>The groups the user belongs to.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.groups.is_none()`.
    pub fn groups(&self) -> &[crate::types::GroupType] {
        self.groups.as_deref().unwrap_or_default()
    }

    /// <p>An identifier that was returned from the previous call, used to return the next page of items.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl ::std::fmt::Display for AdminListGroupsForUserOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .list("Groups", &self.groups)
            .field("NextToken", &self.next_token)
            .finish()
    }
}
impl AdminListGroupsForUserOutput {
    /// Creates a new builder-style object to manufacture [`AdminListGroupsForUserOutput`](crate::operation::admin_list_groups_for_user::AdminListGroupsForUserOutput).
    pub fn builder() -> crate::operation::admin_list_groups_for_user::builders::AdminListGroupsForUserOutputBuilder {
        crate::operation::admin_list_groups_for_user::builders::AdminListGroupsForUserOutputBuilder::default()
    }
}

/// A builder for [`AdminListGroupsForUserOutput`](crate::operation::admin_list_groups_for_user::AdminListGroupsForUserOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AdminListGroupsForUserOutputBuilder {
    pub(crate) groups: ::std::option::Option<::std::vec::Vec<crate::types::GroupType>>,
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
}
impl AdminListGroupsForUserOutputBuilder {
    /// Appends an item to `groups`.
    ///
    /// To override the contents of this collection use [`set_groups`](Self::set_groups).
    ///
    /// <p>The groups the user belongs to.</p>
    pub fn groups(mut self, input: crate::types::GroupType) -> Self {
        let mut v = self.groups.unwrap_or_default();
        v.push(input);
        self.groups = ::std::option::Option::Some(v);
        self
    }
    /// <p>The groups the user belongs to.</p>
    pub fn set_groups(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::GroupType>>) -> Self {
        self.groups = input;
        self
    }
    /// <p>The groups the user belongs to.</p>
    pub fn get_groups(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::GroupType>> {
        &self.groups
    }

    /// <p>An identifier that was returned from the previous call, used to return the next page of items.</p>
    pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.next_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>An identifier that was returned from the previous call, used to return the next page of items.</p>
    pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.next_token = input;
        self
    }
    /// <p>An identifier that was returned from the previous call, used to return the next page of items.</p>
    pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.next_token
    }
    /// Consumes the builder and constructs a [`AdminListGroupsForUserOutput`](crate::operation::admin_list_groups_for_user::AdminListGroupsForUserOutput).
    pub fn build(self) -> crate::operation::admin_list_groups_for_user::AdminListGroupsForUserOutput {
        crate::operation::admin_list_groups_for_user::AdminListGroupsForUserOutput {
            groups: self.groups,
            next_token: self.next_token,
        }
    }
}
