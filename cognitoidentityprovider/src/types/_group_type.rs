/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>A group in a user pool.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GroupType {
    /// <p>The name of the group.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: ::std::option::Option<::std::string::String>,
    /// <p>The ID of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: ::std::option::Option<::std::string::String>,
    /// <p>A description of the group.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: ::std::option::Option<::std::string::String>,
    /// <p>The ARN of the IAM role associated with the group.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: ::std::option::Option<::std::string::String>,
    /// <p>The precedence of the group relative to other groups the user belongs to. Lower values win.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence: ::std::option::Option<i32>,
    /// <p>The date the group was last modified.</p>
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::serde_util::epoch_seconds")]
    pub last_modified_date: ::std::option::Option<crate::primitives::DateTime>,
    /// <p>The date the group was created.</p>
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::serde_util::epoch_seconds")]
    pub creation_date: ::std::option::Option<crate::primitives::DateTime>,
}
impl GroupType {
    /// <p>The name of the group.</p>
    pub fn group_name(&self) -> ::std::option::Option<&str> {
        self.group_name.as_deref()
    }

    /// <p>The ID of the user pool.</p>
    pub fn user_pool_id(&self) -> ::std::option::Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// <p>A description of the group.</p>
    pub fn description(&self) -> ::std::option::Option<&str> {
        self.description.as_deref()
    }

    /// <p>The ARN of the IAM role associated with the group.</p>
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }

    /// <p>The precedence of the group relative to other groups the user belongs to. Lower values win.</p>
    pub fn precedence(&self) -> ::std::option::Option<i32> {
        self.precedence
    }

    /// <p>The date the group was last modified.</p>
    pub fn last_modified_date(&self) -> ::std::option::Option<&crate::primitives::DateTime> {
        self.last_modified_date.as_ref()
    }

    /// <p>The date the group was created.</p>
    pub fn creation_date(&self) -> ::std::option::Option<&crate::primitives::DateTime> {
        self.creation_date.as_ref()
    }
}
impl ::std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("GroupName", &self.group_name)
            .field("UserPoolId", &self.user_pool_id)
            .field("Description", &self.description)
            .field("RoleArn", &self.role_arn)
            .field("Precedence", &self.precedence)
            .timestamp("LastModifiedDate", &self.last_modified_date)
            .timestamp("CreationDate", &self.creation_date)
            .finish()
    }
}
impl GroupType {
    /// Creates a new builder-style object to manufacture [`GroupType`](crate::types::GroupType).
    pub fn builder() -> crate::types::builders::GroupTypeBuilder {
        crate::types::builders::GroupTypeBuilder::default()
    }
}

/// A builder for [`GroupType`](crate::types::GroupType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GroupTypeBuilder {
    pub(crate) group_name: ::std::option::Option<::std::string::String>,
    pub(crate) user_pool_id: ::std::option::Option<::std::string::String>,
    pub(crate) description: ::std::option::Option<::std::string::String>,
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    pub(crate) precedence: ::std::option::Option<i32>,
    pub(crate) last_modified_date: ::std::option::Option<crate::primitives::DateTime>,
    pub(crate) creation_date: ::std::option::Option<crate::primitives::DateTime>,
}
impl GroupTypeBuilder {
    /// <p>The name of the group.</p>
    pub fn group_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.group_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the group.</p>
    pub fn set_group_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.group_name = input;
        self
    }
    /// <p>The name of the group.</p>
    pub fn get_group_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.group_name
    }

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

    /// <p>A description of the group.</p>
    pub fn description(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.description = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A description of the group.</p>
    pub fn set_description(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.description = input;
        self
    }
    /// <p>A description of the group.</p>
    pub fn get_description(&self) -> &::std::option::Option<::std::string::String> {
        &self.description
    }

    /// <p>The ARN of the IAM role associated with the group.</p>
    pub fn role_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.role_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ARN of the IAM role associated with the group.</p>
    pub fn set_role_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.role_arn = input;
        self
    }
    /// <p>The ARN of the IAM role associated with the group.</p>
    pub fn get_role_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.role_arn
    }

    /// <p>The precedence of the group relative to other groups the user belongs to. Lower values win.</p>
    pub fn precedence(mut self, input: i32) -> Self {
        self.precedence = ::std::option::Option::Some(input);
        self
    }
    /// <p>The precedence of the group relative to other groups the user belongs to. Lower values win.</p>
    pub fn set_precedence(mut self, input: ::std::option::Option<i32>) -> Self {
        self.precedence = input;
        self
    }
    /// <p>The precedence of the group relative to other groups the user belongs to. Lower values win.</p>
    pub fn get_precedence(&self) -> &::std::option::Option<i32> {
        &self.precedence
    }

    /// <p>The date the group was last modified.</p>
    pub fn last_modified_date(mut self, input: crate::primitives::DateTime) -> Self {
        self.last_modified_date = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date the group was last modified.</p>
    pub fn set_last_modified_date(mut self, input: ::std::option::Option<crate::primitives::DateTime>) -> Self {
        self.last_modified_date = input;
        self
    }
    /// <p>The date the group was last modified.</p>
    pub fn get_last_modified_date(&self) -> &::std::option::Option<crate::primitives::DateTime> {
        &self.last_modified_date
    }

    /// <p>The date the group was created.</p>
    pub fn creation_date(mut self, input: crate::primitives::DateTime) -> Self {
        self.creation_date = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date the group was created.</p>
    pub fn set_creation_date(mut self, input: ::std::option::Option<crate::primitives::DateTime>) -> Self {
        self.creation_date = input;
        self
    }
    /// <p>The date the group was created.</p>
    pub fn get_creation_date(&self) -> &::std::option::Option<crate::primitives::DateTime> {
        &self.creation_date
    }
    /// Consumes the builder and constructs a [`GroupType`](crate::types::GroupType).
    pub fn build(self) -> crate::types::GroupType {
        crate::types::GroupType {
            group_name: self.group_name,
            user_pool_id: self.user_pool_id,
            description: self.description,
            role_arn: self.role_arn,
            precedence: self.precedence,
            last_modified_date: self.last_modified_date,
            creation_date: self.creation_date,
        }
    }
}
