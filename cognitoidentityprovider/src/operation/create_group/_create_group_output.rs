/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>CreateGroup</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateGroupOutput {
    /// <p>The new group.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: ::std::option::Option<crate::types::GroupType>,
}
impl CreateGroupOutput {
    /// <p>The new group.</p>
    pub fn group(&self) -> ::std::option::Option<&crate::types::GroupType> {
        self.group.as_ref()
    }
}
impl ::std::fmt::Display for CreateGroupOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("Group", &self.group)
            .finish()
    }
}
impl CreateGroupOutput {
    /// Creates a new builder-style object to manufacture [`CreateGroupOutput`](crate::operation::create_group::CreateGroupOutput).
    pub fn builder() -> crate::operation::create_group::builders::CreateGroupOutputBuilder {
        crate::operation::create_group::builders::CreateGroupOutputBuilder::default()
    }
}

/// A builder for [`CreateGroupOutput`](crate::operation::create_group::CreateGroupOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateGroupOutputBuilder {
    pub(crate) group: ::std::option::Option<crate::types::GroupType>,
}
impl CreateGroupOutputBuilder {
    /// <p>The new group.</p>
    pub fn group(mut self, input: crate::types::GroupType) -> Self {
        self.group = ::std::option::Option::Some(input);
        self
    }
    /// <p>The new group.</p>
    pub fn set_group(mut self, input: ::std::option::Option<crate::types::GroupType>) -> Self {
        self.group = input;
        self
    }
    /// <p>The new group.</p>
    pub fn get_group(&self) -> &::std::option::Option<crate::types::GroupType> {
        &self.group
    }
    /// Consumes the builder and constructs a [`CreateGroupOutput`](crate::operation::create_group::CreateGroupOutput).
    pub fn build(self) -> crate::operation::create_group::CreateGroupOutput {
        crate::operation::create_group::CreateGroupOutput {
            group: self.group,
        }
    }
}
