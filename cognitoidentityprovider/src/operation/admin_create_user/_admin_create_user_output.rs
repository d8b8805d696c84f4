/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>AdminCreateUser</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminCreateUserOutput {
    /// <p>The new user.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: ::std::option::Option<crate::types::UserType>,
}
impl AdminCreateUserOutput {
    /// <p>The new user.</p>
    pub fn user(&self) -> ::std::option::Option<&crate::types::UserType> {
        self.user.as_ref()
    }
}
impl ::std::fmt::Display for AdminCreateUserOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("User", &self.user)
            .finish()
    }
}
impl AdminCreateUserOutput {
    /// Creates a new builder-style object to manufacture [`AdminCreateUserOutput`](crate::operation::admin_create_user::AdminCreateUserOutput).
    pub fn builder() -> crate::operation::admin_create_user::builders::AdminCreateUserOutputBuilder {
        crate::operation::admin_create_user::builders::AdminCreateUserOutputBuilder::default()
    }
}

/// A builder for [`AdminCreateUserOutput`](crate::operation::admin_create_user::AdminCreateUserOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AdminCreateUserOutputBuilder {
    pub(crate) user: ::std::option::Option<crate::types::UserType>,
}
impl AdminCreateUserOutputBuilder {
    /// <p>The new user.</p>
    pub fn user(mut self, input: crate::types::UserType) -> Self {
        self.user = ::std::option::Option::Some(input);
        self
    }
    /// <p>The new user.</p>
    pub fn set_user(mut self, input: ::std::option::Option<crate::types::UserType>) -> Self {
        self.user = input;
        self
    }
    /// <p>The new user.</p>
    pub fn get_user(&self) -> &::std::option::Option<crate::types::UserType> {
        &self.user
    }
    /// Consumes the builder and constructs a [`AdminCreateUserOutput`](crate::operation::admin_create_user::AdminCreateUserOutput).
    pub fn build(self) -> crate::operation::admin_create_user::AdminCreateUserOutput {
        crate::operation::admin_create_user::AdminCreateUserOutput {
            user: self.user,
        }
    }
}
