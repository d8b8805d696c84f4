/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>ListUserPoolClients</code> request.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListUserPoolClientsOutput {
    /// <p>The app clients of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_clients: ::std::option::Option<::std::vec::Vec<crate::types::UserPoolClientDescription>>,
    /// <p>An identifier that was returned from the previous call, used to return the next page of items.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: ::std::option::Option<::std::string::String>,
}
impl ListUserPoolClientsOutput {
    /// <p>The app clients of the user pool.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.user_pool_clients.is_none()`.
    pub fn user_pool_clients(&self) -> &[crate::types::UserPoolClientDescription] {
        self.user_pool_clients.as_deref().unwrap_or_default()
    }

    /// <p>An identifier that was returned from the previous call, used to return the next page of items.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl ::std::fmt::Display for ListUserPoolClientsOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .list("UserPoolClients", &self.user_pool_clients)
            .field("NextToken", &self.next_token)
            .finish()
    }
}
impl ListUserPoolClientsOutput {
    /// Creates a new builder-style object to manufacture [`ListUserPoolClientsOutput`](crate::operation::list_user_pool_clients::ListUserPoolClientsOutput).
    pub fn builder() -> crate::operation::list_user_pool_clients::builders::ListUserPoolClientsOutputBuilder {
        crate::operation::list_user_pool_clients::builders::ListUserPoolClientsOutputBuilder::default()
    }
}

/// A builder for [`ListUserPoolClientsOutput`](crate::operation::list_user_pool_clients::ListUserPoolClientsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListUserPoolClientsOutputBuilder {
    pub(crate) user_pool_clients: ::std::option::Option<::std::vec::Vec<crate::types::UserPoolClientDescription>>,
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
}
impl ListUserPoolClientsOutputBuilder {
    /// Appends an item to `user_pool_clients`.
    ///
    /// To override the contents of this collection use [`set_user_pool_clients`](Self::set_user_pool_clients).
    ///
    /// <p>The app clients of the user pool.</p>
    pub fn user_pool_clients(mut self, input: crate::types::UserPoolClientDescription) -> Self {
        let mut v = self.user_pool_clients.unwrap_or_default();
        v.push(input);
        self.user_pool_clients = ::std::option::Option::Some(v);
        self
    }
    /// <p>The app clients of the user pool.</p>
    pub fn set_user_pool_clients(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::UserPoolClientDescription>>) -> Self {
        self.user_pool_clients = input;
        self
    }
    /// <p>The app clients of the user pool.</p>
    pub fn get_user_pool_clients(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::UserPoolClientDescription>> {
        &self.user_pool_clients
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
    /// Consumes the builder and constructs a [`ListUserPoolClientsOutput`](crate::operation::list_user_pool_clients::ListUserPoolClientsOutput).
    pub fn build(self) -> crate::operation::list_user_pool_clients::ListUserPoolClientsOutput {
        crate::operation::list_user_pool_clients::ListUserPoolClientsOutput {
            user_pool_clients: self.user_pool_clients,
            next_token: self.next_token,
        }
    }
}
