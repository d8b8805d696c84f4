/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Starts an authentication flow on behalf of a user, as an administrator.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdminInitiateAuthInput {
    /// <p>The ID of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: ::std::option::Option<::std::string::String>,
    /// <p>The ID of the app client.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: ::std::option::Option<::std::string::String>,
    /// <p>The authentication flow to run.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_flow: ::std::option::Option<crate::types::AuthFlowType>,
    /// <p>The inputs of the authentication flow, such as <code>USERNAME</code> and <code>PASSWORD</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_parameters: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
}
impl AdminInitiateAuthInput {
    /// <p>The ID of the user pool.</p>
    pub fn user_pool_id(&self) -> ::std::option::Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// <p>The ID of the app client.</p>
    pub fn client_id(&self) -> ::std::option::Option<&str> {
        self.client_id.as_deref()
    }

    /// <p>The authentication flow to run.</p>
    pub fn auth_flow(&self) -> ::std::option::Option<&crate::types::AuthFlowType> {
        self.auth_flow.as_ref()
    }

    /// <p>The inputs of the authentication flow, such as <code>USERNAME</code> and <code>PASSWORD</code>.</p>
    pub fn auth_parameters(&self) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        self.auth_parameters.as_ref()
    }

    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn client_metadata(&self) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        self.client_metadata.as_ref()
    }
}
impl ::std::fmt::Debug for AdminInitiateAuthInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminInitiateAuthInput");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("client_id", &"*** Sensitive Data Redacted ***");
        formatter.field("auth_flow", &self.auth_flow);
        formatter.field("auth_parameters", &"*** Sensitive Data Redacted ***");
        formatter.field("client_metadata", &self.client_metadata);
        formatter.finish()
    }
}
impl ::std::fmt::Display for AdminInitiateAuthInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPoolId", &self.user_pool_id)
            .sensitive("ClientId", &self.client_id)
            .field("AuthFlow", &self.auth_flow)
            .sensitive("AuthParameters", &self.auth_parameters)
            .map("ClientMetadata", &self.client_metadata)
            .finish()
    }
}
impl AdminInitiateAuthInput {
    /// Creates a new builder-style object to manufacture [`AdminInitiateAuthInput`](crate::operation::admin_initiate_auth::AdminInitiateAuthInput).
    pub fn builder() -> crate::operation::admin_initiate_auth::builders::AdminInitiateAuthInputBuilder {
        crate::operation::admin_initiate_auth::builders::AdminInitiateAuthInputBuilder::default()
    }
}

/// A builder for [`AdminInitiateAuthInput`](crate::operation::admin_initiate_auth::AdminInitiateAuthInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct AdminInitiateAuthInputBuilder {
    pub(crate) user_pool_id: ::std::option::Option<::std::string::String>,
    pub(crate) client_id: ::std::option::Option<::std::string::String>,
    pub(crate) auth_flow: ::std::option::Option<crate::types::AuthFlowType>,
    pub(crate) auth_parameters: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
    pub(crate) client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
}
impl AdminInitiateAuthInputBuilder {
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

    /// <p>The ID of the app client.</p>
    pub fn client_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.client_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID of the app client.</p>
    pub fn set_client_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.client_id = input;
        self
    }
    /// <p>The ID of the app client.</p>
    pub fn get_client_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.client_id
    }

    /// <p>The authentication flow to run.</p>
    pub fn auth_flow(mut self, input: impl ::std::convert::Into<crate::types::AuthFlowType>) -> Self {
        self.auth_flow = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The authentication flow to run.</p>
    pub fn set_auth_flow(mut self, input: ::std::option::Option<crate::types::AuthFlowType>) -> Self {
        self.auth_flow = input;
        self
    }
    /// <p>The authentication flow to run.</p>
    pub fn get_auth_flow(&self) -> &::std::option::Option<crate::types::AuthFlowType> {
        &self.auth_flow
    }

    /// Adds a key-value pair to `auth_parameters`, failing if `k` is already present.
    ///
    /// To override the contents of this collection use [`set_auth_parameters`](Self::set_auth_parameters).
    ///
    /// <p>The inputs of the authentication flow, such as <code>USERNAME</code> and <code>PASSWORD</code>.</p>
    pub fn auth_parameters(
        mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<Self, crate::error::DuplicateKeyError> {
        self.add_auth_parameters_entry(k, v)?;
        ::std::result::Result::Ok(self)
    }
    /// Adds a key-value pair to `auth_parameters` in place, failing if `k` is already present.
    pub fn add_auth_parameters_entry(
        &mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<&mut Self, crate::error::DuplicateKeyError> {
        crate::collections::insert_unique(&mut self.auth_parameters, "AuthParameters", k.into(), v.into())?;
        ::std::result::Result::Ok(self)
    }
    /// Removes every entry of `auth_parameters`, leaving it absent.
    pub fn clear_auth_parameters_entries(&mut self) -> &mut Self {
        self.auth_parameters = ::std::option::Option::None;
        self
    }
    /// <p>The inputs of the authentication flow, such as <code>USERNAME</code> and <code>PASSWORD</code>.</p>
    pub fn set_auth_parameters(mut self, input: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>) -> Self {
        self.auth_parameters = input;
        self
    }
    /// <p>The inputs of the authentication flow, such as <code>USERNAME</code> and <code>PASSWORD</code>.</p>
    pub fn get_auth_parameters(&self) -> &::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        &self.auth_parameters
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
    /// Consumes the builder and constructs a [`AdminInitiateAuthInput`](crate::operation::admin_initiate_auth::AdminInitiateAuthInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::admin_initiate_auth::AdminInitiateAuthInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::admin_initiate_auth::AdminInitiateAuthInput {
            user_pool_id: self.user_pool_id,
            client_id: self.client_id,
            auth_flow: self.auth_flow,
            auth_parameters: self.auth_parameters,
            client_metadata: self.client_metadata,
        })
    }
}
impl ::std::fmt::Debug for AdminInitiateAuthInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("AdminInitiateAuthInputBuilder");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("client_id", &"*** Sensitive Data Redacted ***");
        formatter.field("auth_flow", &self.auth_flow);
        formatter.field("auth_parameters", &"*** Sensitive Data Redacted ***");
        formatter.field("client_metadata", &self.client_metadata);
        formatter.finish()
    }
}
