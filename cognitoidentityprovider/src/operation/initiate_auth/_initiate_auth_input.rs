/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>Starts an authentication flow for a user.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InitiateAuthInput {
    /// <p>The authentication flow to run.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_flow: ::std::option::Option<crate::types::AuthFlowType>,
    /// <p>The inputs of the authentication flow, such as <code>USERNAME</code> and <code>SRP_A</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_parameters: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
    /// <p>The ID of the app client.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: ::std::option::Option<::std::string::String>,
}
impl InitiateAuthInput {
    /// <p>The authentication flow to run.</p>
    pub fn auth_flow(&self) -> ::std::option::Option<&crate::types::AuthFlowType> {
        self.auth_flow.as_ref()
    }

    /// <p>The inputs of the authentication flow, such as <code>USERNAME</code> and <code>SRP_A</code>.</p>
    pub fn auth_parameters(&self) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        self.auth_parameters.as_ref()
    }

    /// <p>Custom key-value pairs passed untouched to the Lambda triggers of the user pool.</p>
    pub fn client_metadata(&self) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        self.client_metadata.as_ref()
    }

    /// <p>The ID of the app client.</p>
    pub fn client_id(&self) -> ::std::option::Option<&str> {
        self.client_id.as_deref()
    }
}
impl ::std::fmt::Debug for InitiateAuthInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("InitiateAuthInput");
        formatter.field("auth_flow", &self.auth_flow);
        formatter.field("auth_parameters", &"*** Sensitive Data Redacted ***");
        formatter.field("client_metadata", &self.client_metadata);
        formatter.field("client_id", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
impl ::std::fmt::Display for InitiateAuthInput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("AuthFlow", &self.auth_flow)
            .sensitive("AuthParameters", &self.auth_parameters)
            .map("ClientMetadata", &self.client_metadata)
            .sensitive("ClientId", &self.client_id)
            .finish()
    }
}
impl InitiateAuthInput {
    /// Creates a new builder-style object to manufacture [`InitiateAuthInput`](crate::operation::initiate_auth::InitiateAuthInput).
    pub fn builder() -> crate::operation::initiate_auth::builders::InitiateAuthInputBuilder {
        crate::operation::initiate_auth::builders::InitiateAuthInputBuilder::default()
    }
}

/// A builder for [`InitiateAuthInput`](crate::operation::initiate_auth::InitiateAuthInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct InitiateAuthInputBuilder {
    pub(crate) auth_flow: ::std::option::Option<crate::types::AuthFlowType>,
    pub(crate) auth_parameters: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
    pub(crate) client_metadata: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
    pub(crate) client_id: ::std::option::Option<::std::string::String>,
}
impl InitiateAuthInputBuilder {
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
    /// <p>The inputs of the authentication flow, such as <code>USERNAME</code> and <code>SRP_A</code>.</p>
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
    /// <p>The inputs of the authentication flow, such as <code>USERNAME</code> and <code>SRP_A</code>.</p>
    pub fn set_auth_parameters(mut self, input: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>) -> Self {
        self.auth_parameters = input;
        self
    }
    /// <p>The inputs of the authentication flow, such as <code>USERNAME</code> and <code>SRP_A</code>.</p>
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
    /// Consumes the builder and constructs a [`InitiateAuthInput`](crate::operation::initiate_auth::InitiateAuthInput).
    pub fn build(self) -> ::std::result::Result<crate::operation::initiate_auth::InitiateAuthInput, crate::error::BuildError> {
        ::std::result::Result::Ok(crate::operation::initiate_auth::InitiateAuthInput {
            auth_flow: self.auth_flow,
            auth_parameters: self.auth_parameters,
            client_metadata: self.client_metadata,
            client_id: self.client_id,
        })
    }
}
impl ::std::fmt::Debug for InitiateAuthInputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("InitiateAuthInputBuilder");
        formatter.field("auth_flow", &self.auth_flow);
        formatter.field("auth_parameters", &"*** Sensitive Data Redacted ***");
        formatter.field("client_metadata", &self.client_metadata);
        formatter.field("client_id", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
