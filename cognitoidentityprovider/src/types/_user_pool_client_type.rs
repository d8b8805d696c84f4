/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The configuration of an app client.</p>
///
/// List members read through their accessor come back as an empty slice when absent.
/// Inspect the field itself to tell an absent list from an empty one.
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserPoolClientType {
    /// <p>The ID of the user pool the client belongs to.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: ::std::option::Option<::std::string::String>,
    /// <p>The name of the app client.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: ::std::option::Option<::std::string::String>,
    /// <p>The ID of the app client.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: ::std::option::Option<::std::string::String>,
    /// <p>The app client secret.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: ::std::option::Option<::std::string::String>,
    /// <p>The date the app client was last modified.</p>
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::serde_util::epoch_seconds")]
    pub last_modified_date: ::std::option::Option<crate::primitives::DateTime>,
    /// <p>The date the app client was created.</p>
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::serde_util::epoch_seconds")]
    pub creation_date: ::std::option::Option<crate::primitives::DateTime>,
    /// <p>How long refresh tokens stay valid, in <code>TokenValidityUnits.RefreshToken</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_validity: ::std::option::Option<i32>,
    /// <p>How long access tokens stay valid, in <code>TokenValidityUnits.AccessToken</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_validity: ::std::option::Option<i32>,
    /// <p>How long ID tokens stay valid, in <code>TokenValidityUnits.IdToken</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token_validity: ::std::option::Option<i32>,
    /// <p>The units of the token validity periods.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_validity_units: ::std::option::Option<crate::types::TokenValidityUnitsType>,
    /// <p>The attributes the app client can read.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_attributes: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>The attributes the app client can write.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_attributes: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>The authentication flows the app client allows.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_auth_flows: ::std::option::Option<::std::vec::Vec<crate::types::ExplicitAuthFlowsType>>,
    /// <p>The identity providers the app client supports.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_identity_providers: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>The allowed redirect URLs after sign-in.</p>
    #[serde(rename = "CallbackURLs", skip_serializing_if = "Option::is_none")]
    pub callback_urls: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>The allowed redirect URLs after sign-out.</p>
    #[serde(rename = "LogoutURLs", skip_serializing_if = "Option::is_none")]
    pub logout_urls: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>The default redirect URI. Must be in <code>CallbackURLs</code>.</p>
    #[serde(rename = "DefaultRedirectURI", skip_serializing_if = "Option::is_none")]
    pub default_redirect_uri: ::std::option::Option<::std::string::String>,
    /// <p>The OAuth 2.0 grants the app client allows.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_o_auth_flows: ::std::option::Option<::std::vec::Vec<crate::types::OAuthFlowType>>,
    /// <p>The OAuth 2.0 scopes the app client can request.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_o_auth_scopes: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>Whether the app client may use the OAuth 2.0 features of the user pool.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_o_auth_flows_user_pool_client: ::std::option::Option<bool>,
    /// <p>The Amazon Pinpoint analytics configuration.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_configuration: ::std::option::Option<crate::types::AnalyticsConfigurationType>,
    /// <p>Whether authentication errors reveal if a user exists.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_user_existence_errors: ::std::option::Option<crate::types::PreventUserExistenceErrorTypes>,
    /// <p>Whether refresh tokens issued to the app client can be revoked.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_token_revocation: ::std::option::Option<bool>,
}
impl UserPoolClientType {
    /// <p>The ID of the user pool the client belongs to.</p>
    pub fn user_pool_id(&self) -> ::std::option::Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// <p>The name of the app client.</p>
    pub fn client_name(&self) -> ::std::option::Option<&str> {
        self.client_name.as_deref()
    }

    /// <p>The ID of the app client.</p>
    pub fn client_id(&self) -> ::std::option::Option<&str> {
        self.client_id.as_deref()
    }

    /// <p>The app client secret.</p>
    pub fn client_secret(&self) -> ::std::option::Option<&str> {
        self.client_secret.as_deref()
    }

    /// <p>The date the app client was last modified.</p>
    pub fn last_modified_date(&self) -> ::std::option::Option<&crate::primitives::DateTime> {
        self.last_modified_date.as_ref()
    }

    /// <p>The date the app client was created.</p>
    pub fn creation_date(&self) -> ::std::option::Option<&crate::primitives::DateTime> {
        self.creation_date.as_ref()
    }

    /// <p>How long refresh tokens stay valid, in <code>TokenValidityUnits.RefreshToken</code>.</p>
    pub fn refresh_token_validity(&self) -> ::std::option::Option<i32> {
        self.refresh_token_validity
    }

    /// <p>How long access tokens stay valid, in <code>TokenValidityUnits.AccessToken</code>.</p>
    pub fn access_token_validity(&self) -> ::std::option::Option<i32> {
        self.access_token_validity
    }

    /// <p>How long ID tokens stay valid, in <code>TokenValidityUnits.IdToken</code>.</p>
    pub fn id_token_validity(&self) -> ::std::option::Option<i32> {
        self.id_token_validity
    }

    /// <p>The units of the token validity periods.</p>
    pub fn token_validity_units(&self) -> ::std::option::Option<&crate::types::TokenValidityUnitsType> {
        self.token_validity_units.as_ref()
    }

    /// <p>The attributes the app client can read.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.read_attributes.is_none()`.
    pub fn read_attributes(&self) -> &[::std::string::String] {
        self.read_attributes.as_deref().unwrap_or_default()
    }

    /// <p>The attributes the app client can write.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.write_attributes.is_none()`.
    pub fn write_attributes(&self) -> &[::std::string::String] {
        self.write_attributes.as_deref().unwrap_or_default()
    }

    /// <p>The authentication flows the app client allows.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.explicit_auth_flows.is_none()`.
    pub fn explicit_auth_flows(&self) -> &[crate::types::ExplicitAuthFlowsType] {
        self.explicit_auth_flows.as_deref().unwrap_or_default()
    }

    /// <p>The identity providers the app client supports.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.supported_identity_providers.is_none()`.
    pub fn supported_identity_providers(&self) -> &[::std::string::String] {
        self.supported_identity_providers.as_deref().unwrap_or_default()
    }

    /// <p>The allowed redirect URLs after sign-in.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.callback_urls.is_none()`.
    pub fn callback_urls(&self) -> &[::std::string::String] {
        self.callback_urls.as_deref().unwrap_or_default()
    }

    /// <p>The allowed redirect URLs after sign-out.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.logout_urls.is_none()`.
    pub fn logout_urls(&self) -> &[::std::string::String] {
        self.logout_urls.as_deref().unwrap_or_default()
    }

    /// <p>The default redirect URI. Must be in <code>CallbackURLs</code>.</p>
    pub fn default_redirect_uri(&self) -> ::std::option::Option<&str> {
        self.default_redirect_uri.as_deref()
    }

    /// <p>The OAuth 2.0 grants the app client allows.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.allowed_o_auth_flows.is_none()`.
    pub fn allowed_o_auth_flows(&self) -> &[crate::types::OAuthFlowType] {
        self.allowed_o_auth_flows.as_deref().unwrap_or_default()
    }

    /// <p>The OAuth 2.0 scopes the app client can request.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use `.allowed_o_auth_scopes.is_none()`.
    pub fn allowed_o_auth_scopes(&self) -> &[::std::string::String] {
        self.allowed_o_auth_scopes.as_deref().unwrap_or_default()
    }

    /// <p>Whether the app client may use the OAuth 2.0 features of the user pool.</p>
    pub fn allowed_o_auth_flows_user_pool_client(&self) -> ::std::option::Option<bool> {
        self.allowed_o_auth_flows_user_pool_client
    }

    /// <p>The Amazon Pinpoint analytics configuration.</p>
    pub fn analytics_configuration(&self) -> ::std::option::Option<&crate::types::AnalyticsConfigurationType> {
        self.analytics_configuration.as_ref()
    }

    /// <p>Whether authentication errors reveal if a user exists.</p>
    pub fn prevent_user_existence_errors(&self) -> ::std::option::Option<&crate::types::PreventUserExistenceErrorTypes> {
        self.prevent_user_existence_errors.as_ref()
    }

    /// <p>Whether refresh tokens issued to the app client can be revoked.</p>
    pub fn enable_token_revocation(&self) -> ::std::option::Option<bool> {
        self.enable_token_revocation
    }
}
impl ::std::fmt::Debug for UserPoolClientType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("UserPoolClientType");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("client_name", &self.client_name);
        formatter.field("client_id", &"*** Sensitive Data Redacted ***");
        formatter.field("client_secret", &"*** Sensitive Data Redacted ***");
        formatter.field("last_modified_date", &self.last_modified_date);
        formatter.field("creation_date", &self.creation_date);
        formatter.field("refresh_token_validity", &self.refresh_token_validity);
        formatter.field("access_token_validity", &self.access_token_validity);
        formatter.field("id_token_validity", &self.id_token_validity);
        formatter.field("token_validity_units", &self.token_validity_units);
        formatter.field("read_attributes", &self.read_attributes);
        formatter.field("write_attributes", &self.write_attributes);
        formatter.field("explicit_auth_flows", &self.explicit_auth_flows);
        formatter.field("supported_identity_providers", &self.supported_identity_providers);
        formatter.field("callback_urls", &self.callback_urls);
        formatter.field("logout_urls", &self.logout_urls);
        formatter.field("default_redirect_uri", &self.default_redirect_uri);
        formatter.field("allowed_o_auth_flows", &self.allowed_o_auth_flows);
        formatter.field("allowed_o_auth_scopes", &self.allowed_o_auth_scopes);
        formatter.field("allowed_o_auth_flows_user_pool_client", &self.allowed_o_auth_flows_user_pool_client);
        formatter.field("analytics_configuration", &self.analytics_configuration);
        formatter.field("prevent_user_existence_errors", &self.prevent_user_existence_errors);
        formatter.field("enable_token_revocation", &self.enable_token_revocation);
        formatter.finish()
    }
}
impl ::std::fmt::Display for UserPoolClientType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("UserPoolId", &self.user_pool_id)
            .field("ClientName", &self.client_name)
            .sensitive("ClientId", &self.client_id)
            .sensitive("ClientSecret", &self.client_secret)
            .timestamp("LastModifiedDate", &self.last_modified_date)
            .timestamp("CreationDate", &self.creation_date)
            .field("RefreshTokenValidity", &self.refresh_token_validity)
            .field("AccessTokenValidity", &self.access_token_validity)
            .field("IdTokenValidity", &self.id_token_validity)
            .field("TokenValidityUnits", &self.token_validity_units)
            .list("ReadAttributes", &self.read_attributes)
            .list("WriteAttributes", &self.write_attributes)
            .list("ExplicitAuthFlows", &self.explicit_auth_flows)
            .list("SupportedIdentityProviders", &self.supported_identity_providers)
            .list("CallbackURLs", &self.callback_urls)
            .list("LogoutURLs", &self.logout_urls)
            .field("DefaultRedirectURI", &self.default_redirect_uri)
            .list("AllowedOAuthFlows", &self.allowed_o_auth_flows)
            .list("AllowedOAuthScopes", &self.allowed_o_auth_scopes)
            .field("AllowedOAuthFlowsUserPoolClient", &self.allowed_o_auth_flows_user_pool_client)
            .field("AnalyticsConfiguration", &self.analytics_configuration)
            .field("PreventUserExistenceErrors", &self.prevent_user_existence_errors)
            .field("EnableTokenRevocation", &self.enable_token_revocation)
            .finish()
    }
}
impl UserPoolClientType {
    /// Creates a new builder-style object to manufacture [`UserPoolClientType`](crate::types::UserPoolClientType).
    pub fn builder() -> crate::types::builders::UserPoolClientTypeBuilder {
        crate::types::builders::UserPoolClientTypeBuilder::default()
    }
}

/// A builder for [`UserPoolClientType`](crate::types::UserPoolClientType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct UserPoolClientTypeBuilder {
    pub(crate) user_pool_id: ::std::option::Option<::std::string::String>,
    pub(crate) client_name: ::std::option::Option<::std::string::String>,
    pub(crate) client_id: ::std::option::Option<::std::string::String>,
    pub(crate) client_secret: ::std::option::Option<::std::string::String>,
    pub(crate) last_modified_date: ::std::option::Option<crate::primitives::DateTime>,
    pub(crate) creation_date: ::std::option::Option<crate::primitives::DateTime>,
    pub(crate) refresh_token_validity: ::std::option::Option<i32>,
    pub(crate) access_token_validity: ::std::option::Option<i32>,
    pub(crate) id_token_validity: ::std::option::Option<i32>,
    pub(crate) token_validity_units: ::std::option::Option<crate::types::TokenValidityUnitsType>,
    pub(crate) read_attributes: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) write_attributes: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) explicit_auth_flows: ::std::option::Option<::std::vec::Vec<crate::types::ExplicitAuthFlowsType>>,
    pub(crate) supported_identity_providers: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) callback_urls: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) logout_urls: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) default_redirect_uri: ::std::option::Option<::std::string::String>,
    pub(crate) allowed_o_auth_flows: ::std::option::Option<::std::vec::Vec<crate::types::OAuthFlowType>>,
    pub(crate) allowed_o_auth_scopes: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) allowed_o_auth_flows_user_pool_client: ::std::option::Option<bool>,
    pub(crate) analytics_configuration: ::std::option::Option<crate::types::AnalyticsConfigurationType>,
    pub(crate) prevent_user_existence_errors: ::std::option::Option<crate::types::PreventUserExistenceErrorTypes>,
    pub(crate) enable_token_revocation: ::std::option::Option<bool>,
}
impl UserPoolClientTypeBuilder {
    /// <p>The ID of the user pool the client belongs to.</p>
    pub fn user_pool_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.user_pool_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID of the user pool the client belongs to.</p>
    pub fn set_user_pool_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.user_pool_id = input;
        self
    }
    /// <p>The ID of the user pool the client belongs to.</p>
    pub fn get_user_pool_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.user_pool_id
    }

    /// <p>The name of the app client.</p>
    pub fn client_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.client_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the app client.</p>
    pub fn set_client_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.client_name = input;
        self
    }
    /// <p>The name of the app client.</p>
    pub fn get_client_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.client_name
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

    /// <p>The app client secret.</p>
    pub fn client_secret(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.client_secret = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The app client secret.</p>
    pub fn set_client_secret(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.client_secret = input;
        self
    }
    /// <p>The app client secret.</p>
    pub fn get_client_secret(&self) -> &::std::option::Option<::std::string::String> {
        &self.client_secret
    }

    /// <p>The date the app client was last modified.</p>
    pub fn last_modified_date(mut self, input: crate::primitives::DateTime) -> Self {
        self.last_modified_date = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date the app client was last modified.</p>
    pub fn set_last_modified_date(mut self, input: ::std::option::Option<crate::primitives::DateTime>) -> Self {
        self.last_modified_date = input;
        self
    }
    /// <p>The date the app client was last modified.</p>
    pub fn get_last_modified_date(&self) -> &::std::option::Option<crate::primitives::DateTime> {
        &self.last_modified_date
    }

    /// <p>The date the app client was created.</p>
    pub fn creation_date(mut self, input: crate::primitives::DateTime) -> Self {
        self.creation_date = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date the app client was created.</p>
    pub fn set_creation_date(mut self, input: ::std::option::Option<crate::primitives::DateTime>) -> Self {
        self.creation_date = input;
        self
    }
    /// <p>The date the app client was created.</p>
    pub fn get_creation_date(&self) -> &::std::option::Option<crate::primitives::DateTime> {
        &self.creation_date
    }

    /// <p>How long refresh tokens stay valid, in <code>TokenValidityUnits.RefreshToken</code>.</p>
    pub fn refresh_token_validity(mut self, input: i32) -> Self {
        self.refresh_token_validity = ::std::option::Option::Some(input);
        self
    }
    /// <p>How long refresh tokens stay valid, in <code>TokenValidityUnits.RefreshToken</code>.</p>
    pub fn set_refresh_token_validity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.refresh_token_validity = input;
        self
    }
    /// <p>How long refresh tokens stay valid, in <code>TokenValidityUnits.RefreshToken</code>.</p>
    pub fn get_refresh_token_validity(&self) -> &::std::option::Option<i32> {
        &self.refresh_token_validity
    }

    /// <p>How long access tokens stay valid, in <code>TokenValidityUnits.AccessToken</code>.</p>
    pub fn access_token_validity(mut self, input: i32) -> Self {
        self.access_token_validity = ::std::option::Option::Some(input);
        self
    }
    /// <p>How long access tokens stay valid, in <code>TokenValidityUnits.AccessToken</code>.</p>
    pub fn set_access_token_validity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.access_token_validity = input;
        self
    }
    /// <p>How long access tokens stay valid, in <code>TokenValidityUnits.AccessToken</code>.</p>
    pub fn get_access_token_validity(&self) -> &::std::option::Option<i32> {
        &self.access_token_validity
    }

    /// <p>How long ID tokens stay valid, in <code>TokenValidityUnits.IdToken</code>.</p>
    pub fn id_token_validity(mut self, input: i32) -> Self {
        self.id_token_validity = ::std::option::Option::Some(input);
        self
    }
    /// <p>How long ID tokens stay valid, in <code>TokenValidityUnits.IdToken</code>.</p>
    pub fn set_id_token_validity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.id_token_validity = input;
        self
    }
    /// <p>How long ID tokens stay valid, in <code>TokenValidityUnits.IdToken</code>.</p>
    pub fn get_id_token_validity(&self) -> &::std::option::Option<i32> {
        &self.id_token_validity
    }

    /// <p>The units of the token validity periods.</p>
    pub fn token_validity_units(mut self, input: crate::types::TokenValidityUnitsType) -> Self {
        self.token_validity_units = ::std::option::Option::Some(input);
        self
    }
    /// <p>The units of the token validity periods.</p>
    pub fn set_token_validity_units(mut self, input: ::std::option::Option<crate::types::TokenValidityUnitsType>) -> Self {
        self.token_validity_units = input;
        self
    }
    /// <p>The units of the token validity periods.</p>
    pub fn get_token_validity_units(&self) -> &::std::option::Option<crate::types::TokenValidityUnitsType> {
        &self.token_validity_units
    }

    /// Appends an item to `read_attributes`.
    ///
    /// To override the contents of this collection use [`set_read_attributes`](Self::set_read_attributes).
    ///
    /// <p>The attributes the app client can read.</p>
    pub fn read_attributes(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.read_attributes.unwrap_or_default();
        v.push(input.into());
        self.read_attributes = ::std::option::Option::Some(v);
        self
    }
    /// <p>The attributes the app client can read.</p>
    pub fn set_read_attributes(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.read_attributes = input;
        self
    }
    /// <p>The attributes the app client can read.</p>
    pub fn get_read_attributes(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.read_attributes
    }

    /// Appends an item to `write_attributes`.
    ///
    /// To override the contents of this collection use [`set_write_attributes`](Self::set_write_attributes).
    ///
    /// <p>The attributes the app client can write.</p>
    pub fn write_attributes(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.write_attributes.unwrap_or_default();
        v.push(input.into());
        self.write_attributes = ::std::option::Option::Some(v);
        self
    }
    /// <p>The attributes the app client can write.</p>
    pub fn set_write_attributes(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.write_attributes = input;
        self
    }
    /// <p>The attributes the app client can write.</p>
    pub fn get_write_attributes(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.write_attributes
    }

    /// Appends an item to `explicit_auth_flows`.
    ///
    /// To override the contents of this collection use [`set_explicit_auth_flows`](Self::set_explicit_auth_flows).
    ///
    /// <p>The authentication flows the app client allows.</p>
    pub fn explicit_auth_flows(mut self, input: impl ::std::convert::Into<crate::types::ExplicitAuthFlowsType>) -> Self {
        let mut v = self.explicit_auth_flows.unwrap_or_default();
        v.push(input.into());
        self.explicit_auth_flows = ::std::option::Option::Some(v);
        self
    }
    /// <p>The authentication flows the app client allows.</p>
    pub fn set_explicit_auth_flows(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::ExplicitAuthFlowsType>>) -> Self {
        self.explicit_auth_flows = input;
        self
    }
    /// <p>The authentication flows the app client allows.</p>
    pub fn get_explicit_auth_flows(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::ExplicitAuthFlowsType>> {
        &self.explicit_auth_flows
    }

    /// Appends an item to `supported_identity_providers`.
    ///
    /// To override the contents of this collection use [`set_supported_identity_providers`](Self::set_supported_identity_providers).
    ///
    /// <p>The identity providers the app client supports.</p>
    pub fn supported_identity_providers(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.supported_identity_providers.unwrap_or_default();
        v.push(input.into());
        self.supported_identity_providers = ::std::option::Option::Some(v);
        self
    }
    /// <p>The identity providers the app client supports.</p>
    pub fn set_supported_identity_providers(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.supported_identity_providers = input;
        self
    }
    /// <p>The identity providers the app client supports.</p>
    pub fn get_supported_identity_providers(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.supported_identity_providers
    }

    /// Appends an item to `callback_urls`.
    ///
    /// To override the contents of this collection use [`set_callback_urls`](Self::set_callback_urls).
    ///
    /// <p>The allowed redirect URLs after sign-in.</p>
    pub fn callback_urls(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.callback_urls.unwrap_or_default();
        v.push(input.into());
        self.callback_urls = ::std::option::Option::Some(v);
        self
    }
    /// <p>The allowed redirect URLs after sign-in.</p>
    pub fn set_callback_urls(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.callback_urls = input;
        self
    }
    /// <p>The allowed redirect URLs after sign-in.</p>
    pub fn get_callback_urls(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.callback_urls
    }

    /// Appends an item to `logout_urls`.
    ///
    /// To override the contents of this collection use [`set_logout_urls`](Self::set_logout_urls).
    ///
    /// <p>The allowed redirect URLs after sign-out.</p>
    pub fn logout_urls(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.logout_urls.unwrap_or_default();
        v.push(input.into());
        self.logout_urls = ::std::option::Option::Some(v);
        self
    }
    /// <p>The allowed redirect URLs after sign-out.</p>
    pub fn set_logout_urls(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.logout_urls = input;
        self
    }
    /// <p>The allowed redirect URLs after sign-out.</p>
    pub fn get_logout_urls(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.logout_urls
    }

    /// <p>The default redirect URI. Must be in <code>CallbackURLs</code>.</p>
    pub fn default_redirect_uri(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.default_redirect_uri = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The default redirect URI. Must be in <code>CallbackURLs</code>.</p>
    pub fn set_default_redirect_uri(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.default_redirect_uri = input;
        self
    }
    /// <p>The default redirect URI. Must be in <code>CallbackURLs</code>.</p>
    pub fn get_default_redirect_uri(&self) -> &::std::option::Option<::std::string::String> {
        &self.default_redirect_uri
    }

    /// Appends an item to `allowed_o_auth_flows`.
    ///
    /// To override the contents of this collection use [`set_allowed_o_auth_flows`](Self::set_allowed_o_auth_flows).
    ///
    /// <p>The OAuth 2.0 grants the app client allows.</p>
    pub fn allowed_o_auth_flows(mut self, input: impl ::std::convert::Into<crate::types::OAuthFlowType>) -> Self {
        let mut v = self.allowed_o_auth_flows.unwrap_or_default();
        v.push(input.into());
        self.allowed_o_auth_flows = ::std::option::Option::Some(v);
        self
    }
    /// <p>The OAuth 2.0 grants the app client allows.</p>
    pub fn set_allowed_o_auth_flows(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::OAuthFlowType>>) -> Self {
        self.allowed_o_auth_flows = input;
        self
    }
    /// <p>The OAuth 2.0 grants the app client allows.</p>
    pub fn get_allowed_o_auth_flows(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::OAuthFlowType>> {
        &self.allowed_o_auth_flows
    }

    /// Appends an item to `allowed_o_auth_scopes`.
    ///
    /// To override the contents of this collection use [`set_allowed_o_auth_scopes`](Self::set_allowed_o_auth_scopes).
    ///
    /// <p>The OAuth 2.0 scopes the app client can request.</p>
    pub fn allowed_o_auth_scopes(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.allowed_o_auth_scopes.unwrap_or_default();
        v.push(input.into());
        self.allowed_o_auth_scopes = ::std::option::Option::Some(v);
        self
    }
    /// <p>The OAuth 2.0 scopes the app client can request.</p>
    pub fn set_allowed_o_auth_scopes(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.allowed_o_auth_scopes = input;
        self
    }
    /// <p>The OAuth 2.0 scopes the app client can request.</p>
    pub fn get_allowed_o_auth_scopes(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.allowed_o_auth_scopes
    }

    /// <p>Whether the app client may use the OAuth 2.0 features of the user pool.</p>
    pub fn allowed_o_auth_flows_user_pool_client(mut self, input: bool) -> Self {
        self.allowed_o_auth_flows_user_pool_client = ::std::option::Option::Some(input);
        self
    }
    /// <p>Whether the app client may use the OAuth 2.0 features of the user pool.</p>
    pub fn set_allowed_o_auth_flows_user_pool_client(mut self, input: ::std::option::Option<bool>) -> Self {
        self.allowed_o_auth_flows_user_pool_client = input;
        self
    }
    /// <p>Whether the app client may use the OAuth 2.0 features of the user pool.</p>
    pub fn get_allowed_o_auth_flows_user_pool_client(&self) -> &::std::option::Option<bool> {
        &self.allowed_o_auth_flows_user_pool_client
    }

    /// <p>The Amazon Pinpoint analytics configuration.</p>
    pub fn analytics_configuration(mut self, input: crate::types::AnalyticsConfigurationType) -> Self {
        self.analytics_configuration = ::std::option::Option::Some(input);
        self
    }
    /// <p>The Amazon Pinpoint analytics configuration.</p>
    pub fn set_analytics_configuration(mut self, input: ::std::option::Option<crate::types::AnalyticsConfigurationType>) -> Self {
        self.analytics_configuration = input;
        self
    }
    /// <p>The Amazon Pinpoint analytics configuration.</p>
    pub fn get_analytics_configuration(&self) -> &::std::option::Option<crate::types::AnalyticsConfigurationType> {
        &self.analytics_configuration
    }

    /// <p>Whether authentication errors reveal if a user exists.</p>
    pub fn prevent_user_existence_errors(mut self, input: impl ::std::convert::Into<crate::types::PreventUserExistenceErrorTypes>) -> Self {
        self.prevent_user_existence_errors = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Whether authentication errors reveal if a user exists.</p>
    pub fn set_prevent_user_existence_errors(mut self, input: ::std::option::Option<crate::types::PreventUserExistenceErrorTypes>) -> Self {
        self.prevent_user_existence_errors = input;
        self
    }
    /// <p>Whether authentication errors reveal if a user exists.</p>
    pub fn get_prevent_user_existence_errors(&self) -> &::std::option::Option<crate::types::PreventUserExistenceErrorTypes> {
        &self.prevent_user_existence_errors
    }

    /// <p>Whether refresh tokens issued to the app client can be revoked.</p>
    pub fn enable_token_revocation(mut self, input: bool) -> Self {
        self.enable_token_revocation = ::std::option::Option::Some(input);
        self
    }
    /// <p>Whether refresh tokens issued to the app client can be revoked.</p>
    pub fn set_enable_token_revocation(mut self, input: ::std::option::Option<bool>) -> Self {
        self.enable_token_revocation = input;
        self
    }
    /// <p>Whether refresh tokens issued to the app client can be revoked.</p>
    pub fn get_enable_token_revocation(&self) -> &::std::option::Option<bool> {
        &self.enable_token_revocation
    }
    /// Consumes the builder and constructs a [`UserPoolClientType`](crate::types::UserPoolClientType).
    pub fn build(self) -> crate::types::UserPoolClientType {
        crate::types::UserPoolClientType {
            user_pool_id: self.user_pool_id,
            client_name: self.client_name,
            client_id: self.client_id,
            client_secret: self.client_secret,
            last_modified_date: self.last_modified_date,
            creation_date: self.creation_date,
            refresh_token_validity: self.refresh_token_validity,
            access_token_validity: self.access_token_validity,
            id_token_validity: self.id_token_validity,
            token_validity_units: self.token_validity_units,
            read_attributes: self.read_attributes,
            write_attributes: self.write_attributes,
            explicit_auth_flows: self.explicit_auth_flows,
            supported_identity_providers: self.supported_identity_providers,
            callback_urls: self.callback_urls,
            logout_urls: self.logout_urls,
            default_redirect_uri: self.default_redirect_uri,
            allowed_o_auth_flows: self.allowed_o_auth_flows,
            allowed_o_auth_scopes: self.allowed_o_auth_scopes,
            allowed_o_auth_flows_user_pool_client: self.allowed_o_auth_flows_user_pool_client,
            analytics_configuration: self.analytics_configuration,
            prevent_user_existence_errors: self.prevent_user_existence_errors,
            enable_token_revocation: self.enable_token_revocation,
        }
    }
}
impl ::std::fmt::Debug for UserPoolClientTypeBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("UserPoolClientTypeBuilder");
        formatter.field("user_pool_id", &self.user_pool_id);
        formatter.field("client_name", &self.client_name);
        formatter.field("client_id", &"*** Sensitive Data Redacted ***");
        formatter.field("client_secret", &"*** Sensitive Data Redacted ***");
        formatter.field("last_modified_date", &self.last_modified_date);
        formatter.field("creation_date", &self.creation_date);
        formatter.field("refresh_token_validity", &self.refresh_token_validity);
        formatter.field("access_token_validity", &self.access_token_validity);
        formatter.field("id_token_validity", &self.id_token_validity);
        formatter.field("token_validity_units", &self.token_validity_units);
        formatter.field("read_attributes", &self.read_attributes);
        formatter.field("write_attributes", &self.write_attributes);
        formatter.field("explicit_auth_flows", &self.explicit_auth_flows);
        formatter.field("supported_identity_providers", &self.supported_identity_providers);
        formatter.field("callback_urls", &self.callback_urls);
        formatter.field("logout_urls", &self.logout_urls);
        formatter.field("default_redirect_uri", &self.default_redirect_uri);
        formatter.field("allowed_o_auth_flows", &self.allowed_o_auth_flows);
        formatter.field("allowed_o_auth_scopes", &self.allowed_o_auth_scopes);
        formatter.field("allowed_o_auth_flows_user_pool_client", &self.allowed_o_auth_flows_user_pool_client);
        formatter.field("analytics_configuration", &self.analytics_configuration);
        formatter.field("prevent_user_existence_errors", &self.prevent_user_existence_errors);
        formatter.field("enable_token_revocation", &self.enable_token_revocation);
        formatter.finish()
    }
}
