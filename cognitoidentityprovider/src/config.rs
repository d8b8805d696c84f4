/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Configuration for the [`Client`](crate::Client).

use crate::connector::{Connector, SharedConnector};

pub use aws_types::os_shim_internal::Env;
pub use aws_types::region::Region;

const REGION_VARS: &[&str] = &["AWS_REGION", "AWS_DEFAULT_REGION"];
const ENDPOINT_VARS: &[&str] = &[
    "AWS_ENDPOINT_URL_COGNITO_IDENTITY_PROVIDER",
    "AWS_ENDPOINT_URL",
];

/// Returns the first of `keys` that is set to a non-empty value.
fn first_of(env: &Env, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| env.get(k).ok())
        .find(|v| !v.trim().is_empty())
}

/// Configuration for a [`Client`](crate::Client).
#[derive(Clone, Debug)]
pub struct Config {
    region: Option<Region>,
    endpoint_url: Option<String>,
    connector: Option<SharedConnector>,
}

impl Config {
    /// Constructs a config builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts this config back into a builder so that it can be tweaked.
    pub fn to_builder(&self) -> Builder {
        Builder {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            connector: self.connector.clone(),
        }
    }

    /// The region requests are bound for.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// The endpoint override passed along to the connector.
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// The connector requests are sent through.
    pub fn connector(&self) -> Option<&SharedConnector> {
        self.connector.as_ref()
    }
}

/// Builder for creating a [`Config`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_url: Option<String>,
    connector: Option<SharedConnector>,
}

impl Builder {
    /// Constructs a config builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a config builder with the region and endpoint taken from the process environment.
    ///
    /// The region is read from `AWS_REGION`, then `AWS_DEFAULT_REGION`. The endpoint is read from
    /// `AWS_ENDPOINT_URL_COGNITO_IDENTITY_PROVIDER`, then `AWS_ENDPOINT_URL`.
    pub fn from_env() -> Self {
        Self::from_env_with(&Env::real())
    }

    /// Like [`from_env`](Self::from_env), reading from the given environment.
    pub fn from_env_with(env: &Env) -> Self {
        let mut builder = Self::default();
        builder.set_region(first_of(env, REGION_VARS).map(Region::new));
        builder.set_endpoint_url(first_of(env, ENDPOINT_VARS));
        tracing::debug!(
            region = ?builder.region,
            endpoint_url = ?builder.endpoint_url,
            "loaded client config from the environment"
        );
        builder
    }

    /// Sets the region requests are bound for.
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.set_region(region.into());
        self
    }

    /// Sets the region requests are bound for.
    pub fn set_region(&mut self, region: Option<Region>) -> &mut Self {
        self.region = region;
        self
    }

    /// Sets an endpoint override passed along to the connector.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.set_endpoint_url(Some(endpoint_url.into()));
        self
    }

    /// Sets an endpoint override passed along to the connector.
    pub fn set_endpoint_url(&mut self, endpoint_url: Option<String>) -> &mut Self {
        self.endpoint_url = endpoint_url;
        self
    }

    /// Sets the connector requests are sent through.
    pub fn connector(mut self, connector: impl Connector + 'static) -> Self {
        self.set_connector(Some(SharedConnector::new(connector)));
        self
    }

    /// Sets the connector requests are sent through.
    pub fn set_connector(&mut self, connector: Option<SharedConnector>) -> &mut Self {
        self.connector = connector;
        self
    }

    /// Builds a [`Config`].
    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_url: self.endpoint_url,
            connector: self.connector,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Builder, Env, Region};
    use std::collections::HashMap;
    use std::env::VarError;

    #[test]
    fn unset_environment_leaves_builder_empty() {
        let env = Env::from_slice(&[("HOME", "/home/user")]);
        assert_eq!(env.get("AWS_REGION").expect_err("not set"), VarError::NotPresent);
        let config = Builder::from_env_with(&env).build();
        assert_eq!(config.region(), None);
        assert_eq!(config.endpoint_url(), None);
    }

    #[test]
    fn whitespace_only_values_are_skipped() {
        let env: Env = [
            ("AWS_REGION".to_string(), "  ".to_string()),
            ("AWS_DEFAULT_REGION".to_string(), "sa-east-1".to_string()),
        ]
        .into_iter()
        .collect::<HashMap<_, _>>()
        .into();
        let config = Builder::from_env_with(&env).build();
        assert_eq!(config.region(), Some(&Region::from_static("sa-east-1")));
    }

    #[test]
    fn region_prefers_aws_region() {
        let env = Env::from_slice(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]);
        let config = Builder::from_env_with(&env).build();
        assert_eq!(config.region(), Some(&Region::from_static("us-west-2")));
    }

    #[test]
    fn region_falls_back_to_default_region() {
        let env = Env::from_slice(&[("AWS_REGION", ""), ("AWS_DEFAULT_REGION", "eu-west-1")]);
        let config = Builder::from_env_with(&env).build();
        assert_eq!(config.region(), Some(&Region::new("eu-west-1".to_string())));
    }

    #[test]
    fn endpoint_prefers_service_specific_variable() {
        let env = Env::from_slice(&[
            ("AWS_ENDPOINT_URL", "http://localhost:4566"),
            (
                "AWS_ENDPOINT_URL_COGNITO_IDENTITY_PROVIDER",
                "http://localhost:9229",
            ),
        ]);
        let config = Builder::from_env_with(&env).build();
        assert_eq!(config.endpoint_url(), Some("http://localhost:9229"));
        assert_eq!(config.region(), None);
    }

    #[test]
    fn explicit_settings_override_environment() {
        let env = Env::from_slice(&[("AWS_REGION", "us-west-2")]);
        let config = Builder::from_env_with(&env)
            .region(Region::from_static("ap-south-1"))
            .build();
        assert_eq!(config.region(), Some(&Region::from_static("ap-south-1")));
        let cleared = config.to_builder().region(None).build();
        assert_eq!(cleared.region(), None);
    }
}
