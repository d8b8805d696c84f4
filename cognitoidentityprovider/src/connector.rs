/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The transport seam of the [`Client`](crate::Client).
//!
//! The client never touches the network itself. It marshals each operation input into an
//! [`OperationRequest`] and hands it to a [`Connector`], which returns an [`OperationResponse`].
//! A connector decides how the request is sent: over HTTP with request signing, through a
//! local emulator, or not at all in tests.

use crate::config::Region;
use crate::error::ConnectorError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by [`Connector::call`].
pub type ConnectorFuture =
    Pin<Box<dyn Future<Output = Result<OperationResponse, ConnectorError>> + Send>>;

/// Trait with a `call` function that asynchronously converts a request into a response.
pub trait Connector: Send + Sync + fmt::Debug {
    /// Asynchronously converts a request into a response.
    fn call(&self, request: OperationRequest) -> ConnectorFuture;
}

/// A shared [`Connector`] implementation.
#[derive(Clone, Debug)]
pub struct SharedConnector(Arc<dyn Connector>);

impl SharedConnector {
    /// Returns a new [`SharedConnector`].
    pub fn new(connector: impl Connector + 'static) -> Self {
        Self(Arc::new(connector))
    }
}

impl Connector for SharedConnector {
    fn call(&self, request: OperationRequest) -> ConnectorFuture {
        (*self.0).call(request)
    }
}

/// A marshalled operation, ready to be sent by a [`Connector`].
#[derive(Clone, Debug, PartialEq)]
pub struct OperationRequest {
    operation: &'static str,
    region: Region,
    endpoint_url: Option<String>,
    body: serde_json::Value,
}

impl OperationRequest {
    pub(crate) fn new(
        operation: &'static str,
        region: Region,
        endpoint_url: Option<String>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            operation,
            region,
            endpoint_url,
            body,
        }
    }

    /// The name of the operation, e.g. `AdminCreateUser`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The region the request is bound for.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The endpoint override from the client config, if any.
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// The input, marshalled with wire member names. Absent members are omitted.
    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }
}

/// The response a [`Connector`] received for an [`OperationRequest`].
#[derive(Clone, Debug, PartialEq)]
pub struct OperationResponse {
    status: u16,
    request_id: Option<String>,
    body: serde_json::Value,
}

impl OperationResponse {
    /// Creates a response with the given status code and body.
    ///
    /// A `null` body is treated as an empty document.
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            request_id: None,
            body,
        }
    }

    /// Sets the request id reported by the service.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// The status code of the response.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the status code is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The request id reported by the service, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The body of the response.
    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }
}
