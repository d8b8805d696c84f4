/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Connectors for testing code that uses the [`Client`](crate::Client).

use crate::connector::{Connector, ConnectorFuture, OperationRequest, OperationResponse};
use crate::error::ConnectorError;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::oneshot;

/// Test connector that replays canned responses in order and records every request.
///
/// Once the responses run out, further calls fail with a [`ConnectorError`].
#[derive(Clone, Debug)]
pub struct ReplayConnector {
    inner: Arc<Mutex<ReplayInner>>,
}

#[derive(Debug)]
struct ReplayInner {
    responses: VecDeque<Result<OperationResponse, ConnectorError>>,
    requests: Vec<OperationRequest>,
}

impl ReplayConnector {
    /// Creates a connector that replies with `responses`, one per call.
    pub fn new(responses: impl IntoIterator<Item = OperationResponse>) -> Self {
        Self::with_results(responses.into_iter().map(Ok))
    }

    /// Creates a connector that replies with `results`, one per call, including failures.
    pub fn with_results(
        results: impl IntoIterator<Item = Result<OperationResponse, ConnectorError>>,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ReplayInner {
                responses: results.into_iter().collect(),
                requests: Vec::new(),
            })),
        }
    }

    /// The requests received so far, in order.
    pub fn requests(&self) -> Vec<OperationRequest> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .requests
            .clone()
    }
}

impl Connector for ReplayConnector {
    fn call(&self, request: OperationRequest) -> ConnectorFuture {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let operation = request.operation();
        inner.requests.push(request);
        let result = inner.responses.pop_front().unwrap_or_else(|| {
            Err(ConnectorError::other(format!(
                "no response left to replay for {}",
                operation
            )))
        });
        Box::pin(std::future::ready(result))
    }
}

/// Test connector used to capture a single request
#[derive(Clone, Debug)]
pub struct CaptureRequestConnector(Arc<Mutex<CaptureInner>>);

#[derive(Debug)]
struct CaptureInner {
    response: Option<OperationResponse>,
    sender: Option<oneshot::Sender<OperationRequest>>,
}

/// Receiver for [`CaptureRequestConnector`](CaptureRequestConnector)
#[derive(Debug)]
pub struct CaptureRequestReceiver {
    receiver: oneshot::Receiver<OperationRequest>,
}

impl CaptureRequestReceiver {
    /// Expect that a request was sent. Returns the captured request.
    ///
    /// # Panics
    /// If no request was received
    #[track_caller]
    pub fn expect_request(mut self) -> OperationRequest {
        self.receiver.try_recv().expect("no request was received")
    }

    /// Expect that no request was captured. Panics if a request was received.
    ///
    /// # Panics
    /// If a request was received
    #[track_caller]
    pub fn expect_no_request(mut self) {
        self.receiver
            .try_recv()
            .expect_err("expected no request to be received!");
    }
}

impl Connector for CaptureRequestConnector {
    fn call(&self, request: OperationRequest) -> ConnectorFuture {
        let mut inner = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(sender) = inner.sender.take() {
            // the receiver may already be gone
            let _ = sender.send(request);
        }
        let result = inner
            .response
            .take()
            .ok_or_else(|| ConnectorError::other("a request was already captured"));
        Box::pin(std::future::ready(result))
    }
}

/// Test connector used to capture a single request
///
/// If response is `None`, it will reply with a 200 response with an empty body
pub fn capture_request(
    response: Option<OperationResponse>,
) -> (CaptureRequestConnector, CaptureRequestReceiver) {
    let (tx, rx) = oneshot::channel();
    (
        CaptureRequestConnector(Arc::new(Mutex::new(CaptureInner {
            response: Some(response.unwrap_or_else(|| {
                OperationResponse::new(200, serde_json::Value::Object(serde_json::Map::new()))
            })),
            sender: Some(tx),
        }))),
        CaptureRequestReceiver { receiver: rx },
    )
}
