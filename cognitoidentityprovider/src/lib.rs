/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Request and response shapes for the Amazon Cognito user pools API, plus a client that
//! sends them through a pluggable [`Connector`](crate::connector::Connector).
//!
//! Every shape is an immutable value with a builder. Members are optional and absence is
//! distinct from an empty value. Shapes compare by value, hash consistently with equality,
//! and render through `Display` as `{Member: value,...}` with sensitive members redacted.
//!
//! # Examples
//!
//! ```rust
//! use cognitoidentityprovider::operation::admin_create_user::AdminCreateUserInput;
//! use cognitoidentityprovider::types::{AttributeType, MessageActionType};
//!
//! let input = AdminCreateUserInput::builder()
//!     .user_pool_id("us-east-1_Example")
//!     .username("jane")
//!     .user_attributes(AttributeType::builder().name("email").value("jane@example.com").build())
//!     .message_action(MessageActionType::Suppress)
//!     .build()
//!     .expect("valid input");
//!
//! assert_eq!(input.user_pool_id(), Some("us-east-1_Example"));
//! assert_eq!(input.user_attributes().len(), 1);
//! assert!(input.desired_delivery_mediums().is_empty());
//! assert!(input.desired_delivery_mediums.is_none());
//! ```

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

pub mod client;
pub mod config;
pub mod connector;
pub mod error;
pub mod operation;
pub mod primitives;
pub mod types;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

mod collections;
mod display;
mod serde_util;

pub use crate::client::Client;
pub use crate::config::Config;
