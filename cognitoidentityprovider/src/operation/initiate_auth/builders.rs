/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::initiate_auth::_initiate_auth_input::InitiateAuthInputBuilder;

pub use crate::operation::initiate_auth::_initiate_auth_output::InitiateAuthOutputBuilder;
