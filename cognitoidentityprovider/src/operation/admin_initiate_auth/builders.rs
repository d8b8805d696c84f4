/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::admin_initiate_auth::_admin_initiate_auth_input::AdminInitiateAuthInputBuilder;

pub use crate::operation::admin_initiate_auth::_admin_initiate_auth_output::AdminInitiateAuthOutputBuilder;
