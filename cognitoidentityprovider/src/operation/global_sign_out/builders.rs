/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::global_sign_out::_global_sign_out_input::GlobalSignOutInputBuilder;

pub use crate::operation::global_sign_out::_global_sign_out_output::GlobalSignOutOutputBuilder;
