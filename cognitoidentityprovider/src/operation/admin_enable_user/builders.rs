/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::admin_enable_user::_admin_enable_user_input::AdminEnableUserInputBuilder;

pub use crate::operation::admin_enable_user::_admin_enable_user_output::AdminEnableUserOutputBuilder;
