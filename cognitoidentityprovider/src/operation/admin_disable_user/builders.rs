/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::admin_disable_user::_admin_disable_user_input::AdminDisableUserInputBuilder;

pub use crate::operation::admin_disable_user::_admin_disable_user_output::AdminDisableUserOutputBuilder;
