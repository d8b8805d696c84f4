/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::admin_get_user::_admin_get_user_input::AdminGetUserInputBuilder;

pub use crate::operation::admin_get_user::_admin_get_user_output::AdminGetUserOutputBuilder;
