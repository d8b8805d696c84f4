/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::change_password::_change_password_input::ChangePasswordInputBuilder;

pub use crate::operation::change_password::_change_password_output::ChangePasswordOutputBuilder;
