/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::get_user::_get_user_input::GetUserInputBuilder;

pub use crate::operation::get_user::_get_user_output::GetUserOutputBuilder;
