/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::admin_create_user::_admin_create_user_input::AdminCreateUserInputBuilder;

pub use crate::operation::admin_create_user::_admin_create_user_output::AdminCreateUserOutputBuilder;
