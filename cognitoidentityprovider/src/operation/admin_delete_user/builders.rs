/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::admin_delete_user::_admin_delete_user_input::AdminDeleteUserInputBuilder;

pub use crate::operation::admin_delete_user::_admin_delete_user_output::AdminDeleteUserOutputBuilder;
