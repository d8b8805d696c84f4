/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::admin_add_user_to_group::_admin_add_user_to_group_input::AdminAddUserToGroupInputBuilder;

pub use crate::operation::admin_add_user_to_group::_admin_add_user_to_group_output::AdminAddUserToGroupOutputBuilder;
