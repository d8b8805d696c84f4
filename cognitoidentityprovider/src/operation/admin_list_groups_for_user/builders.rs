/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::admin_list_groups_for_user::_admin_list_groups_for_user_input::AdminListGroupsForUserInputBuilder;

pub use crate::operation::admin_list_groups_for_user::_admin_list_groups_for_user_output::AdminListGroupsForUserOutputBuilder;
