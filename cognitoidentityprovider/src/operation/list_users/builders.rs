/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::list_users::_list_users_input::ListUsersInputBuilder;

pub use crate::operation::list_users::_list_users_output::ListUsersOutputBuilder;
