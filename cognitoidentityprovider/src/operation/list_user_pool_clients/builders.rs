/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::list_user_pool_clients::_list_user_pool_clients_input::ListUserPoolClientsInputBuilder;

pub use crate::operation::list_user_pool_clients::_list_user_pool_clients_output::ListUserPoolClientsOutputBuilder;
