/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::describe_user_pool_client::_describe_user_pool_client_input::DescribeUserPoolClientInputBuilder;

pub use crate::operation::describe_user_pool_client::_describe_user_pool_client_output::DescribeUserPoolClientOutputBuilder;
