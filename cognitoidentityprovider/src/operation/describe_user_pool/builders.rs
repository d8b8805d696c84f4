/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::describe_user_pool::_describe_user_pool_input::DescribeUserPoolInputBuilder;

pub use crate::operation::describe_user_pool::_describe_user_pool_output::DescribeUserPoolOutputBuilder;
