/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::list_groups::_list_groups_input::ListGroupsInputBuilder;

pub use crate::operation::list_groups::_list_groups_output::ListGroupsOutputBuilder;
