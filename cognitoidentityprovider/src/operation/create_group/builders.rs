/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::create_group::_create_group_input::CreateGroupInputBuilder;

pub use crate::operation::create_group::_create_group_output::CreateGroupOutputBuilder;
