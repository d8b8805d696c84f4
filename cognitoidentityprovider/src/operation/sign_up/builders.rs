/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::sign_up::_sign_up_input::SignUpInputBuilder;

pub use crate::operation::sign_up::_sign_up_output::SignUpOutputBuilder;
