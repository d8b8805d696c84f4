/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::confirm_sign_up::_confirm_sign_up_input::ConfirmSignUpInputBuilder;

pub use crate::operation::confirm_sign_up::_confirm_sign_up_output::ConfirmSignUpOutputBuilder;
