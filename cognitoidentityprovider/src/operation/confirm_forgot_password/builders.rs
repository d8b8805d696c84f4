/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::confirm_forgot_password::_confirm_forgot_password_input::ConfirmForgotPasswordInputBuilder;

pub use crate::operation::confirm_forgot_password::_confirm_forgot_password_output::ConfirmForgotPasswordOutputBuilder;
