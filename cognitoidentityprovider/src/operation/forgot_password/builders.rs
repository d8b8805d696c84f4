/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::forgot_password::_forgot_password_input::ForgotPasswordInputBuilder;

pub use crate::operation::forgot_password::_forgot_password_output::ForgotPasswordOutputBuilder;
