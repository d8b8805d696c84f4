/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::operation::respond_to_auth_challenge::_respond_to_auth_challenge_input::RespondToAuthChallengeInputBuilder;

pub use crate::operation::respond_to_auth_challenge::_respond_to_auth_challenge_output::RespondToAuthChallengeOutputBuilder;
