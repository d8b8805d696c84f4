/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! All operations that this crate can perform.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// An operation of the service: its name plus the shapes it sends and receives.
pub trait Operation {
    /// The name of the operation, e.g. `AdminCreateUser`.
    const NAME: &'static str;
    /// The input shape.
    type Input: Serialize + Clone + std::fmt::Display + Send + Sync + 'static;
    /// The output shape.
    type Output: DeserializeOwned + Send + 'static;
}

/// An operation whose results are split into pages linked by a continuation token.
pub trait PaginatedOperation: Operation {
    /// The continuation token in `output`, if the service returned one.
    fn next_token(output: &Self::Output) -> Option<&str>;

    /// The continuation token `input` will be sent with, if any.
    fn input_token(input: &Self::Input) -> Option<&str>;

    /// Sets the continuation token to send with the next request.
    fn set_next_token(input: &mut Self::Input, token: Option<String>);
}

/// Types for the `AdminAddUserToGroup` operation.
pub mod admin_add_user_to_group;

/// Types for the `AdminCreateUser` operation.
pub mod admin_create_user;

/// Types for the `AdminDeleteUser` operation.
pub mod admin_delete_user;

/// Types for the `AdminDeleteUserAttributes` operation.
pub mod admin_delete_user_attributes;

/// Types for the `AdminDisableUser` operation.
pub mod admin_disable_user;

/// Types for the `AdminEnableUser` operation.
pub mod admin_enable_user;

/// Types for the `AdminGetUser` operation.
pub mod admin_get_user;

/// Types for the `AdminInitiateAuth` operation.
pub mod admin_initiate_auth;

/// Types for the `AdminListGroupsForUser` operation.
pub mod admin_list_groups_for_user;

/// Types for the `AdminUpdateUserAttributes` operation.
pub mod admin_update_user_attributes;

/// Types for the `ChangePassword` operation.
pub mod change_password;

/// Types for the `ConfirmForgotPassword` operation.
pub mod confirm_forgot_password;

/// Types for the `ConfirmSignUp` operation.
pub mod confirm_sign_up;

/// Types for the `CreateGroup` operation.
pub mod create_group;

/// Types for the `DescribeUserPool` operation.
pub mod describe_user_pool;

/// Types for the `DescribeUserPoolClient` operation.
pub mod describe_user_pool_client;

/// Types for the `ForgotPassword` operation.
pub mod forgot_password;

/// Types for the `GetUser` operation.
pub mod get_user;

/// Types for the `GlobalSignOut` operation.
pub mod global_sign_out;

/// Types for the `InitiateAuth` operation.
pub mod initiate_auth;

/// Types for the `ListGroups` operation.
pub mod list_groups;

/// Types for the `ListUserPoolClients` operation.
pub mod list_user_pool_clients;

/// Types for the `ListUsers` operation.
pub mod list_users;

/// Types for the `RespondToAuthChallenge` operation.
pub mod respond_to_auth_challenge;

/// Types for the `SignUp` operation.
pub mod sign_up;
