/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::client::paginator::Paginator;
use crate::client::Client;
use crate::error::SdkError;
use crate::operation;

impl Client {
    /// <p>Creates a user in a user pool as an administrator.</p>
    pub async fn admin_create_user(
        &self,
        input: operation::admin_create_user::AdminCreateUserInput,
    ) -> Result<operation::admin_create_user::AdminCreateUserOutput, SdkError> {
        self.send::<operation::admin_create_user::AdminCreateUser>(input).await
    }

    /// <p>Gets a user by username as an administrator.</p>
    pub async fn admin_get_user(
        &self,
        input: operation::admin_get_user::AdminGetUserInput,
    ) -> Result<operation::admin_get_user::AdminGetUserOutput, SdkError> {
        self.send::<operation::admin_get_user::AdminGetUser>(input).await
    }

    /// <p>Deletes a user as an administrator.</p>
    pub async fn admin_delete_user(
        &self,
        input: operation::admin_delete_user::AdminDeleteUserInput,
    ) -> Result<operation::admin_delete_user::AdminDeleteUserOutput, SdkError> {
        self.send::<operation::admin_delete_user::AdminDeleteUser>(input).await
    }

    /// <p>Deactivates a user and revokes all of their tokens.</p>
    pub async fn admin_disable_user(
        &self,
        input: operation::admin_disable_user::AdminDisableUserInput,
    ) -> Result<operation::admin_disable_user::AdminDisableUserOutput, SdkError> {
        self.send::<operation::admin_disable_user::AdminDisableUser>(input).await
    }

    /// <p>Reactivates a disabled user.</p>
    pub async fn admin_enable_user(
        &self,
        input: operation::admin_enable_user::AdminEnableUserInput,
    ) -> Result<operation::admin_enable_user::AdminEnableUserOutput, SdkError> {
        self.send::<operation::admin_enable_user::AdminEnableUser>(input).await
    }

    /// <p>Updates the attributes of a user as an administrator.</p>
    pub async fn admin_update_user_attributes(
        &self,
        input: operation::admin_update_user_attributes::AdminUpdateUserAttributesInput,
    ) -> Result<operation::admin_update_user_attributes::AdminUpdateUserAttributesOutput, SdkError> {
        self.send::<operation::admin_update_user_attributes::AdminUpdateUserAttributes>(input).await
    }

    /// <p>Deletes attributes of a user as an administrator.</p>
    pub async fn admin_delete_user_attributes(
        &self,
        input: operation::admin_delete_user_attributes::AdminDeleteUserAttributesInput,
    ) -> Result<operation::admin_delete_user_attributes::AdminDeleteUserAttributesOutput, SdkError> {
        self.send::<operation::admin_delete_user_attributes::AdminDeleteUserAttributes>(input).await
    }

    /// <p>Starts an authentication flow on behalf of a user, as an administrator.</p>
    pub async fn admin_initiate_auth(
        &self,
        input: operation::admin_initiate_auth::AdminInitiateAuthInput,
    ) -> Result<operation::admin_initiate_auth::AdminInitiateAuthOutput, SdkError> {
        self.send::<operation::admin_initiate_auth::AdminInitiateAuth>(input).await
    }

    /// <p>Adds a user to a group.</p>
    pub async fn admin_add_user_to_group(
        &self,
        input: operation::admin_add_user_to_group::AdminAddUserToGroupInput,
    ) -> Result<operation::admin_add_user_to_group::AdminAddUserToGroupOutput, SdkError> {
        self.send::<operation::admin_add_user_to_group::AdminAddUserToGroup>(input).await
    }

    /// <p>Lists the groups a user belongs to.</p>
    pub async fn admin_list_groups_for_user(
        &self,
        input: operation::admin_list_groups_for_user::AdminListGroupsForUserInput,
    ) -> Result<operation::admin_list_groups_for_user::AdminListGroupsForUserOutput, SdkError> {
        self.send::<operation::admin_list_groups_for_user::AdminListGroupsForUser>(input).await
    }

    /// Returns a paginator over the pages of `AdminListGroupsForUser`, starting from `input`.
    pub fn admin_list_groups_for_user_paginator(&self, input: operation::admin_list_groups_for_user::AdminListGroupsForUserInput) -> Paginator<operation::admin_list_groups_for_user::AdminListGroupsForUser> {
        self.paginate::<operation::admin_list_groups_for_user::AdminListGroupsForUser>(input)
    }

    /// <p>Starts an authentication flow for a user.</p>
    pub async fn initiate_auth(
        &self,
        input: operation::initiate_auth::InitiateAuthInput,
    ) -> Result<operation::initiate_auth::InitiateAuthOutput, SdkError> {
        self.send::<operation::initiate_auth::InitiateAuth>(input).await
    }

    /// <p>Answers a challenge returned by an authentication flow.</p>
    pub async fn respond_to_auth_challenge(
        &self,
        input: operation::respond_to_auth_challenge::RespondToAuthChallengeInput,
    ) -> Result<operation::respond_to_auth_challenge::RespondToAuthChallengeOutput, SdkError> {
        self.send::<operation::respond_to_auth_challenge::RespondToAuthChallenge>(input).await
    }

    /// <p>Registers a user in a user pool.</p>
    pub async fn sign_up(
        &self,
        input: operation::sign_up::SignUpInput,
    ) -> Result<operation::sign_up::SignUpOutput, SdkError> {
        self.send::<operation::sign_up::SignUp>(input).await
    }

    /// <p>Confirms the registration of a user with the code they received.</p>
    pub async fn confirm_sign_up(
        &self,
        input: operation::confirm_sign_up::ConfirmSignUpInput,
    ) -> Result<operation::confirm_sign_up::ConfirmSignUpOutput, SdkError> {
        self.send::<operation::confirm_sign_up::ConfirmSignUp>(input).await
    }

    /// <p>Sends a password reset code to a user.</p>
    pub async fn forgot_password(
        &self,
        input: operation::forgot_password::ForgotPasswordInput,
    ) -> Result<operation::forgot_password::ForgotPasswordOutput, SdkError> {
        self.send::<operation::forgot_password::ForgotPassword>(input).await
    }

    /// <p>Sets a new password with a password reset code.</p>
    pub async fn confirm_forgot_password(
        &self,
        input: operation::confirm_forgot_password::ConfirmForgotPasswordInput,
    ) -> Result<operation::confirm_forgot_password::ConfirmForgotPasswordOutput, SdkError> {
        self.send::<operation::confirm_forgot_password::ConfirmForgotPassword>(input).await
    }

    /// <p>Changes the password of the signed-in user.</p>
    pub async fn change_password(
        &self,
        input: operation::change_password::ChangePasswordInput,
    ) -> Result<operation::change_password::ChangePasswordOutput, SdkError> {
        self.send::<operation::change_password::ChangePassword>(input).await
    }

    /// <p>Gets the profile of the signed-in user.</p>
    pub async fn get_user(
        &self,
        input: operation::get_user::GetUserInput,
    ) -> Result<operation::get_user::GetUserOutput, SdkError> {
        self.send::<operation::get_user::GetUser>(input).await
    }

    /// <p>Lists the users of a user pool, optionally filtered.</p>
    pub async fn list_users(
        &self,
        input: operation::list_users::ListUsersInput,
    ) -> Result<operation::list_users::ListUsersOutput, SdkError> {
        self.send::<operation::list_users::ListUsers>(input).await
    }

    /// Returns a paginator over the pages of `ListUsers`, starting from `input`.
    pub fn list_users_paginator(&self, input: operation::list_users::ListUsersInput) -> Paginator<operation::list_users::ListUsers> {
        self.paginate::<operation::list_users::ListUsers>(input)
    }

    /// <p>Lists the groups of a user pool.</p>
    pub async fn list_groups(
        &self,
        input: operation::list_groups::ListGroupsInput,
    ) -> Result<operation::list_groups::ListGroupsOutput, SdkError> {
        self.send::<operation::list_groups::ListGroups>(input).await
    }

    /// Returns a paginator over the pages of `ListGroups`, starting from `input`.
    pub fn list_groups_paginator(&self, input: operation::list_groups::ListGroupsInput) -> Paginator<operation::list_groups::ListGroups> {
        self.paginate::<operation::list_groups::ListGroups>(input)
    }

    /// <p>Creates a group in a user pool.</p>
    pub async fn create_group(
        &self,
        input: operation::create_group::CreateGroupInput,
    ) -> Result<operation::create_group::CreateGroupOutput, SdkError> {
        self.send::<operation::create_group::CreateGroup>(input).await
    }

    /// <p>Gets the configuration of a user pool.</p>
    pub async fn describe_user_pool(
        &self,
        input: operation::describe_user_pool::DescribeUserPoolInput,
    ) -> Result<operation::describe_user_pool::DescribeUserPoolOutput, SdkError> {
        self.send::<operation::describe_user_pool::DescribeUserPool>(input).await
    }

    /// <p>Gets the configuration of an app client.</p>
    pub async fn describe_user_pool_client(
        &self,
        input: operation::describe_user_pool_client::DescribeUserPoolClientInput,
    ) -> Result<operation::describe_user_pool_client::DescribeUserPoolClientOutput, SdkError> {
        self.send::<operation::describe_user_pool_client::DescribeUserPoolClient>(input).await
    }

    /// <p>Lists the app clients of a user pool.</p>
    pub async fn list_user_pool_clients(
        &self,
        input: operation::list_user_pool_clients::ListUserPoolClientsInput,
    ) -> Result<operation::list_user_pool_clients::ListUserPoolClientsOutput, SdkError> {
        self.send::<operation::list_user_pool_clients::ListUserPoolClients>(input).await
    }

    /// Returns a paginator over the pages of `ListUserPoolClients`, starting from `input`.
    pub fn list_user_pool_clients_paginator(&self, input: operation::list_user_pool_clients::ListUserPoolClientsInput) -> Paginator<operation::list_user_pool_clients::ListUserPoolClients> {
        self.paginate::<operation::list_user_pool_clients::ListUserPoolClients>(input)
    }

    /// <p>Signs the user out of every device by revoking their refresh tokens.</p>
    pub async fn global_sign_out(
        &self,
        input: operation::global_sign_out::GlobalSignOutInput,
    ) -> Result<operation::global_sign_out::GlobalSignOutOutput, SdkError> {
        self.send::<operation::global_sign_out::GlobalSignOut>(input).await
    }
}
