/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
//! Data structures used by operation inputs and outputs.

pub use crate::types::_alias_attribute_type::AliasAttributeType;

pub use crate::types::_analytics_configuration_type::AnalyticsConfigurationType;

pub use crate::types::_attribute_type::AttributeType;

pub use crate::types::_auth_flow_type::AuthFlowType;

pub use crate::types::_authentication_result_type::AuthenticationResultType;

pub use crate::types::_challenge_name_type::ChallengeNameType;

pub use crate::types::_code_delivery_details_type::CodeDeliveryDetailsType;

pub use crate::types::_delivery_medium_type::DeliveryMediumType;

pub use crate::types::_explicit_auth_flows_type::ExplicitAuthFlowsType;

pub use crate::types::_group_type::GroupType;

pub use crate::types::_lambda_config_type::LambdaConfigType;

pub use crate::types::_message_action_type::MessageActionType;

pub use crate::types::_mfa_option_type::MfaOptionType;

pub use crate::types::_new_device_metadata_type::NewDeviceMetadataType;

pub use crate::types::_o_auth_flow_type::OAuthFlowType;

pub use crate::types::_prevent_user_existence_error_types::PreventUserExistenceErrorTypes;

pub use crate::types::_status_type::StatusType;

pub use crate::types::_time_units_type::TimeUnitsType;

pub use crate::types::_token_validity_units_type::TokenValidityUnitsType;

pub use crate::types::_user_pool_client_description::UserPoolClientDescription;

pub use crate::types::_user_pool_client_type::UserPoolClientType;

pub use crate::types::_user_pool_mfa_type::UserPoolMfaType;

pub use crate::types::_user_pool_type::UserPoolType;

pub use crate::types::_user_status_type::UserStatusType;

pub use crate::types::_user_type::UserType;

pub use crate::types::_username_attribute_type::UsernameAttributeType;

pub use crate::types::_verified_attribute_type::VerifiedAttributeType;

/// Builders
pub mod builders;

mod _alias_attribute_type;

mod _analytics_configuration_type;

mod _attribute_type;

mod _auth_flow_type;

mod _authentication_result_type;

mod _challenge_name_type;

mod _code_delivery_details_type;

mod _delivery_medium_type;

mod _explicit_auth_flows_type;

mod _group_type;

mod _lambda_config_type;

mod _message_action_type;

mod _mfa_option_type;

mod _new_device_metadata_type;

mod _o_auth_flow_type;

mod _prevent_user_existence_error_types;

mod _status_type;

mod _time_units_type;

mod _token_validity_units_type;

mod _user_pool_client_description;

mod _user_pool_client_type;

mod _user_pool_mfa_type;

mod _user_pool_type;

mod _user_status_type;

mod _user_type;

mod _username_attribute_type;

mod _verified_attribute_type;
