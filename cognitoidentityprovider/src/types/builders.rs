/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::_analytics_configuration_type::AnalyticsConfigurationTypeBuilder;

pub use crate::types::_attribute_type::AttributeTypeBuilder;

pub use crate::types::_authentication_result_type::AuthenticationResultTypeBuilder;

pub use crate::types::_code_delivery_details_type::CodeDeliveryDetailsTypeBuilder;

pub use crate::types::_group_type::GroupTypeBuilder;

pub use crate::types::_lambda_config_type::LambdaConfigTypeBuilder;

pub use crate::types::_mfa_option_type::MfaOptionTypeBuilder;

pub use crate::types::_new_device_metadata_type::NewDeviceMetadataTypeBuilder;

pub use crate::types::_token_validity_units_type::TokenValidityUnitsTypeBuilder;

pub use crate::types::_user_pool_client_description::UserPoolClientDescriptionBuilder;

pub use crate::types::_user_pool_client_type::UserPoolClientTypeBuilder;

pub use crate::types::_user_pool_type::UserPoolTypeBuilder;

pub use crate::types::_user_type::UserTypeBuilder;
