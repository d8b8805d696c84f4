/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The Amazon Pinpoint analytics configuration of an app client.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AnalyticsConfigurationType {
    /// <p>The application ID of the Amazon Pinpoint project.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: ::std::option::Option<::std::string::String>,
    /// <p>The ARN of the Amazon Pinpoint project.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_arn: ::std::option::Option<::std::string::String>,
    /// <p>The ARN of an IAM role that authorizes publishing events to Amazon Pinpoint.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: ::std::option::Option<::std::string::String>,
    /// <p>The external ID.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: ::std::option::Option<::std::string::String>,
    /// <p>Whether user data is included in the published events.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data_shared: ::std::option::Option<bool>,
}
impl AnalyticsConfigurationType {
    /// <p>The application ID of the Amazon Pinpoint project.</p>
    pub fn application_id(&self) -> ::std::option::Option<&str> {
        self.application_id.as_deref()
    }

    /// <p>The ARN of the Amazon Pinpoint project.</p>
    pub fn application_arn(&self) -> ::std::option::Option<&str> {
        self.application_arn.as_deref()
    }

    /// <p>The ARN of an IAM role that authorizes publishing events to Amazon Pinpoint.</p>
    pub fn role_arn(&self) -> ::std::option::Option<&str> {
        self.role_arn.as_deref()
    }

    /// <p>The external ID.</p>
    pub fn external_id(&self) -> ::std::option::Option<&str> {
        self.external_id.as_deref()
    }

    /// <p>Whether user data is included in the published events.</p>
    pub fn user_data_shared(&self) -> ::std::option::Option<bool> {
        self.user_data_shared
    }
}
impl ::std::fmt::Display for AnalyticsConfigurationType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("ApplicationId", &self.application_id)
            .field("ApplicationArn", &self.application_arn)
            .field("RoleArn", &self.role_arn)
            .field("ExternalId", &self.external_id)
            .field("UserDataShared", &self.user_data_shared)
            .finish()
    }
}
impl AnalyticsConfigurationType {
    /// Creates a new builder-style object to manufacture [`AnalyticsConfigurationType`](crate::types::AnalyticsConfigurationType).
    pub fn builder() -> crate::types::builders::AnalyticsConfigurationTypeBuilder {
        crate::types::builders::AnalyticsConfigurationTypeBuilder::default()
    }
}

/// A builder for [`AnalyticsConfigurationType`](crate::types::AnalyticsConfigurationType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AnalyticsConfigurationTypeBuilder {
    pub(crate) application_id: ::std::option::Option<::std::string::String>,
    pub(crate) application_arn: ::std::option::Option<::std::string::String>,
    pub(crate) role_arn: ::std::option::Option<::std::string::String>,
    pub(crate) external_id: ::std::option::Option<::std::string::String>,
    pub(crate) user_data_shared: ::std::option::Option<bool>,
}
impl AnalyticsConfigurationTypeBuilder {
    /// <p>The application ID of the Amazon Pinpoint project.</p>
    pub fn application_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.application_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The application ID of the Amazon Pinpoint project.</p>
    pub fn set_application_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.application_id = input;
        self
    }
    /// <p>The application ID of the Amazon Pinpoint project.</p>
    pub fn get_application_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.application_id
    }

    /// <p>The ARN of the Amazon Pinpoint project.</p>
    pub fn application_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.application_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ARN of the Amazon Pinpoint project.</p>
    pub fn set_application_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.application_arn = input;
        self
    }
    /// <p>The ARN of the Amazon Pinpoint project.</p>
    pub fn get_application_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.application_arn
    }

    /// <p>The ARN of an IAM role that authorizes publishing events to Amazon Pinpoint.</p>
    pub fn role_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.role_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ARN of an IAM role that authorizes publishing events to Amazon Pinpoint.</p>
    pub fn set_role_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.role_arn = input;
        self
    }
    /// <p>The ARN of an IAM role that authorizes publishing events to Amazon Pinpoint.</p>
    pub fn get_role_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.role_arn
    }

    /// <p>The external ID.</p>
    pub fn external_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.external_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The external ID.</p>
    pub fn set_external_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.external_id = input;
        self
    }
    /// <p>The external ID.</p>
    pub fn get_external_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.external_id
    }

    /// <p>Whether user data is included in the published events.</p>
    pub fn user_data_shared(mut self, input: bool) -> Self {
        self.user_data_shared = ::std::option::Option::Some(input);
        self
    }
    /// <p>Whether user data is included in the published events.</p>
    pub fn set_user_data_shared(mut self, input: ::std::option::Option<bool>) -> Self {
        self.user_data_shared = input;
        self
    }
    /// <p>Whether user data is included in the published events.</p>
    pub fn get_user_data_shared(&self) -> &::std::option::Option<bool> {
        &self.user_data_shared
    }
    /// Consumes the builder and constructs a [`AnalyticsConfigurationType`](crate::types::AnalyticsConfigurationType).
    pub fn build(self) -> crate::types::AnalyticsConfigurationType {
        crate::types::AnalyticsConfigurationType {
            application_id: self.application_id,
            application_arn: self.application_arn,
            role_arn: self.role_arn,
            external_id: self.external_id,
            user_data_shared: self.user_data_shared,
        }
    }
}
