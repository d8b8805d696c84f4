/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
/// <p>The response of a successful <code>InitiateAuth</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::default::Default, ::std::cmp::Eq, ::std::hash::Hash, ::std::cmp::PartialEq, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InitiateAuthOutput {
    /// <p>The challenge the caller must answer next, if authentication is not complete.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_name: ::std::option::Option<crate::types::ChallengeNameType>,
    /// <p>The session to pass to the next challenge response.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: ::std::option::Option<::std::string::String>,
    /// <p>The parameters of the challenge.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_parameters: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
    /// <p>The tokens issued when authentication completes.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_result: ::std::option::Option<crate::types::AuthenticationResultType>,
}
impl InitiateAuthOutput {
    /// <p>The challenge the caller must answer next, if authentication is not complete.</p>
    pub fn challenge_name(&self) -> ::std::option::Option<&crate::types::ChallengeNameType> {
        self.challenge_name.as_ref()
    }

    /// <p>The session to pass to the next challenge response.</p>
    pub fn session(&self) -> ::std::option::Option<&str> {
        self.session.as_deref()
    }

    /// <p>The parameters of the challenge.</p>
    pub fn challenge_parameters(&self) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        self.challenge_parameters.as_ref()
    }

    /// <p>The tokens issued when authentication completes.</p>
    pub fn authentication_result(&self) -> ::std::option::Option<&crate::types::AuthenticationResultType> {
        self.authentication_result.as_ref()
    }
}
impl ::std::fmt::Debug for InitiateAuthOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("InitiateAuthOutput");
        formatter.field("challenge_name", &self.challenge_name);
        formatter.field("session", &"*** Sensitive Data Redacted ***");
        formatter.field("challenge_parameters", &self.challenge_parameters);
        formatter.field("authentication_result", &self.authentication_result);
        formatter.finish()
    }
}
impl ::std::fmt::Display for InitiateAuthOutput {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        crate::display::ShapeDisplay::new(f)
            .field("ChallengeName", &self.challenge_name)
            .sensitive("Session", &self.session)
            .map("ChallengeParameters", &self.challenge_parameters)
            .field("AuthenticationResult", &self.authentication_result)
            .finish()
    }
}
impl InitiateAuthOutput {
    /// Creates a new builder-style object to manufacture [`InitiateAuthOutput`](crate::operation::initiate_auth::InitiateAuthOutput).
    pub fn builder() -> crate::operation::initiate_auth::builders::InitiateAuthOutputBuilder {
        crate::operation::initiate_auth::builders::InitiateAuthOutputBuilder::default()
    }
}

/// A builder for [`InitiateAuthOutput`](crate::operation::initiate_auth::InitiateAuthOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default)]
pub struct InitiateAuthOutputBuilder {
    pub(crate) challenge_name: ::std::option::Option<crate::types::ChallengeNameType>,
    pub(crate) session: ::std::option::Option<::std::string::String>,
    pub(crate) challenge_parameters: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>,
    pub(crate) authentication_result: ::std::option::Option<crate::types::AuthenticationResultType>,
}
impl InitiateAuthOutputBuilder {
    /// <p>The challenge the caller must answer next, if authentication is not complete.</p>
    pub fn challenge_name(mut self, input: impl ::std::convert::Into<crate::types::ChallengeNameType>) -> Self {
        self.challenge_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The challenge the caller must answer next, if authentication is not complete.</p>
    pub fn set_challenge_name(mut self, input: ::std::option::Option<crate::types::ChallengeNameType>) -> Self {
        self.challenge_name = input;
        self
    }
    /// <p>The challenge the caller must answer next, if authentication is not complete.</p>
    pub fn get_challenge_name(&self) -> &::std::option::Option<crate::types::ChallengeNameType> {
        &self.challenge_name
    }

    /// <p>The session to pass to the next challenge response.</p>
    pub fn session(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.session = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The session to pass to the next challenge response.</p>
    pub fn set_session(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.session = input;
        self
    }
    /// <p>The session to pass to the next challenge response.</p>
    pub fn get_session(&self) -> &::std::option::Option<::std::string::String> {
        &self.session
    }

    /// Adds a key-value pair to `challenge_parameters`, failing if `k` is already present.
    ///
    /// To override the contents of this collection use [`set_challenge_parameters`](Self::set_challenge_parameters).
    ///
    /// <p>The parameters of the challenge.</p>
    pub fn challenge_parameters(
        mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<Self, crate::error::DuplicateKeyError> {
        self.add_challenge_parameters_entry(k, v)?;
        ::std::result::Result::Ok(self)
    }
    /// Adds a key-value pair to `challenge_parameters` in place, failing if `k` is already present.
    pub fn add_challenge_parameters_entry(
        &mut self,
        k: impl ::std::convert::Into<::std::string::String>,
        v: impl ::std::convert::Into<::std::string::String>,
    ) -> ::std::result::Result<&mut Self, crate::error::DuplicateKeyError> {
        crate::collections::insert_unique(&mut self.challenge_parameters, "ChallengeParameters", k.into(), v.into())?;
        ::std::result::Result::Ok(self)
    }
    /// Removes every entry of `challenge_parameters`, leaving it absent.
    pub fn clear_challenge_parameters_entries(&mut self) -> &mut Self {
        self.challenge_parameters = ::std::option::Option::None;
        self
    }
    /// <p>The parameters of the challenge.</p>
    pub fn set_challenge_parameters(mut self, input: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>>) -> Self {
        self.challenge_parameters = input;
        self
    }
    /// <p>The parameters of the challenge.</p>
    pub fn get_challenge_parameters(&self) -> &::std::option::Option<::std::collections::BTreeMap<::std::string::String, ::std::string::String>> {
        &self.challenge_parameters
    }

    /// <p>The tokens issued when authentication completes.</p>
    pub fn authentication_result(mut self, input: crate::types::AuthenticationResultType) -> Self {
        self.authentication_result = ::std::option::Option::Some(input);
        self
    }
    /// <p>The tokens issued when authentication completes.</p>
    pub fn set_authentication_result(mut self, input: ::std::option::Option<crate::types::AuthenticationResultType>) -> Self {
        self.authentication_result = input;
        self
    }
    /// <p>The tokens issued when authentication completes.</p>
    pub fn get_authentication_result(&self) -> &::std::option::Option<crate::types::AuthenticationResultType> {
        &self.authentication_result
    }
    /// Consumes the builder and constructs a [`InitiateAuthOutput`](crate::operation::initiate_auth::InitiateAuthOutput).
    pub fn build(self) -> crate::operation::initiate_auth::InitiateAuthOutput {
        crate::operation::initiate_auth::InitiateAuthOutput {
            challenge_name: self.challenge_name,
            session: self.session,
            challenge_parameters: self.challenge_parameters,
            authentication_result: self.authentication_result,
        }
    }
}
impl ::std::fmt::Debug for InitiateAuthOutputBuilder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut formatter = f.debug_struct("InitiateAuthOutputBuilder");
        formatter.field("challenge_name", &self.challenge_name);
        formatter.field("session", &"*** Sensitive Data Redacted ***");
        formatter.field("challenge_parameters", &self.challenge_parameters);
        formatter.field("authentication_result", &self.authentication_result);
        formatter.finish()
    }
}
