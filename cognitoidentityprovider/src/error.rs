/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors returned by builders and by the [`Client`](crate::Client).

use crate::connector::OperationResponse;
use crate::primitives::UnknownVariantValue;
use std::error::Error;
use std::fmt;

pub use aws_smithy_types::error::operation::BuildError;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Returned when a map entry is added under a key that is already present.
///
/// The map that rejected the entry is left unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateKeyError {
    member: &'static str,
    key: String,
}

impl DuplicateKeyError {
    pub(crate) fn new(member: &'static str, key: String) -> Self {
        Self { member, key }
    }

    /// The wire name of the map member, e.g. `ClientMetadata`.
    pub fn member(&self) -> &str {
        self.member
    }

    /// The key that was already present.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicated keys ({}) are provided for {}",
            self.key, self.member
        )
    }
}

impl Error for DuplicateKeyError {}

/// The code of an error response returned by the service.
///
/// Codes that are not modelled here arrive as [`Unknown`](Self::Unknown).
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ServiceErrorCode {
    #[allow(missing_docs)] // documentation missing in model
    AliasExists,
    #[allow(missing_docs)] // documentation missing in model
    CodeMismatch,
    #[allow(missing_docs)] // documentation missing in model
    ConcurrentModification,
    #[allow(missing_docs)] // documentation missing in model
    ExpiredCode,
    #[allow(missing_docs)] // documentation missing in model
    InternalError,
    #[allow(missing_docs)] // documentation missing in model
    InvalidLambdaResponse,
    #[allow(missing_docs)] // documentation missing in model
    InvalidParameter,
    #[allow(missing_docs)] // documentation missing in model
    InvalidPassword,
    #[allow(missing_docs)] // documentation missing in model
    LimitExceeded,
    #[allow(missing_docs)] // documentation missing in model
    MfaMethodNotFound,
    #[allow(missing_docs)] // documentation missing in model
    NotAuthorized,
    #[allow(missing_docs)] // documentation missing in model
    PasswordResetRequired,
    #[allow(missing_docs)] // documentation missing in model
    ResourceNotFound,
    #[allow(missing_docs)] // documentation missing in model
    TooManyFailedAttempts,
    #[allow(missing_docs)] // documentation missing in model
    TooManyRequests,
    #[allow(missing_docs)] // documentation missing in model
    UnexpectedLambda,
    #[allow(missing_docs)] // documentation missing in model
    UserLambdaValidation,
    #[allow(missing_docs)] // documentation missing in model
    UserNotConfirmed,
    #[allow(missing_docs)] // documentation missing in model
    UserNotFound,
    #[allow(missing_docs)] // documentation missing in model
    UsernameExists,
    /// `Unknown` contains error codes that have been added since this code was generated.
    Unknown(UnknownVariantValue),
}

impl From<&str> for ServiceErrorCode {
    fn from(s: &str) -> Self {
        match s {
            "AliasExistsException" => ServiceErrorCode::AliasExists,
            "CodeMismatchException" => ServiceErrorCode::CodeMismatch,
            "ConcurrentModificationException" => ServiceErrorCode::ConcurrentModification,
            "ExpiredCodeException" => ServiceErrorCode::ExpiredCode,
            "InternalErrorException" => ServiceErrorCode::InternalError,
            "InvalidLambdaResponseException" => ServiceErrorCode::InvalidLambdaResponse,
            "InvalidParameterException" => ServiceErrorCode::InvalidParameter,
            "InvalidPasswordException" => ServiceErrorCode::InvalidPassword,
            "LimitExceededException" => ServiceErrorCode::LimitExceeded,
            "MFAMethodNotFoundException" => ServiceErrorCode::MfaMethodNotFound,
            "NotAuthorizedException" => ServiceErrorCode::NotAuthorized,
            "PasswordResetRequiredException" => ServiceErrorCode::PasswordResetRequired,
            "ResourceNotFoundException" => ServiceErrorCode::ResourceNotFound,
            "TooManyFailedAttemptsException" => ServiceErrorCode::TooManyFailedAttempts,
            "TooManyRequestsException" => ServiceErrorCode::TooManyRequests,
            "UnexpectedLambdaException" => ServiceErrorCode::UnexpectedLambda,
            "UserLambdaValidationException" => ServiceErrorCode::UserLambdaValidation,
            "UserNotConfirmedException" => ServiceErrorCode::UserNotConfirmed,
            "UserNotFoundException" => ServiceErrorCode::UserNotFound,
            "UsernameExistsException" => ServiceErrorCode::UsernameExists,
            other => ServiceErrorCode::Unknown(UnknownVariantValue(other.to_owned())),
        }
    }
}

impl ServiceErrorCode {
    /// Returns the `&str` value of the error code.
    pub fn as_str(&self) -> &str {
        match self {
            ServiceErrorCode::AliasExists => "AliasExistsException",
            ServiceErrorCode::CodeMismatch => "CodeMismatchException",
            ServiceErrorCode::ConcurrentModification => "ConcurrentModificationException",
            ServiceErrorCode::ExpiredCode => "ExpiredCodeException",
            ServiceErrorCode::InternalError => "InternalErrorException",
            ServiceErrorCode::InvalidLambdaResponse => "InvalidLambdaResponseException",
            ServiceErrorCode::InvalidParameter => "InvalidParameterException",
            ServiceErrorCode::InvalidPassword => "InvalidPasswordException",
            ServiceErrorCode::LimitExceeded => "LimitExceededException",
            ServiceErrorCode::MfaMethodNotFound => "MFAMethodNotFoundException",
            ServiceErrorCode::NotAuthorized => "NotAuthorizedException",
            ServiceErrorCode::PasswordResetRequired => "PasswordResetRequiredException",
            ServiceErrorCode::ResourceNotFound => "ResourceNotFoundException",
            ServiceErrorCode::TooManyFailedAttempts => "TooManyFailedAttemptsException",
            ServiceErrorCode::TooManyRequests => "TooManyRequestsException",
            ServiceErrorCode::UnexpectedLambda => "UnexpectedLambdaException",
            ServiceErrorCode::UserLambdaValidation => "UserLambdaValidationException",
            ServiceErrorCode::UserNotConfirmed => "UserNotConfirmedException",
            ServiceErrorCode::UserNotFound => "UserNotFoundException",
            ServiceErrorCode::UsernameExists => "UsernameExistsException",
            ServiceErrorCode::Unknown(value) => value.as_str(),
        }
    }

    /// Returns all the `&str` representations of the modelled error codes.
    pub const fn values() -> &'static [&'static str] {
        &[
            "AliasExistsException",
            "CodeMismatchException",
            "ConcurrentModificationException",
            "ExpiredCodeException",
            "InternalErrorException",
            "InvalidLambdaResponseException",
            "InvalidParameterException",
            "InvalidPasswordException",
            "LimitExceededException",
            "MFAMethodNotFoundException",
            "NotAuthorizedException",
            "PasswordResetRequiredException",
            "ResourceNotFoundException",
            "TooManyFailedAttemptsException",
            "TooManyRequestsException",
            "UnexpectedLambdaException",
            "UserLambdaValidationException",
            "UserNotConfirmedException",
            "UserNotFoundException",
            "UsernameExistsException",
        ]
    }
}

impl From<String> for ServiceErrorCode {
    fn from(s: String) -> Self {
        ServiceErrorCode::from(s.as_str())
    }
}

impl AsRef<str> for ServiceErrorCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error response returned by the service.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceError {
    code: ServiceErrorCode,
    message: Option<String>,
    request_id: Option<String>,
}

impl ServiceError {
    /// Creates a service error with the given code.
    pub fn new(code: impl Into<ServiceErrorCode>) -> Self {
        Self {
            code: code.into(),
            message: None,
            request_id: None,
        }
    }

    /// Sets the message the service attached to the error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the id of the request that failed.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// The error code, e.g. [`ServiceErrorCode::UserNotFound`].
    pub fn code(&self) -> &ServiceErrorCode {
        &self.code
    }

    /// The message the service attached to the error, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The id of the request that failed, if the connector reported one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns true if the service rejected the request because of its rate.
    pub fn is_throttling(&self) -> bool {
        matches!(
            self.code,
            ServiceErrorCode::TooManyRequests | ServiceErrorCode::LimitExceeded
        )
    }

    /// Returns true if sending the same request again may succeed.
    pub fn is_retryable(&self) -> bool {
        self.is_throttling() || self.code == ServiceErrorCode::InternalError
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request id: {})", request_id)?;
        }
        Ok(())
    }
}

impl Error for ServiceError {}

#[derive(Debug)]
enum ConnectorErrorKind {
    Timeout,
    Io,
    Other,
}

/// An error raised by a [`Connector`](crate::connector::Connector) before a response was received.
#[derive(Debug)]
pub struct ConnectorError {
    kind: ConnectorErrorKind,
    source: BoxError,
}

impl ConnectorError {
    /// The request timed out.
    pub fn timeout(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ConnectorErrorKind::Timeout,
            source: source.into(),
        }
    }

    /// The request failed with an IO error.
    pub fn io(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ConnectorErrorKind::Io,
            source: source.into(),
        }
    }

    /// The request failed for another reason.
    pub fn other(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ConnectorErrorKind::Other,
            source: source.into(),
        }
    }

    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ConnectorErrorKind::Timeout)
    }

    /// Returns true if the request failed with an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ConnectorErrorKind::Io)
    }

    /// Unwraps the underlying error.
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConnectorErrorKind::Timeout => write!(f, "timeout"),
            ConnectorErrorKind::Io => write!(f, "io error"),
            ConnectorErrorKind::Other => write!(f, "other"),
        }
    }
}

impl Error for ConnectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Failed result of sending an operation through the [`Client`](crate::Client).
#[derive(Debug)]
pub enum SdkError {
    /// The request failed during construction. It was not dispatched.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. A response was not received. The request MAY
    /// have been sent.
    DispatchFailure(ConnectorError),

    /// A response was received but it could not be parsed.
    ResponseError {
        /// Why the response could not be parsed.
        err: BoxError,
        /// The response that was received.
        raw: OperationResponse,
    },

    /// An error response was received from the service.
    ServiceError {
        /// The parsed service error.
        err: ServiceError,
        /// The response that was received.
        raw: OperationResponse,
    },
}

impl SdkError {
    /// Returns the service error, if the service returned one.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Converts into the service error, if the service returned one.
    pub fn into_service_error(self) -> Option<ServiceError> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Returns the raw response, if one was received.
    pub fn raw_response(&self) -> Option<&OperationResponse> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(_) => write!(f, "failed to construct request"),
            SdkError::DispatchFailure(_) => write!(f, "dispatch failure"),
            SdkError::ResponseError { .. } => write!(f, "response error"),
            SdkError::ServiceError { .. } => write!(f, "service error"),
        }
    }
}

impl Error for SdkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err) | SdkError::ResponseError { err, .. } => {
                Some(err.as_ref())
            }
            SdkError::DispatchFailure(err) => Some(err),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ConnectorError, DuplicateKeyError, SdkError, ServiceError, ServiceErrorCode};
    use std::error::Error;

    #[test]
    fn service_error_codes_are_open() {
        assert_eq!(
            ServiceErrorCode::from("UserNotFoundException"),
            ServiceErrorCode::UserNotFound
        );
        let unknown = ServiceErrorCode::from("BrandNewException");
        assert!(matches!(unknown, ServiceErrorCode::Unknown(_)));
        assert_eq!(unknown.as_str(), "BrandNewException");
        for code in ServiceErrorCode::values() {
            assert_eq!(ServiceErrorCode::from(*code).as_str(), *code);
        }
    }

    #[test]
    fn throttling_and_retry_classification() {
        assert!(ServiceError::new("TooManyRequestsException").is_throttling());
        assert!(ServiceError::new("LimitExceededException").is_retryable());
        assert!(ServiceError::new("InternalErrorException").is_retryable());
        assert!(!ServiceError::new("InternalErrorException").is_throttling());
        assert!(!ServiceError::new("NotAuthorizedException").is_retryable());
    }

    #[test]
    fn service_error_display() {
        let err = ServiceError::new(ServiceErrorCode::UserNotFound)
            .with_message("User does not exist.")
            .with_request_id("abc-123");
        assert_eq!(
            err.to_string(),
            "UserNotFoundException: User does not exist. (request id: abc-123)"
        );
        assert_eq!(ServiceError::new("Boom").to_string(), "Boom");
    }

    #[test]
    fn duplicate_key_display() {
        let err = DuplicateKeyError::new("ClientMetadata", "source".into());
        assert_eq!(
            err.to_string(),
            "duplicated keys (source) are provided for ClientMetadata"
        );
    }

    #[test]
    fn sdk_error_exposes_source() {
        let err = SdkError::DispatchFailure(ConnectorError::timeout("took too long"));
        assert_eq!(err.to_string(), "dispatch failure");
        let source = err.source().expect("dispatch failures carry a source");
        assert_eq!(source.to_string(), "timeout");
        assert!(err.as_service_error().is_none());
        assert!(err.raw_response().is_none());
    }
}
