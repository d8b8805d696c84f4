/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The client that sends operations through a [`Connector`](crate::connector::Connector).

use crate::config::Config;
use crate::connector::{Connector, OperationRequest, OperationResponse};
use crate::error::{SdkError, ServiceError};
use crate::operation::{Operation, PaginatedOperation};
use serde::Deserialize;
use std::sync::Arc;
use tracing::Instrument;

mod operations;
pub mod paginator;

pub use paginator::Paginator;

#[derive(Debug)]
struct Handle {
    conf: Config,
}

/// Client for Amazon Cognito user pools.
///
/// Client for invoking operations on Amazon Cognito Identity Provider. Each operation on
/// Amazon Cognito Identity Provider is a method on this struct.
///
/// The client is cheap to clone. Clones share the same configuration and connector.
///
/// # Examples
/// ```rust,no_run
/// # async fn wrapper() -> Result<(), cognitoidentityprovider::error::SdkError> {
/// use cognitoidentityprovider::config::Builder;
/// use cognitoidentityprovider::operation::admin_get_user::AdminGetUserInput;
/// # #[derive(Debug)]
/// # struct MyConnector;
/// # impl cognitoidentityprovider::connector::Connector for MyConnector {
/// #     fn call(
/// #         &self,
/// #         _request: cognitoidentityprovider::connector::OperationRequest,
/// #     ) -> cognitoidentityprovider::connector::ConnectorFuture {
/// #         unimplemented!()
/// #     }
/// # }
///
/// let conf = Builder::from_env().connector(MyConnector).build();
/// let client = cognitoidentityprovider::Client::from_conf(conf);
/// let user = client
///     .admin_get_user(
///         AdminGetUserInput::builder()
///             .user_pool_id("us-east-1_Example")
///             .username("jane")
///             .build()
///             .expect("valid input"),
///     )
///     .await?;
/// println!("{:?}", user.user_status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    /// Creates a new client from the service [`Config`].
    pub fn from_conf(conf: Config) -> Self {
        Self {
            handle: Arc::new(Handle { conf }),
        }
    }

    /// Returns the client's configuration.
    pub fn config(&self) -> &Config {
        &self.handle.conf
    }

    /// Sends `input` as an `O` request and parses the response.
    pub async fn send<O: Operation>(&self, input: O::Input) -> Result<O::Output, SdkError> {
        let span = tracing::debug_span!(
            "send_operation",
            operation = O::NAME,
            region = tracing::field::Empty
        );
        self.send_inner::<O>(input).instrument(span).await
    }

    async fn send_inner<O: Operation>(&self, input: O::Input) -> Result<O::Output, SdkError> {
        let conf = &self.handle.conf;
        let region = conf.region().cloned().ok_or_else(|| {
            SdkError::ConstructionFailure("no region was configured for the client".into())
        })?;
        tracing::Span::current().record("region", tracing::field::display(&region));
        let connector = conf.connector().cloned().ok_or_else(|| {
            SdkError::ConstructionFailure("no connector was configured for the client".into())
        })?;

        tracing::trace!(input = %input, "marshalling input");
        let body = serde_json::to_value(&input)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        let request = OperationRequest::new(
            O::NAME,
            region,
            conf.endpoint_url().map(str::to_owned),
            body,
        );

        tracing::debug!("dispatching request");
        let response = connector
            .call(request)
            .await
            .map_err(SdkError::DispatchFailure)?;
        tracing::debug!(
            status = response.status(),
            request_id = ?response.request_id(),
            "received response"
        );

        if response.is_success() {
            parse_output::<O>(response)
        } else {
            Err(parse_error(response))
        }
    }

    /// Returns a [`Paginator`] over the pages of `O`, starting from `input`.
    pub fn paginate<O: PaginatedOperation>(&self, input: O::Input) -> Paginator<O> {
        Paginator::new(self.clone(), input)
    }
}

fn parse_output<O: Operation>(response: OperationResponse) -> Result<O::Output, SdkError> {
    let empty = serde_json::Value::Object(serde_json::Map::new());
    let body = match response.body() {
        serde_json::Value::Null => &empty,
        body => body,
    };
    match <O::Output as Deserialize>::deserialize(body) {
        Ok(output) => Ok(output),
        Err(err) => Err(SdkError::ResponseError {
            err: err.into(),
            raw: response,
        }),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    code: String,
    #[serde(default, alias = "Message")]
    message: Option<String>,
}

fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn parse_error(response: OperationResponse) -> SdkError {
    let body = match ErrorBody::deserialize(response.body()) {
        Ok(body) => body,
        Err(err) => {
            return SdkError::ResponseError {
                err: err.into(),
                raw: response,
            }
        }
    };
    let mut err = ServiceError::new(sanitize_error_code(&body.code));
    if let Some(message) = body.message {
        err = err.with_message(message);
    }
    if let Some(request_id) = response.request_id() {
        err = err.with_request_id(request_id);
    }
    tracing::debug!(code = %err.code(), "service returned an error");
    SdkError::ServiceError { err, raw: response }
}

#[cfg(test)]
mod test {
    use super::{sanitize_error_code, Client};
    use crate::config::{Config, Region};
    use crate::connector::OperationResponse;
    use crate::error::{ConnectorError, SdkError, ServiceErrorCode};
    use crate::operation::admin_get_user::AdminGetUserInput;
    use crate::operation::global_sign_out::GlobalSignOutInput;
    use crate::operation::sign_up::SignUpInput;
    use crate::test_util::{capture_request, ReplayConnector};
    use crate::types::{AttributeType, UserStatusType};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tracing_test::traced_test;

    fn client(connector: ReplayConnector) -> Client {
        Client::from_conf(
            Config::builder()
                .region(Region::from_static("us-east-1"))
                .connector(connector)
                .build(),
        )
    }

    fn get_user_input() -> AdminGetUserInput {
        AdminGetUserInput::builder()
            .user_pool_id("us-east-1_Example")
            .username("jane")
            .build()
            .unwrap()
    }

    #[test]
    fn error_codes_are_sanitized() {
        assert_eq!(
            sanitize_error_code("com.amazonaws.cognito#UserNotFoundException"),
            "UserNotFoundException"
        );
        assert_eq!(
            sanitize_error_code("UserNotFoundException:http://internal.amazon.com/"),
            "UserNotFoundException"
        );
        assert_eq!(sanitize_error_code("NotAuthorizedException"), "NotAuthorizedException");
    }

    #[tokio::test]
    async fn sends_marshalled_input_and_parses_output() {
        let connector = ReplayConnector::new([OperationResponse::new(
            200,
            json!({
                "Username": "jane",
                "UserAttributes": [{ "Name": "email", "Value": "jane@example.com" }],
                "UserStatus": "CONFIRMED",
                "Enabled": true,
                "UserCreateDate": 1600000000.0
            }),
        )]);
        let output = client(connector.clone())
            .admin_get_user(get_user_input())
            .await
            .unwrap();

        assert_eq!(output.username(), Some("jane"));
        assert_eq!(output.user_status(), Some(&UserStatusType::Confirmed));
        assert_eq!(output.enabled(), Some(true));
        assert_eq!(
            output.user_attributes(),
            &[AttributeType::builder()
                .name("email")
                .value("jane@example.com")
                .build()]
        );
        assert!(output.mfa_options.is_none());

        let requests = connector.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].operation(), "AdminGetUser");
        assert_eq!(requests[0].region(), &Region::from_static("us-east-1"));
        assert_eq!(requests[0].endpoint_url(), None);
        assert_eq!(
            requests[0].body(),
            &json!({ "UserPoolId": "us-east-1_Example", "Username": "jane" })
        );
    }

    #[tokio::test]
    async fn null_body_parses_as_empty_output() {
        let connector = ReplayConnector::new([OperationResponse::new(200, json!(null))]);
        let input = GlobalSignOutInput::builder()
            .access_token("token")
            .build()
            .unwrap();
        client(connector).global_sign_out(input).await.unwrap();
    }

    #[tokio::test]
    async fn endpoint_override_is_passed_to_the_connector() {
        let (connector, request) = capture_request(None);
        let client = Client::from_conf(
            Config::builder()
                .region(Region::from_static("eu-west-1"))
                .endpoint_url("http://localhost:9229")
                .connector(connector)
                .build(),
        );
        client.admin_get_user(get_user_input()).await.unwrap();
        let request = request.expect_request();
        assert_eq!(request.endpoint_url(), Some("http://localhost:9229"));
        assert_eq!(request.region(), &Region::from_static("eu-west-1"));
    }

    #[tokio::test]
    async fn missing_region_fails_before_dispatch() {
        let connector = ReplayConnector::new([]);
        let client = Client::from_conf(Config::builder().connector(connector.clone()).build());
        let err = client.admin_get_user(get_user_input()).await.unwrap_err();
        assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
        assert!(connector.requests().is_empty());
    }

    #[tokio::test]
    async fn missing_connector_fails_before_dispatch() {
        let client = Client::from_conf(
            Config::builder()
                .region(Region::from_static("us-east-1"))
                .build(),
        );
        let err = client.admin_get_user(get_user_input()).await.unwrap_err();
        assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn connector_errors_are_dispatch_failures() {
        let connector =
            ReplayConnector::with_results([Err(ConnectorError::timeout("read timed out"))]);
        let err = client(connector)
            .admin_get_user(get_user_input())
            .await
            .unwrap_err();
        match err {
            SdkError::DispatchFailure(err) => assert!(err.is_timeout()),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn error_responses_become_service_errors() {
        let connector = ReplayConnector::new([OperationResponse::new(
            400,
            json!({
                "__type": "com.amazonaws.cognito.identity.idp.model#UserNotFoundException",
                "message": "User does not exist."
            }),
        )
        .with_request_id("req-1")]);
        let err = client(connector)
            .admin_get_user(get_user_input())
            .await
            .unwrap_err();
        assert_eq!(err.raw_response().map(|raw| raw.status()), Some(400));
        let err = err.into_service_error().expect("service error");
        assert_eq!(err.code(), &ServiceErrorCode::UserNotFound);
        assert_eq!(err.message(), Some("User does not exist."));
        assert_eq!(err.request_id(), Some("req-1"));
    }

    #[tokio::test]
    async fn unknown_error_codes_are_kept() {
        let connector = ReplayConnector::new([OperationResponse::new(
            400,
            json!({ "__type": "SomethingNewException", "Message": "new" }),
        )]);
        let err = client(connector)
            .admin_get_user(get_user_input())
            .await
            .unwrap_err()
            .into_service_error()
            .expect("service error");
        assert_eq!(err.code().as_str(), "SomethingNewException");
        assert_eq!(err.message(), Some("new"));
    }

    #[tokio::test]
    async fn unparseable_responses_are_response_errors() {
        let connector = ReplayConnector::new([
            OperationResponse::new(500, json!("<html>bad gateway</html>")),
            OperationResponse::new(200, json!({ "UserStatus": 42 })),
        ]);
        let client = client(connector);
        let err = client.admin_get_user(get_user_input()).await.unwrap_err();
        assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
        let err = client.admin_get_user(get_user_input()).await.unwrap_err();
        assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
    }

    #[tokio::test]
    #[traced_test]
    async fn logs_never_contain_sensitive_members() {
        let connector = ReplayConnector::new([OperationResponse::new(
            200,
            json!({ "UserConfirmed": false, "UserSub": "1234" }),
        )]);
        let input = SignUpInput::builder()
            .client_id("client")
            .username("jane")
            .password("hunter2")
            .user_attributes(AttributeType::builder().name("email").value("jane@example.com").build())
            .build()
            .unwrap();
        let output = client(connector).sign_up(input).await.unwrap();
        assert_eq!(output.user_sub(), Some("1234"));

        assert!(logs_contain("send_operation"));
        assert!(logs_contain("SignUp"));
        assert!(logs_contain("status=200"));
        assert!(!logs_contain("hunter2"));
        assert!(!logs_contain("jane@example.com"));
    }
}
