/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Pagination over operations whose results are split into pages.

use crate::client::Client;
use crate::error::SdkError;
use crate::operation::PaginatedOperation;
use std::fmt;

/// Sends one request per page, following the continuation token of each response.
///
/// Pagination stops after the first error, or once a response carries no token, an empty
/// token, or the same token that was just sent.
pub struct Paginator<O: PaginatedOperation> {
    client: Client,
    input: O::Input,
    sent_token: Option<String>,
    done: bool,
}

impl<O: PaginatedOperation> fmt::Debug for Paginator<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("operation", &O::NAME)
            .field("sent_token", &self.sent_token)
            .field("done", &self.done)
            .finish()
    }
}

impl<O: PaginatedOperation> Paginator<O> {
    pub(crate) fn new(client: Client, input: O::Input) -> Self {
        let sent_token = O::input_token(&input).map(str::to_owned);
        Self {
            client,
            input,
            sent_token,
            done: false,
        }
    }

    /// Fetches the next page, or returns `None` when there are no more pages.
    pub async fn next_page(&mut self) -> Option<Result<O::Output, SdkError>> {
        if self.done {
            return None;
        }
        let output = match self.client.send::<O>(self.input.clone()).await {
            Ok(output) => output,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };
        match O::next_token(&output) {
            Some(token) if !token.is_empty() && self.sent_token.as_deref() != Some(token) => {
                let token = token.to_owned();
                O::set_next_token(&mut self.input, Some(token.clone()));
                self.sent_token = Some(token);
            }
            token => {
                tracing::trace!(operation = O::NAME, token = ?token, "no more pages");
                self.done = true;
            }
        }
        Some(Ok(output))
    }

    /// Fetches every remaining page.
    pub async fn try_collect(mut self) -> Result<Vec<O::Output>, SdkError> {
        let mut pages = Vec::new();
        while let Some(page) = self.next_page().await {
            pages.push(page?);
        }
        Ok(pages)
    }
}

#[cfg(test)]
mod test {
    use crate::config::{Config, Region};
    use crate::connector::OperationResponse;
    use crate::error::ConnectorError;
    use crate::operation::list_groups::ListGroupsInput;
    use crate::operation::list_users::{ListUsers, ListUsersInput};
    use crate::test_util::ReplayConnector;
    use crate::Client;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client(connector: ReplayConnector) -> Client {
        Client::from_conf(
            Config::builder()
                .region(Region::from_static("us-east-1"))
                .connector(connector)
                .build(),
        )
    }

    fn users_page(names: &[&str], token: Option<&str>) -> OperationResponse {
        let users: Vec<_> = names.iter().map(|n| json!({ "Username": n })).collect();
        let mut body = json!({ "Users": users });
        if let Some(token) = token {
            body["PaginationToken"] = json!(token);
        }
        OperationResponse::new(200, body)
    }

    fn list_users_input() -> ListUsersInput {
        ListUsersInput::builder()
            .user_pool_id("us-east-1_Example")
            .limit(2)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn follows_tokens_until_absent() {
        let connector = ReplayConnector::new([
            users_page(&["a", "b"], Some("t1")),
            users_page(&["c"], None),
        ]);
        let pages = client(connector.clone())
            .list_users_paginator(list_users_input())
            .try_collect()
            .await
            .unwrap();
        let names: Vec<_> = pages
            .iter()
            .flat_map(|page| page.users())
            .filter_map(|user| user.username())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        let bodies: Vec<_> = connector
            .requests()
            .iter()
            .map(|r| r.body().clone())
            .collect();
        assert_eq!(
            bodies,
            vec![
                json!({ "UserPoolId": "us-east-1_Example", "Limit": 2 }),
                json!({ "UserPoolId": "us-east-1_Example", "Limit": 2, "PaginationToken": "t1" }),
            ]
        );
    }

    #[tokio::test]
    async fn stops_on_repeated_or_empty_token() {
        let connector = ReplayConnector::new([
            users_page(&["a"], Some("t1")),
            users_page(&["b"], Some("t1")),
            users_page(&["never"], None),
        ]);
        let pages = client(connector.clone())
            .paginate::<ListUsers>(list_users_input())
            .try_collect()
            .await
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(connector.requests().len(), 2);

        let connector = ReplayConnector::new([users_page(&["a"], Some(""))]);
        let pages = client(connector)
            .paginate::<ListUsers>(list_users_input())
            .try_collect()
            .await
            .unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[tokio::test]
    async fn starting_token_counts_as_sent() {
        let connector = ReplayConnector::new([
            users_page(&["c"], Some("t1")),
            users_page(&["never"], None),
        ]);
        let mut input = list_users_input();
        input.pagination_token = Some("t1".to_string());
        let pages = client(connector.clone())
            .list_users_paginator(input)
            .try_collect()
            .await
            .unwrap();
        assert_eq!(pages.len(), 1);
        let bodies: Vec<_> = connector
            .requests()
            .iter()
            .map(|r| r.body().clone())
            .collect();
        assert_eq!(
            bodies,
            vec![json!({ "UserPoolId": "us-east-1_Example", "Limit": 2, "PaginationToken": "t1" })]
        );
    }

    #[tokio::test]
    async fn stops_after_an_error() {
        let connector = ReplayConnector::with_results([
            Ok(OperationResponse::new(
                200,
                json!({ "Groups": [{ "GroupName": "admins" }], "NextToken": "n1" }),
            )),
            Err(ConnectorError::io("connection reset")),
        ]);
        let input = ListGroupsInput::builder()
            .user_pool_id("us-east-1_Example")
            .build()
            .unwrap();
        let mut paginator = client(connector).list_groups_paginator(input);
        let first = paginator.next_page().await.unwrap().unwrap();
        assert_eq!(first.groups()[0].group_name(), Some("admins"));
        assert!(paginator.next_page().await.unwrap().is_err());
        assert!(paginator.next_page().await.is_none());
    }
}
