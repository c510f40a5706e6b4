//! GraphQL client for remote Repl operations

use crate::error::{Error, Result};
use crate::types::{
    CreateReplData, CreateReplRequest, CurrentUser, CurrentUserData, GraphqlResponse, RemoteRepl,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info};

const CURRENT_USER_QUERY: &str = r#"
query CurrentUser {
  currentUser {
    username
    displayName
  }
}
"#;

const CREATE_REPL_MUTATION: &str = r#"
mutation CreateRepl($input: CreateReplInput!) {
  createRepl(input: $input) {
    ... on Repl { id url }
    ... on UserError { message }
  }
}
"#;

/// Remote side of scaffolding: verify credentials and create Repls
#[async_trait]
pub trait RemoteProvisioner: Send + Sync {
    /// Return the user the configured token belongs to
    async fn current_user(&self) -> Result<CurrentUser>;

    /// Create a Repl matching a local configuration
    async fn create_repl(&self, request: &CreateReplRequest) -> Result<RemoteRepl>;
}

/// HTTP implementation of [`RemoteProvisioner`]
pub struct ReplitClient {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl ReplitClient {
    /// Create a client for the given GraphQL endpoint
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("replkit/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            token: None,
        })
    }

    /// Set the API token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn headers(&self) -> Result<HeaderMap> {
        let token = self.token.as_deref().ok_or(Error::MissingToken)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::unexpected_response("token contains invalid header characters"))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("x-requested-with", HeaderValue::from_static("replit"));
        Ok(headers)
    }

    /// Send a GraphQL operation and unwrap the `data` field
    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let headers = self.headers()?;
        debug!("POST {}", self.api_url);

        let response = self
            .client
            .post(&self.api_url)
            .headers(headers)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Unauthorized {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), body));
        }

        let envelope: GraphqlResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::unexpected_response(e.to_string()))?;

        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::graphql(message));
        }

        envelope
            .data
            .ok_or_else(|| Error::unexpected_response("response has no data"))
    }
}

#[async_trait]
impl RemoteProvisioner for ReplitClient {
    async fn current_user(&self) -> Result<CurrentUser> {
        let data: CurrentUserData = self.execute(CURRENT_USER_QUERY, json!({})).await?;
        data.current_user
            .ok_or_else(|| Error::unexpected_response("currentUser is null"))
    }

    async fn create_repl(&self, request: &CreateReplRequest) -> Result<RemoteRepl> {
        let data: CreateReplData = self
            .execute(CREATE_REPL_MUTATION, json!({ "input": request }))
            .await?;

        let payload = data.create_repl;
        if let Some(message) = payload.message {
            return Err(Error::graphql(message));
        }

        match (payload.id, payload.url) {
            (Some(id), Some(url)) => {
                info!("Created remote Repl {} at {}", id, url);
                Ok(RemoteRepl { id, url })
            }
            _ => Err(Error::unexpected_response(
                "createRepl returned neither a Repl nor an error",
            )),
        }
    }
}
