//! Error types for replkit-remote

use thiserror::Error;

/// Result type alias using replkit-remote's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Remote API error types
#[derive(Error, Debug)]
pub enum Error {
    /// No token was configured
    #[error("No API token configured. Pass --token or set REPLIT_TOKEN")]
    MissingToken,

    /// Token rejected by the API
    #[error("Authentication failed (status {status}). Check that the token is valid")]
    Unauthorized { status: u16 },

    /// Non-success HTTP status
    #[error("API request failed (status {status}): {body}")]
    Api { status: u16, body: String },

    /// GraphQL-level error or user error in the payload
    #[error("API returned an error: {message}")]
    Graphql { message: String },

    /// Response did not have the expected shape
    #[error("Unexpected API response: {message}")]
    UnexpectedResponse { message: String },

    /// Transport error
    #[error("HTTP error")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create an API status error
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a GraphQL error
    pub fn graphql(message: impl Into<String>) -> Self {
        Self::Graphql {
            message: message.into(),
        }
    }

    /// Create an unexpected response error
    pub fn unexpected_response(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            message: message.into(),
        }
    }
}
