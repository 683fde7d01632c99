//! Core client trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{ChatRequest, Completion};

/// Errors that can occur during client operations.
///
/// `Api` is the only recognized shape: the endpoint answered with a non-success
/// status. Every other variant is an opaque failure whose message is passed
/// through untouched.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{status} {message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Status and message when this is a recognized API error.
    pub fn api(&self) -> Option<(u16, &str)> {
        match self {
            ClientError::Api { status, message } => Some((*status, message.as_str())),
            _ => None,
        }
    }
}

/// Chat-completion client.
#[async_trait]
pub trait Client: Send + Sync {
    /// Send a request and wait for the full completion.
    async fn request(&self, request: ChatRequest) -> Result<Completion, ClientError>;
}

