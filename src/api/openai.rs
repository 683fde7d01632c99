//! OpenAI Chat Completions API client implementation.
//!
//! Works against any endpoint that speaks the OpenAI chat-completion shape.
//! See: <https://platform.openai.com/docs/api-reference/chat>

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::client::{Client, ClientError};
use crate::http::{build_http_client, RequestBuilderExt, ResponseExt};
use crate::model::{ChatRequest, Completion};
use crate::options::TransportOptions;

/// Client for OpenAI-compatible Chat Completions APIs.
///
/// `base_url` is expected to already contain the API version segment
/// (`https://api.openai.com/v1`), requests go to `{base_url}/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClient {
    api_key: String,
    base_url: String,
    transport_options: TransportOptions,
}

impl OpenAiCompatibleClient {
    /// Create a new client.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            transport_options: TransportOptions::default(),
        }
    }

    pub fn with_transport_options(mut self, transport_options: TransportOptions) -> Self {
        self.transport_options = transport_options;
        self
    }

    pub fn transport_options(&self) -> &TransportOptions {
        &self.transport_options
    }

    /// Full URL of the chat-completion route.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Handle error responses.
    fn handle_error_response(status: StatusCode, body: &str) -> ClientError {
        let message = match serde_json::from_str::<ChatErrorResponse>(body) {
            Ok(error_resp) => error_resp.error.message,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl Client for OpenAiCompatibleClient {
    async fn request(&self, request: ChatRequest) -> Result<Completion, ClientError> {
        let url = self.completions_url();
        let http_client = build_http_client(&self.transport_options)?;

        let response = http_client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json_logged(&request)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text_logged().await.unwrap_or_default();
            return Err(Self::handle_error_response(status, &body));
        }

        let chat_response: ChatResponse = response.json_logged().await?;
        Ok(chat_response.into())
    }
}

impl From<ChatResponse> for Completion {
    fn from(chat_resp: ChatResponse) -> Self {
        Completion {
            text: chat_resp
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message)
                .and_then(|message| message.content),
        }
    }
}

// --- Chat Completions API Types ---

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatErrorResponse {
    error: ChatError,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatError {
    message: String,
}
