//! The chat tool: maps an MCP tool call onto one chat-completion request.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Content, JsonObject};
pub use rmcp::model::Tool;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::client::{Client, ClientError};
use crate::config::Config;
use crate::model::ChatRequest;

/// Model names commonly served by OpenAI-compatible providers.
///
/// Only used for an advisory warning; other models are still sent upstream.
pub const KNOWN_MODELS: &[&str] = &[
    "gpt-3.5-turbo",
    "gpt-4-turbo-preview",
    "gpt-4",
    "gpt-4-0125-preview",
    "claude-3-opus-20240229",
    "claude-3-sonnet-20240229",
    "claude-2.1",
    "gpt-4o-mini",
];

/// Error type for tool execution.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool")]
    UnknownTool,

    #[error("Content is required")]
    MissingContent,

    #[error(
        "Model '{model}' not found or not accessible. Check:\n\
         1. Your API key has access to this model\n\
         2. The model name is correct for your provider\n\
         3. Your provider supports this model\n\
         Common models: {}",
        KNOWN_MODELS.join(", ")
    )]
    ModelNotFound { model: String },

    #[error(
        "API rate limit exceeded. Check:\n\
         1. Your current API quota and billing status\n\
         2. Implement rate limiting in your application\n\
         3. Consider using a different model or provider"
    )]
    RateLimited,

    #[error("API Error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error(transparent)]
    Unclassified(ClientError),
}

impl ToolError {
    /// Whether the caller sent a bad request, as opposed to an upstream failure.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, ToolError::UnknownTool | ToolError::MissingContent)
    }
}

/// Trait for the tool set a protocol server exposes.
#[async_trait]
pub trait ToolService: Send + Sync {
    /// List available tools.
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute a tool.
    async fn call_tool(
        &self,
        name: &str,
        args: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError>;
}

/// Single tool that forwards its `content` argument to a chat-completion client.
pub struct ChatTool<C> {
    config: Config,
    client: C,
    tool_name: String,
}

impl<C: Client> ChatTool<C> {
    pub fn new(config: Config, client: C) -> Self {
        let tool_name = config.tool_name();
        Self {
            config,
            client,
            tool_name,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Name of the advertised tool, `chat-with-{slug}`.
    pub fn name(&self) -> &str {
        &self.tool_name
    }

    /// Descriptor of the advertised tool. Depends only on the configuration.
    pub fn describe(&self) -> Tool {
        let name = &self.config.name;
        let input_schema = JsonObject::from_iter([
            ("type".to_string(), json!("object")),
            (
                "properties".to_string(),
                json!({
                    "content": {
                        "type": "string",
                        "description": format!("The content of the chat to send to {}", name),
                    }
                }),
            ),
            ("required".to_string(), json!(["content"])),
        ]);

        Tool::new(
            self.tool_name.clone(),
            format!("Text chat with {}", name),
            Arc::new(input_schema),
        )
    }

    /// Run one tool call.
    ///
    /// The tool name and `content` argument are validated before any request
    /// leaves the process.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        if name != self.tool_name {
            return Err(ToolError::UnknownTool);
        }

        let content = arguments
            .and_then(|args| args.get("content"))
            .and_then(coerce_content)
            .filter(|content| !content.is_empty())
            .ok_or(ToolError::MissingContent)?;

        let model = &self.config.model;
        if !KNOWN_MODELS.contains(&model.as_str()) {
            warn!(
                "Model {} is not in list of common models. This may still work if your provider supports it.",
                model
            );
        }

        debug!("Sending {} bytes to model {}", content.len(), model);
        let request = ChatRequest::single_user(model.clone(), content);

        match self.client.request(request).await {
            Ok(completion) => Ok(CallToolResult::success(vec![Content::text(
                completion.text.unwrap_or_default(),
            )])),
            Err(err) => Err(self.classify(err)),
        }
    }

    fn classify(&self, err: ClientError) -> ToolError {
        match err {
            ClientError::Api { status: 404, .. } => ToolError::ModelNotFound {
                model: self.config.model.clone(),
            },
            ClientError::Api { status: 429, .. } => ToolError::RateLimited,
            ClientError::Api { status, message } => ToolError::Upstream { status, message },
            other => ToolError::Unclassified(other),
        }
    }
}

#[async_trait]
impl<C: Client> ToolService for ChatTool<C> {
    fn list_tools(&self) -> Vec<Tool> {
        vec![self.describe()]
    }

    async fn call_tool(
        &self,
        name: &str,
        args: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        self.invoke(name, args.as_ref()).await
    }
}

/// Render an argument value as the text to send. `null` counts as absent.
fn coerce_content(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
