//! # any-chat-completions-mcp
//!
//! An MCP server that lets an MCP client chat with any model served behind an
//! OpenAI-compatible chat-completion API.
//!
//! The server advertises exactly one tool, `chat-with-{slug}`, whose `content`
//! argument is sent upstream as a single user message. The reply comes back as
//! one text content block.
//!
//! ## Architecture
//!
//! 1. **[`Config`]** is loaded once from the environment and never changes.
//! 2. **[`Client`]** sends a [`ChatRequest`] to the chat endpoint
//!    ([`OpenAiCompatibleClient`] over HTTP).
//! 3. **[`ChatTool`]** validates a tool call, drives the client and maps
//!    API failures onto actionable [`ToolError`]s.
//! 4. **[`ChatServer`]** binds a [`ToolService`] to the rmcp `ServerHandler`.
//!
//! ## Example
//! ```no_run
//! use any_chat_completions_mcp::{ChatServer, ChatTool, Config, OpenAiCompatibleClient};
//! use rmcp::{transport::stdio, ServiceExt};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = OpenAiCompatibleClient::new(config.base_url.clone(), config.api_key.clone());
//!     let server = ChatServer::new(ChatTool::new(config, client));
//!
//!     let service = server.serve(stdio()).await?;
//!     service.waiting().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod http;
pub mod mcp;
pub mod model;
pub mod options;
pub mod tools;

pub use api::openai::OpenAiCompatibleClient;
pub use client::{Client, ClientError};
pub use config::{Config, ConfigError};
pub use mcp::ChatServer;
pub use model::{ChatRequest, Completion, Message, Role};
pub use options::TransportOptions;
pub use tools::{ChatTool, ToolError, ToolService, KNOWN_MODELS};

// Re-export rmcp for convenience
pub use rmcp;
