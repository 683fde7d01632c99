//! MCP `ServerHandler` binding for a [`ToolService`].
//!
//! The server advertises tools, resources and prompts, but only tools are
//! backed by anything: the resource and prompt lists are always empty and
//! fetching one by name always fails.

use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorData, GetPromptRequestParam, GetPromptResult,
    Implementation, ListPromptsResult, ListResourcesResult, ListToolsResult,
    PaginatedRequestParam, ReadResourceRequestParam, ReadResourceResult, ServerCapabilities,
    ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use tracing::{debug, info};

use crate::tools::{ToolError, ToolService};

pub const SERVER_NAME: &str = "any-chat-completions-mcp";

impl From<ToolError> for ErrorData {
    fn from(err: ToolError) -> Self {
        if err.is_invalid_request() {
            ErrorData::invalid_params(err.to_string(), None)
        } else {
            ErrorData::internal_error(err.to_string(), None)
        }
    }
}

/// MCP server exposing the tools of a [`ToolService`] over any rmcp transport.
#[derive(Debug, Clone)]
pub struct ChatServer<S> {
    tools: S,
}

impl<S: ToolService> ChatServer<S> {
    pub fn new(tools: S) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &S {
        &self.tools
    }
}

impl<S: ToolService + 'static> ServerHandler for ChatServer<S> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(Vec::new()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        debug!("read_resource for {}", request.uri);
        Err(ErrorData::resource_not_found("Resource not found", None))
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tools.list_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        info!("call_tool {}", request.name);
        self.tools
            .call_tool(&request.name, request.arguments)
            .await
            .map_err(ErrorData::from)
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult::with_all_items(Vec::new()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        debug!("get_prompt for {}", request.name);
        Err(ErrorData::invalid_params("Unknown prompt", None))
    }
}
