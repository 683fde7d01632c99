use std::process::ExitCode;

use any_chat_completions_mcp::{ChatServer, ChatTool, Config, OpenAiCompatibleClient};
use rmcp::{transport::stdio, ServiceExt};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries MCP frames, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("loaded environment from {}", path.display());
    }

    let config = Config::from_env()?;
    let client = OpenAiCompatibleClient::new(config.base_url.clone(), config.api_key.clone());
    let tool = ChatTool::new(config, client);
    info!("serving tool {} over stdio", tool.name());

    let service = ChatServer::new(tool).serve(stdio()).await?;
    let reason = service.waiting().await?;
    info!("server stopped: {:?}", reason);
    Ok(())
}
