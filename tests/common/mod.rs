#![allow(dead_code)]

use any_chat_completions_mcp::{ChatRequest, Client, ClientError, Completion, Config};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Configuration used across the tests, advertising `chat-with-my-bot`.
pub fn test_config() -> Config {
    Config::new("https://api.example.com", "k", "gpt-4", "My Bot")
}

/// Chat client that replays queued results and records every request.
#[derive(Clone)]
pub struct MockClient {
    responses: Arc<Mutex<Vec<Result<Completion, ClientError>>>>,
    pub requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockClient {
    pub fn new(responses: Vec<Result<Completion, ClientError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Client for MockClient {
    async fn request(&self, request: ChatRequest) -> Result<Completion, ClientError> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Err(ClientError::Config("No more mock responses".to_string()))
        }
    }
}

/// A request captured by [`CannedServer`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Request line and headers, as received.
    pub head: String,
    pub body: String,
}

impl CapturedRequest {
    pub fn has_header(&self, name: &str, value: &str) -> bool {
        self.head.lines().any(|line| match line.split_once(':') {
            Some((k, v)) => k.trim().eq_ignore_ascii_case(name) && v.trim() == value,
            None => false,
        })
    }
}

/// Local HTTP/1.1 server answering every request with the same status and body.
pub struct CannedServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl CannedServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let captured = requests.clone();
        let body = body.to_string();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let _ = answer(stream, status, &body, &captured).await;
            }
        });

        Self {
            base_url: format!("http://{}/v1", addr),
            requests,
        }
    }

    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Base URL of a local port nothing listens on.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1", addr)
}

async fn answer(
    mut stream: TcpStream,
    status: u16,
    body: &str,
    captured: &Mutex<Vec<CapturedRequest>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (k, v) = line.split_once(':')?;
            if k.trim().eq_ignore_ascii_case("content-length") {
                v.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let end = buf.len().min(header_end + content_length);
    captured.lock().unwrap().push(CapturedRequest {
        head,
        body: String::from_utf8_lossy(&buf[header_end..end]).to_string(),
    });

    let response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
