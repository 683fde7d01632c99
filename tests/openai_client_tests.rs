mod common;

use std::time::Duration;

use any_chat_completions_mcp::{
    ChatRequest, Client, ClientError, OpenAiCompatibleClient, TransportOptions,
};
use common::{refused_base_url, CannedServer};

#[tokio::test]
async fn test_request_shape_and_reply() {
    let server = CannedServer::start(
        200,
        r#"{"id":"chatcmpl-1","object":"chat.completion","choices":[{"index":0,"message":{"role":"assistant","content":"hello!"},"finish_reason":"stop"}]}"#,
    )
    .await;
    let client = OpenAiCompatibleClient::new(server.base_url.clone(), "secret-key");

    let completion = client
        .request(ChatRequest::single_user("gpt-4", "hi"))
        .await
        .unwrap();
    assert_eq!(completion.text.as_deref(), Some("hello!"));

    let captured = server.captured();
    assert_eq!(captured.len(), 1);
    assert!(captured[0].head.starts_with("POST /v1/chat/completions HTTP/1.1"));
    assert!(captured[0].has_header("authorization", "Bearer secret-key"));
    assert!(captured[0].has_header("content-type", "application/json"));

    let body: serde_json::Value = serde_json::from_str(&captured[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "model": "gpt-4",
            "messages": [{"role": "user", "content": "hi"}]
        })
    );
}

#[tokio::test]
async fn test_extra_headers_are_sent() {
    let server = CannedServer::start(200, r#"{"choices":[]}"#).await;
    let client = OpenAiCompatibleClient::new(server.base_url.clone(), "k").with_transport_options(
        TransportOptions::new()
            .with_timeout(Duration::from_secs(30))
            .with_header("X-Title", "any-chat"),
    );

    let completion = client
        .request(ChatRequest::single_user("gpt-4", "hi"))
        .await
        .unwrap();

    assert_eq!(completion.text, None);
    assert!(server.captured()[0].has_header("x-title", "any-chat"));
}

#[tokio::test]
async fn test_api_error_carries_status_and_message() {
    let server = CannedServer::start(
        404,
        r#"{"error":{"message":"The model `gpt-9` does not exist","type":"invalid_request_error","code":"model_not_found"}}"#,
    )
    .await;
    let client = OpenAiCompatibleClient::new(server.base_url.clone(), "k");

    let err = client
        .request(ChatRequest::single_user("gpt-9", "hi"))
        .await
        .unwrap_err();

    assert_eq!(err.api(), Some((404, "The model `gpt-9` does not exist")));
}

#[tokio::test]
async fn test_malformed_success_body_is_unclassified() {
    let server = CannedServer::start(200, "not json").await;
    let client = OpenAiCompatibleClient::new(server.base_url.clone(), "k");

    let err = client
        .request(ChatRequest::single_user("gpt-4", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
    assert_eq!(err.api(), None);
}

#[tokio::test]
async fn test_connection_refused_is_unclassified() {
    let client = OpenAiCompatibleClient::new(refused_base_url().await, "k");

    let err = client
        .request(ChatRequest::single_user("gpt-4", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(err.api(), None);
}
