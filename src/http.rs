//! HTTP plumbing shared by the API clients.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};

use crate::client::ClientError;
use crate::options::TransportOptions;

/// Build a reqwest client from transport options.
///
/// Extra headers become default headers of the client. An unusable proxy URL
/// or header is a configuration error rather than being skipped.
pub fn build_http_client(options: &TransportOptions) -> Result<Client, ClientError> {
    let mut builder = Client::builder();

    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(proxy_url) = &options.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| ClientError::Config(format!("invalid proxy {}: {}", proxy_url, e)))?;
        builder = builder.proxy(proxy);
    }

    if !options.headers.is_empty() {
        builder = builder.default_headers(header_map(options)?);
    }

    Ok(builder.build()?)
}

fn header_map(options: &TransportOptions) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::with_capacity(options.headers.len());
    for (key, value) in &options.headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| ClientError::Config(format!("invalid header name {}: {}", key, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::Config(format!("invalid value for header {}: {}", key, e)))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Extension trait for RequestBuilder that logs the request body.
pub trait RequestBuilderExt {
    /// Set JSON request body and log it at debug level.
    fn json_logged<T: serde::Serialize + ?Sized>(self, json: &T) -> Self;
}

impl RequestBuilderExt for RequestBuilder {
    fn json_logged<T: serde::Serialize + ?Sized>(self, json: &T) -> Self {
        if let Ok(body) = serde_json::to_string_pretty(json) {
            tracing::debug!("API request body ({} bytes):\n{}", body.len(), body);
        }

        self.json(json)
    }
}

/// Extension trait for Response that logs the response body.
#[async_trait::async_trait]
pub trait ResponseExt {
    /// Read the body as text and log it. Consumes the response.
    async fn text_logged(self) -> Result<String, reqwest::Error>;

    /// Parse the body as JSON and log it. Consumes the response.
    async fn json_logged<T: serde::de::DeserializeOwned>(self) -> Result<T, ClientError>;
}

#[async_trait::async_trait]
impl ResponseExt for reqwest::Response {
    async fn text_logged(self) -> Result<String, reqwest::Error> {
        let status = self.status();
        let text = self.text().await?;
        tracing::debug!("API response {} ({} bytes):\n{}", status, text.len(), text);
        Ok(text)
    }

    async fn json_logged<T: serde::de::DeserializeOwned>(self) -> Result<T, ClientError> {
        let status = self.status();
        let bytes = self.bytes().await?;

        if let Ok(text) = std::str::from_utf8(&bytes) {
            tracing::debug!("API response {} ({} bytes):\n{}", status, text.len(), text);
        }

        serde_json::from_slice(&bytes).map_err(ClientError::from)
    }
}
