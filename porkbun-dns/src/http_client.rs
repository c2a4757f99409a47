//! HTTP transport capability
//!
//! The client never talks to the network directly. Every request goes through
//! an [`HttpTransport`], which makes the network swappable: production code
//! uses [`ReqwestTransport`], tests inject fakes.
//!
//! # design principles
//! - **Buffered bodies** - requests and responses are small JSON documents, both are held in memory
//! - **No interpretation** - a transport reports status and body; classifying them is the caller's job
//! - **No retries** - timeouts and cancellation belong to the transport, retry policy to the caller

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};

use crate::error::{PorkbunError, Result, TransportError};
use crate::utils::log_sanitizer::truncate_for_log;

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// An outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Length of the body in bytes, zero when there is none.
    pub fn content_length(&self) -> usize {
        self.body.as_ref().map_or(0, Vec::len)
    }
}

/// A fully received response. The body is kept as the raw bytes received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Lossy UTF-8 view of the body.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can send an [`HttpRequest`] and hand back the [`HttpResponse`].
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the default connect/request timeouts.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| PorkbunError::InvalidConfig {
                field: "http_client",
                detail: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        log::debug!("[porkbun] {method} {url}");

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[porkbun] Response Status: {status}");

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?
            .to_vec();

        log::debug!(
            "[porkbun] Response Body: {}",
            truncate_for_log(&String::from_utf8_lossy(&body))
        );

        Ok(HttpResponse { status, body })
    }
}
