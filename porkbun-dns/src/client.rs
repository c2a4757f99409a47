//! Credential-injecting client
//!
//! Porkbun authenticates every call through two fields in the JSON body
//! rather than through headers. [`PorkbunClient::execute`] adds them to each
//! outgoing request so the typed operations never deal with credentials.

use std::collections::BTreeMap;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::{Map, Value};

use crate::config::{ClientBuilder, ClientConfig, Credentials};
use crate::error::{PorkbunError, Result};
use crate::http_client::{HttpRequest, HttpResponse};
use crate::utils::log_sanitizer::sanitize_body;

/// Body field carrying the API key.
pub const API_KEY_FIELD: &str = "apiKey";
/// Body field carrying the secret key.
pub const SECRET_KEY_FIELD: &str = "secretKey";

/// Porkbun API client.
///
/// Immutable once built; share it behind an `Arc` for concurrent use.
#[derive(Debug, Clone)]
pub struct PorkbunClient {
    config: ClientConfig,
}

impl PorkbunClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Client configured from `PORKBUN_*` environment variables.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::from_env().build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an API path such as `/api/json/v3/ping`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    /// Send `request` with the stored credentials merged into its JSON body.
    ///
    /// Fails with [`PorkbunError::MissingCredential`] before touching the body
    /// if either key is empty, and with [`PorkbunError::InvalidRequestBody`] if
    /// the body is neither a JSON object nor `null`. The request is consumed in every case.
    /// Any status code is returned as-is.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            mut headers,
            body,
        } = request;

        self.config.credentials().validate()?;

        // `null` 与无请求体等价
        let original = match body {
            Some(bytes) => serde_json::from_slice::<Option<Map<String, Value>>>(&bytes)
                .map_err(PorkbunError::InvalidRequestBody)?
                .unwrap_or_default(),
            None => Map::new(),
        };

        let merged = inject_credentials(self.config.credentials(), original);
        let body = serde_json::to_vec(&merged).map_err(PorkbunError::Serialization)?;
        log::debug!(
            "[porkbun] Request Body: {}",
            sanitize_body(&String::from_utf8_lossy(&body))
        );

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let context = format!("{method} {url}");
        let request = HttpRequest {
            method,
            url,
            headers,
            body: Some(body),
        };

        self.config
            .transport()
            .send(request)
            .await
            .map_err(|source| PorkbunError::Transport { context, source })
    }
}

/// Merge credentials and caller fields into one object.
///
/// Credentials go in first, caller fields after, so a caller field named
/// `apiKey` or `secretKey` replaces the stored value. Keys come out sorted.
pub(crate) fn inject_credentials(
    credentials: &Credentials,
    original: Map<String, Value>,
) -> BTreeMap<String, Value> {
    let mut merged = BTreeMap::from([
        (
            API_KEY_FIELD.to_string(),
            Value::String(credentials.api_key().to_string()),
        ),
        (
            SECRET_KEY_FIELD.to_string(),
            Value::String(credentials.secret_key().to_string()),
        ),
    ]);
    merged.extend(original);
    merged
}
