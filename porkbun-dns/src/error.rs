use std::borrow::Cow;

use serde::Deserialize;
use thiserror::Error;

use crate::config::{API_KEY_ENV, SECRET_KEY_ENV};

/// Identifies which of the two Porkbun credentials is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    /// The public API key (`pk1_...`).
    ApiKey,
    /// The secret API key (`sk1_...`).
    SecretKey,
}

impl CredentialKey {
    /// Environment variable the credential is conventionally read from.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::ApiKey => API_KEY_ENV,
            Self::SecretKey => SECRET_KEY_ENV,
        }
    }

    /// Short human label used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ApiKey => "api",
            Self::SecretKey => "secret",
        }
    }
}

/// A non-2xx response from the Porkbun API.
///
/// The status code and body are kept verbatim. Callers decide whether a
/// status is worth retrying; this crate never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API error {code}: {}", String::from_utf8_lossy(.body))]
pub struct ApiError {
    /// HTTP status code.
    pub code: u16,
    /// Raw response body, byte for byte.
    pub body: Vec<u8>,
}

/// Porkbun error envelope: `{"status":"ERROR","message":"..."}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

impl ApiError {
    pub fn new(code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    /// The body as text; invalid UTF-8 sequences are shown as U+FFFD.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// The `message` field of the Porkbun error envelope, if the body is one.
    pub fn message(&self) -> Option<String> {
        serde_json::from_slice::<ErrorEnvelope>(&self.body)
            .ok()
            .and_then(|envelope| envelope.message)
    }

    /// Whether the status usually indicates a transient condition (429 or 5xx).
    ///
    /// Only a hint for callers.
    pub fn is_retryable(&self) -> bool {
        self.code == 429 || (500..=599).contains(&self.code)
    }
}

/// Failure reported by an [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request did not complete in time.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection, DNS or TLS failure.
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Unified error type for every operation in this crate.
#[derive(Debug, Error)]
pub enum PorkbunError {
    /// A credential is empty. Raised before any I/O.
    #[error(
        "missing porkbun \"{}\" key. try setting \"{}\" in the environment",
        .key.label(),
        .key.env_var()
    )]
    MissingCredential { key: CredentialKey },

    /// A builder setter received an unusable value.
    #[error("invalid configuration for {field}: {detail}")]
    InvalidConfig { field: &'static str, detail: String },

    /// The name has fewer than two dot-separated labels.
    #[error("invalid domain {domain:?}")]
    InvalidDomain { domain: String },

    /// A typed request could not be serialized.
    #[error("could not serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The outgoing body is not a JSON object, so credentials cannot be merged in.
    #[error("could not decode request body as a JSON object: {0}")]
    InvalidRequestBody(#[source] serde_json::Error),

    /// The underlying transport failed; `context` names the call site.
    #[error("{context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: TransportError,
    },

    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 2xx response did not have the expected shape.
    #[error("could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl PorkbunError {
    /// Prefix the context of a [`Transport`](Self::Transport) error.
    ///
    /// Other variants pass through untouched.
    #[must_use]
    pub fn with_context(self, outer: impl FnOnce() -> String) -> Self {
        match self {
            Self::Transport { context, source } => Self::Transport {
                context: format!("{}, {context}", outer()),
                source,
            },
            other => other,
        }
    }

    /// The API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether a caller-driven retry might succeed.
    ///
    /// Transport failures and retryable API statuses qualify; configuration,
    /// input and decoding errors never do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { source, .. } => !matches!(source, TransportError::Body(_)),
            Self::Api(err) => err.is_retryable(),
            _ => false,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PorkbunError>;
