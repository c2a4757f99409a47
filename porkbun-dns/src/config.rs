//! Client configuration
//!
//! A [`ClientConfig`] is assembled once through [`ClientBuilder`] and never
//! changes afterwards. Setters apply left to right, so when the same setter is
//! called twice the last value wins. Setters that can reject their input
//! validate immediately; the first rejection is reported by
//! [`ClientBuilder::build`].

use std::fmt;
use std::sync::Arc;

use reqwest::Url;

use crate::client::PorkbunClient;
use crate::error::{CredentialKey, PorkbunError, Result};
use crate::http_client::{HttpTransport, ReqwestTransport};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "PORKBUN_API_KEY";
/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "PORKBUN_SECRET_KEY";
/// Environment variable overriding the API host.
pub const BASE_URL_ENV: &str = "PORKBUN_BASE_URL";
/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.porkbun.com";

/// Porkbun API key pair.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Read both keys from [`API_KEY_ENV`] and [`SECRET_KEY_ENV`]; unset means empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup(API_KEY_ENV).unwrap_or_default(),
            secret_key: lookup(SECRET_KEY_ENV).unwrap_or_default(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Both keys must be non-empty. The api key is checked first.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(PorkbunError::MissingCredential {
                key: CredentialKey::ApiKey,
            });
        }
        if self.secret_key.is_empty() {
            return Err(PorkbunError::MissingCredential {
                key: CredentialKey::SecretKey,
            });
        }
        Ok(())
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "<empty>" } else { "<redacted>" }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &redacted(&self.api_key))
            .field("secret_key", &redacted(&self.secret_key))
            .finish()
    }
}

/// Immutable settings of a [`PorkbunClient`].
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    credentials: Credentials,
    transport: Arc<dyn HttpTransport>,
}

impl ClientConfig {
    /// API host without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// Chained builder for [`PorkbunClient`].
///
/// ```rust,no_run
/// use porkbun_dns::ClientBuilder;
///
/// let client = ClientBuilder::from_env()
///     .api_key("pk1_override")
///     .build()?;
/// # Ok::<(), porkbun_dns::PorkbunError>(())
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    api_key: String,
    secret_key: String,
    base_url: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    error: Option<PorkbunError>,
}

impl ClientBuilder {
    /// Empty builder: no credentials, production host, default transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from the process environment.
    ///
    /// Call this once at startup and pass the built client down.
    pub fn from_env() -> Self {
        Self::seeded(Credentials::from_env(), std::env::var(BASE_URL_ENV).ok())
    }

    /// Builder seeded from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::seeded(Credentials::from_lookup(&lookup), lookup(BASE_URL_ENV))
    }

    fn seeded(credentials: Credentials, base_url: Option<String>) -> Self {
        let builder = Self::new().credentials(credentials);
        match base_url.filter(|url| !url.is_empty()) {
            Some(url) => builder.base_url(url),
            None => builder,
        }
    }

    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    #[must_use]
    pub fn secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = key.into();
        self
    }

    #[must_use]
    pub fn credentials(self, credentials: Credentials) -> Self {
        let Credentials {
            api_key,
            secret_key,
        } = credentials;
        self.api_key(api_key).secret_key(secret_key)
    }

    /// Override the API host, e.g. to point at a test server.
    ///
    /// Must be an absolute `http` or `https` URL.
    #[must_use]
    pub fn base_url(mut self, url: impl AsRef<str>) -> Self {
        let url = url.as_ref();
        match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                self.base_url = Some(url.trim_end_matches('/').to_string());
            }
            Ok(parsed) => self.reject(
                "base_url",
                format!("unsupported scheme {:?} in {url:?}", parsed.scheme()),
            ),
            Err(e) => self.reject("base_url", format!("{url:?}: {e}")),
        }
        self
    }

    /// Use a custom transport.
    #[must_use]
    pub fn transport(self, transport: impl HttpTransport + 'static) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    /// Use a transport that is shared with other clients.
    #[must_use]
    pub fn shared_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Send through a preconfigured `reqwest` client (custom timeouts, proxies...).
    #[must_use]
    pub fn http_client(self, client: reqwest::Client) -> Self {
        self.transport(ReqwestTransport::with_client(client))
    }

    fn reject(&mut self, field: &'static str, detail: String) {
        if self.error.is_none() {
            self.error = Some(PorkbunError::InvalidConfig { field, detail });
        }
    }

    /// Finish the configuration.
    ///
    /// Empty credentials are accepted here; they are reported when a request
    /// is made.
    pub fn build_config(self) -> Result<ClientConfig> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };
        Ok(ClientConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            credentials: Credentials::new(self.api_key, self.secret_key),
            transport,
        })
    }

    pub fn build(self) -> Result<PorkbunClient> {
        self.build_config().map(PorkbunClient::new)
    }
}
