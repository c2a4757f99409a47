//! # porkbun-dns
//!
//! A client for the [Porkbun](https://porkbun.com) JSON API (v3), limited to
//! DNS record creation and listing.
//!
//! Porkbun authenticates through an `apiKey`/`secretKey` pair sent inside every
//! JSON request body. [`PorkbunClient::execute`] merges that pair into each
//! outgoing body, so typed operations and ad-hoc requests never handle the
//! keys themselves.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use porkbun_dns::{parse_domain, ClientBuilder, CreateDnsRecordRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads PORKBUN_API_KEY / PORKBUN_SECRET_KEY once, at startup.
//!     let client = ClientBuilder::from_env().build()?;
//!
//!     let target = parse_domain("www.example.com")?;
//!     let request = CreateDnsRecordRequest::new(target.subdomain, "A", "192.0.2.1");
//!     let created = client.create_dns_record(&target.domain, &request).await?;
//!     println!("created record {}", created.id);
//!
//!     for record in client.list_dns_records(&target.domain).await?.records {
//!         println!("{} {} {}", record.name, record.record_type, record.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, PorkbunError>`](PorkbunError):
//!
//! - [`PorkbunError::MissingCredential`] — a key is empty; raised before any I/O
//! - [`PorkbunError::Transport`] — network failure, with call-site context
//! - [`PorkbunError::Api`] — non-2xx response; status code and raw body kept verbatim
//! - [`PorkbunError::Decode`] — a 2xx response had an unexpected shape
//!
//! Nothing is retried automatically. [`PorkbunError::is_retryable`] is a hint
//! for callers that implement their own policy.
//!
//! ## Testing
//!
//! Any [`HttpTransport`] can be injected with [`ClientBuilder::transport`],
//! and [`ClientBuilder::base_url`] points the client at a local server.

mod client;
mod config;
mod dns;
mod domain;
mod error;
mod http_client;
mod utils;

pub use client::{API_KEY_FIELD, PorkbunClient, SECRET_KEY_FIELD};
pub use config::{
    API_KEY_ENV, BASE_URL_ENV, ClientBuilder, ClientConfig, Credentials, DEFAULT_BASE_URL,
    SECRET_KEY_ENV,
};
pub use dns::{
    CreateDnsRecordRequest, CreateDnsRecordResponse, DEFAULT_TTL, DnsRecord,
    ListDnsRecordsResponse, PingResponse,
};
pub use domain::{ParsedDomain, parse_domain};
pub use error::{ApiError, CredentialKey, PorkbunError, Result, TransportError};
pub use http_client::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Re-exported so custom transports and requests need no direct `reqwest` dependency.
pub use reqwest::{Method, header};

pub use utils::log_sanitizer;
