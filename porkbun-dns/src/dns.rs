//! Typed DNS operations
//!
//! Reference: <https://porkbun.com/api/json/v3/documentation>

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::PorkbunClient;
use crate::error::{ApiError, PorkbunError, Result};
use crate::http_client::HttpRequest;
use crate::utils::lenient;

/// TTL applied when the caller does not pick one. Also Porkbun's minimum.
pub const DEFAULT_TTL: &str = "600";

/// Body of `POST /api/json/v3/dns/create/{domain}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDnsRecordRequest {
    /// Subdomain for the record, without the domain itself. Empty creates the
    /// record on the root domain, `*` creates a wildcard record.
    pub name: String,

    /// Record type: A, MX, CNAME, ALIAS, TXT, NS, AAAA, SRV, TLSA, CAA.
    /// Not checked locally; the API rejects unknown types.
    #[serde(rename = "type")]
    pub record_type: String,

    /// Answer content for the record.
    pub content: String,

    /// Time to live in seconds, as a string.
    pub ttl: String,

    /// Priority, for the record types that support one.
    #[serde(rename = "prio", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl CreateDnsRecordRequest {
    /// Request with the default TTL and no priority.
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl: DEFAULT_TTL.to_string(),
            priority: None,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = ttl.into();
        self
    }

    /// Set the priority; an empty string clears it.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        let priority = priority.into();
        self.priority = (!priority.is_empty()).then_some(priority);
        self
    }
}

impl Default for CreateDnsRecordRequest {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDnsRecordResponse {
    /// `SUCCESS` when the command was processed.
    pub status: String,

    /// ID of the created record.
    #[serde(deserialize_with = "lenient::deserialize_i64")]
    pub id: i64,
}

/// A record as returned by the retrieve endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(deserialize_with = "lenient::deserialize_string")]
    pub id: String,

    /// Fully-qualified record name.
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    pub content: String,

    #[serde(deserialize_with = "lenient::deserialize_string")]
    pub ttl: String,

    #[serde(
        rename = "prio",
        default,
        deserialize_with = "lenient::deserialize_optional_string"
    )]
    pub priority: Option<String>,

    #[serde(default, deserialize_with = "lenient::deserialize_optional_string")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDnsRecordsResponse {
    pub status: String,

    #[serde(default)]
    pub records: Vec<DnsRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,

    /// Address the request was seen from.
    #[serde(rename = "yourIp", default, skip_serializing_if = "Option::is_none")]
    pub your_ip: Option<String>,
}

impl PorkbunClient {
    /// Create a DNS record on `domain`.
    ///
    /// A non-2xx status is returned as [`PorkbunError::Api`] without looking
    /// at the body; nothing is retried.
    pub async fn create_dns_record(
        &self,
        domain: &str,
        params: &CreateDnsRecordRequest,
    ) -> Result<CreateDnsRecordResponse> {
        let body = serde_json::to_vec(params).map_err(PorkbunError::Serialization)?;
        let path = format!("/api/json/v3/dns/create/{}", urlencoding::encode(domain));

        self.call(&path, Some(body)).await.map_err(|e| {
            e.with_context(|| {
                format!(
                    "error creating dns record {:?} {:?} {:?} on {domain}",
                    params.name, params.record_type, params.content
                )
            })
        })
    }

    /// List every DNS record of `domain`.
    pub async fn list_dns_records(&self, domain: &str) -> Result<ListDnsRecordsResponse> {
        let path = format!("/api/json/v3/dns/retrieve/{}", urlencoding::encode(domain));

        self.call(&path, None)
            .await
            .map_err(|e| e.with_context(|| format!("error listing dns records of {domain}")))
    }

    /// Check the credentials against the API.
    pub async fn ping(&self) -> Result<PingResponse> {
        self.call("/api/json/v3/ping", None)
            .await
            .map_err(|e| e.with_context(|| "error pinging porkbun".to_string()))
    }

    /// POST through [`execute`](Self::execute) and classify the response.
    async fn call<T: DeserializeOwned>(&self, path: &str, body: Option<Vec<u8>>) -> Result<T> {
        let mut request = HttpRequest::post(self.endpoint(path));
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let response = self.execute(request).await?;

        if !response.is_success() {
            log::debug!("[porkbun] API error {} on {path}", response.status);
            return Err(ApiError::new(response.status, response.body).into());
        }

        serde_json::from_slice(&response.body).map_err(PorkbunError::Decode)
    }
}
