//! DNS record commands

use anyhow::Context;
use clap::{Args, Subcommand};
use porkbun_dns::{CreateDnsRecordRequest, DEFAULT_TTL, PorkbunClient, parse_domain};
use tracing::debug;

use super::print_json;

/// Manage DNS entries for a domain
#[derive(Args)]
pub struct DnsCommand {
    #[command(subcommand)]
    pub command: DnsSubcommand,
}

#[derive(Subcommand)]
pub enum DnsSubcommand {
    /// Create a new DNS entry
    Create(CreateRecordCommand),
    /// List entries for a domain
    List(ListRecordsCommand),
}

/// Create a new DNS entry.
///
/// DOMAIN is the complete domain, such as 'foo.example.com', where 'foo' is
/// the record entry on the 'example.com' domain. TYPE is the type of record
/// being created, such as A, AAAA, TXT, MX... CONTENT is the answer for the
/// record.
#[derive(Args)]
pub struct CreateRecordCommand {
    /// Complete domain, e.g. "foo.example.com" or "*.example.com"
    pub domain: String,

    /// Record type (A, AAAA, CNAME, ALIAS, MX, TXT, NS, SRV, TLSA, CAA)
    #[arg(value_name = "TYPE")]
    pub record_type: String,

    /// Answer for the record
    pub content: String,

    /// Time to live for the record, in seconds
    #[arg(long, default_value = DEFAULT_TTL)]
    pub ttl: String,

    /// Priority of the record for those that support it
    #[arg(long, default_value = "")]
    pub priority: String,
}

/// List entries for a domain
#[derive(Args)]
pub struct ListRecordsCommand {
    /// Domain to list; subdomains are ignored ("www.example.com" lists "example.com")
    pub domain: String,
}

impl DnsCommand {
    pub async fn execute(self, client: &PorkbunClient) -> anyhow::Result<()> {
        match self.command {
            DnsSubcommand::Create(cmd) => cmd.execute(client).await,
            DnsSubcommand::List(cmd) => cmd.execute(client).await,
        }
    }
}

impl CreateRecordCommand {
    /// Split DOMAIN and assemble the API request.
    fn request(&self) -> anyhow::Result<(String, CreateDnsRecordRequest)> {
        let target = parse_domain(&self.domain).context("err parsing domain")?;
        let req = CreateDnsRecordRequest::new(target.subdomain, &self.record_type, &self.content)
            .with_ttl(&self.ttl)
            .with_priority(&self.priority);
        Ok((target.domain, req))
    }

    async fn execute(self, client: &PorkbunClient) -> anyhow::Result<()> {
        let (domain, req) = self.request()?;
        debug!(params = ?req, %domain, "Sending create request");

        let res = client
            .create_dns_record(&domain, &req)
            .await
            .context("err creating dns record")?;
        print_json(&res)
    }
}

impl ListRecordsCommand {
    async fn execute(self, client: &PorkbunClient) -> anyhow::Result<()> {
        let domain = parse_domain(&self.domain)
            .context("err parsing domain")?
            .domain;
        debug!(%domain, "Sending list request");

        let res = client
            .list_dns_records(&domain)
            .await
            .context("err listing dns records")?;
        print_json(&res)
    }
}
