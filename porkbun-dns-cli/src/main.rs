//! `porkbun` command-line entry point
//!
//! Builds one [`PorkbunClient`] from the environment (overridden by flags),
//! runs a single command and prints its JSON result on stdout. Logs go to
//! stderr so the output stays machine-readable.

mod commands;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use commands::{DnsCommand, PingCommand};
use porkbun_dns::{ClientBuilder, PorkbunClient};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Porkbun API key [default: $PORKBUN_API_KEY]
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Porkbun secret API key [default: $PORKBUN_SECRET_KEY]
    #[arg(long, global = true)]
    secret_key: Option<String>,

    /// API host [default: $PORKBUN_BASE_URL or https://api.porkbun.com]
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", env = "PORKBUN_LOG_LEVEL", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage DNS entries for a domain
    Dns(DnsCommand),
    /// Check that the API keys are accepted
    Ping(PingCommand),
}

impl Cli {
    fn client(&self) -> anyhow::Result<PorkbunClient> {
        let mut builder = ClientBuilder::from_env();
        if let Some(key) = &self.api_key {
            builder = builder.api_key(key);
        }
        if let Some(key) = &self.secret_key {
            builder = builder.secret_key(key);
        }
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        builder.build().context("err creating porkbun client")
    }
}

fn init_tracing(log_level: &str) {
    // RUST_LOG wins; otherwise only this workspace's crates log at the chosen level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,porkbun_dns={log_level},porkbun_dns_cli={log_level}"
        ))
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = cli.client()?;
    match cli.command {
        Commands::Dns(cmd) => cmd.execute(&client).await,
        Commands::Ping(cmd) => cmd.execute(&client).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
