//! Credential check

use anyhow::Context;
use clap::Args;
use porkbun_dns::PorkbunClient;
use tracing::debug;

use super::print_json;

/// Check that the API keys are accepted
#[derive(Args)]
pub struct PingCommand {}

impl PingCommand {
    pub async fn execute(self, client: &PorkbunClient) -> anyhow::Result<()> {
        debug!("Sending ping request");

        let res = client.ping().await.context("err pinging porkbun")?;
        print_json(&res)
    }
}
