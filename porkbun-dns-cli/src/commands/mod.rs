pub mod dns;
pub mod ping;

pub use dns::DnsCommand;
pub use ping::PingCommand;

use anyhow::Context;
use serde::Serialize;

/// Print a response as one line of JSON on stdout.
fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let json = serde_json::to_string(value).context("error marshaling response to JSON")?;
    println!("{json}");
    Ok(())
}
