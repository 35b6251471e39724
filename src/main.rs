use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use regru_dns::api::{DnsZoneApi, HttpTransport, RegruClient};
use regru_dns::config::load_config;

/// Manage TXT records in a reg.ru DNS zone
#[derive(Parser)]
#[command(name = "regru-dns", version)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, short = 'c', env = "REGRU_CONFIG", default_value = "config.yaml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every record in the zone
    List,
    /// Add a TXT record
    Create { name: String, value: String },
    /// Remove a TXT record
    Delete { name: String, value: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let http = reqwest::Client::builder()
        .user_agent(concat!("regru-dns/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;
    let client = RegruClient::with_transport(
        config.into_client_config(),
        Arc::new(HttpTransport::with_client(http)),
    );

    match cli.command {
        Command::List => {
            let records = client.list_records().await.context("Failed to list records")?;
            for record in records {
                println!("{}\t{}\t{}", record.name, record.record_type, record.value);
            }
        }
        Command::Create { name, value } => client
            .create_txt_record(&name, &value)
            .await
            .with_context(|| format!("Failed to create TXT record {}", name))?,
        Command::Delete { name, value } => client
            .delete_txt_record(&name, &value)
            .await
            .with_context(|| format!("Failed to delete TXT record {}", name))?,
    }

    Ok(())
}
