//! Ether transfer demo.
//!
//! ```text
//! ether-transfer [HOST] [PORT]
//! ```
//!
//! Transfers 0.123 Ether from the node's coinbase to its second account
//! and prints balances and the transaction cost.

use clap::Parser;

use ether_transfer::blockchain::ether_to_wei;
use ether_transfer::config::loader::load_from_env;
use ether_transfer::observability::logging::init_logging;
use ether_transfer::TransferOrchestrator;

#[derive(Parser)]
#[command(name = "ether-transfer")]
#[command(about = "Transfer Ether between two node-managed accounts", long_about = None)]
struct Cli {
    /// Node host
    host: Option<String>,

    /// Node port
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let mut config = load_from_env()?;
    if let Some(host) = cli.host {
        config.node.host = host;
    }
    if let Some(port) = cli.port {
        config.node.port = port;
    }

    tracing::info!(
        endpoint = %config.endpoint(),
        amount_ether = %config.transaction.amount_ether,
        "Starting transfer"
    );

    let amount_wei = ether_to_wei(&config.transaction.amount_ether)?;
    let orchestrator = TransferOrchestrator::connect(config.endpoint(), config).await?;
    tracing::info!(
        endpoint = %orchestrator.node().endpoint(),
        client_version = %orchestrator.node().version(),
        "Connected"
    );

    match orchestrator.run(amount_wei).await {
        Ok(report) => {
            tracing::info!(tx_hash = %report.tx_hash, "Transfer complete");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Transfer failed");
            Err(e.into())
        }
    }
}
