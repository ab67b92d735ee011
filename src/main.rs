//! Dataset access client.
//!
//! Connects a wallet, lists paid datasets published by the access
//! contract, and requests or checks access to one of them.
//!
//! # Architecture Overview
//!
//! ```text
//!   stdin ──▶ console ──▶ controller ──▶ blockchain::bridge ──▶ wallet RPC
//!                │            │                │
//!                │            │                └──▶ blockchain::contract ──▶ access contract
//!   stdout ◀─────┘◀── render ◀┘
//!
//!   cross-cutting: config, observability (tracing + metrics), lifecycle
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;

use dataset_access::config::load_or_default;
use dataset_access::console::{oneshot, OneShot, Session};
use dataset_access::lifecycle::{signals, startup, Shutdown};
use dataset_access::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "dataset-access")]
#[command(about = "Browse paid datasets and request access with your wallet", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive page (default)
    Browse,
    /// Print the dataset listings
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pay for access to a dataset
    Request {
        #[arg(short, long)]
        dataset: u64,
    },
    /// Check whether the connected account has access to a dataset
    Check {
        #[arg(short, long)]
        dataset: u64,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("dataset-access v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let app = startup::build(&config).await;
    let loaded = startup::on_load(&app.controller).await;
    let controller = app.controller;

    let command = match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            let shutdown = Arc::new(Shutdown::new());
            let session_shutdown = shutdown.subscribe();
            let _signals = signals::spawn_signal_handler(shutdown.clone());

            // A failed fetch is already logged; the page can `reload`
            Session::new(controller)
                .run(
                    BufReader::new(tokio::io::stdin()),
                    tokio::io::stdout(),
                    session_shutdown,
                )
                .await?;

            // The stdin reader thread may still be parked on a read
            tracing::info!("Shutdown complete");
            std::process::exit(0);
        }
        Commands::List { json } => OneShot::List { json },
        Commands::Request { dataset } => OneShot::Request { dataset },
        Commands::Check { dataset } => OneShot::Check { dataset },
    };

    let succeeded = oneshot::run(&controller, &loaded, command, &mut std::io::stdout()).await?;
    if !succeeded {
        return Ok(ExitCode::FAILURE);
    }

    tracing::info!("Shutdown complete");
    Ok(ExitCode::SUCCESS)
}
