//! Endpoint latency monitor binary.
//!
//! Loads the endpoint configuration, then probes every configured endpoint
//! on its own interval, emitting one `HTTP_RESPONSETIME` line per probe on
//! stdout. Runs until SIGINT/SIGTERM.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use endpoint_monitor::config::loader::load_config;
use endpoint_monitor::lifecycle::{signals, Shutdown};
use endpoint_monitor::observability::{logging, StdoutSink};
use endpoint_monitor::probe::{build_client, ProbeRequest};
use endpoint_monitor::scheduler::Scheduler;

#[derive(Parser)]
#[command(name = "endpoint-monitor")]
#[command(about = "HTTP endpoint latency monitor", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "monitor.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // The one fatal configuration error: no endpoint list at all. An empty
    // list is a valid monitor that ticks forever doing nothing.
    let Some(ref items) = config.items else {
        eprintln!("No configuration has been setup yet, so we're exiting");
        std::process::exit(1);
    };

    let client = match build_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("failed to build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let tick = config.tick_interval();
    let endpoints: Vec<(ProbeRequest, Duration)> = items
        .iter()
        .map(|item| (ProbeRequest::from_config(item), item.effective_interval()))
        .collect();

    tracing::info!(
        config = %cli.config.display(),
        endpoints = endpoints.len(),
        tick_ms = tick.as_millis() as u64,
        "endpoint-monitor starting"
    );

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(signals::listen(shutdown));

    let scheduler = Scheduler::new(tick, endpoints, client, Arc::new(StdoutSink));
    scheduler.run(receiver).await;

    tracing::info!("shutdown complete");
}
