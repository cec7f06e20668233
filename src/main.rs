//! The Minnie API server binary.

use clap::Parser;
use tokio::net::TcpListener;

use minnie::config::ServerConfig;
use minnie::error::ServerError;
use minnie::http::ApiServer;
use minnie::lifecycle::{signals, Shutdown};
use minnie::observability::{logging, metrics};

/// The Minnie API server.
#[derive(Parser)]
#[command(name = "minnie-apiserver", about = "The Minnie API server", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    logging::init();
    tracing::info!("Hello Minnie");

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::default();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        queue_capacity = config.counter.queue_capacity,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    let server = ApiServer::new(&config, &shutdown);

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(ServerError::Bind)?;

    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
