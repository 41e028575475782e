#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use anyhow::Context;
use args::Args;
use clap::Parser;
use persona_config::Config;
use persona_server::Server;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Secrets usually live in a dotenv file next to the config
    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path).with_context(|| format!("failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    // Load configuration
    let mut config = Config::load(&args.config)?;

    if let Some(listen) = args.listen {
        config.server.listen_address = listen;
    }

    // Initialize telemetry
    let _telemetry_guard = persona_telemetry::init(&config.telemetry)?;

    tracing::info!(
        config_path = %args.config.display(),
        "starting persona"
    );

    // Build server
    let server = Server::new(&config)?;

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    // Run server
    server.serve(shutdown).await?;

    tracing::info!("persona stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
