//! Serve command implementation.

use crate::cli::ServeArgs;
use crate::config::Config;
use crate::server::{create_router, AppState};
use crate::transfer::DockerRuntime;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(mut config: Config, args: &ServeArgs) -> Config {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(workspace) = &args.workspace {
        config.workspace.root = workspace.clone();
    }
    if args.keep_runs {
        config.workspace.keep_runs = true;
    }
    config
}

/// Run the serve command.
pub async fn run(args: ServeArgs, config: Config) -> Result<()> {
    let config = apply_overrides(config, &args);
    config.validate()?;

    let runtime = DockerRuntime::connect(&config.docker).context("Failed to connect to Docker")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(
        workspace = %config.workspace.root.display(),
        keep_runs = config.workspace.keep_runs,
        "Workspace configured"
    );

    let router = create_router(AppState::new(Arc::new(runtime), config));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
