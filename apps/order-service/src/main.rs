//! Order Service Binary
//!
//! Starts the restaurant order service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-service
//! ```
//!
//! # Environment Variables
//!
//! - `ORDER_SERVICE_CONFIG`: Path to the YAML config (default: config.yaml)
//! - `RAZORPAY_KEY_ID` / `RAZORPAY_KEY_SECRET`: Referenced by the sample config
//! - `RUST_LOG`: Overrides the configured log level

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use order_service::config::load_config;
use order_service::infrastructure::config::build_container;
use order_service::infrastructure::http::create_router;
use order_service::observability::init_logging;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config(None).context("failed to load configuration")?;
    init_logging(&config.observability.logging).context("failed to initialize logging")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting order service");

    let (container, receiver) =
        build_container(&config).context("failed to wire service components")?;

    let dispatcher = container.notification_dispatcher();
    let worker = tokio::spawn(dispatcher.run(receiver));

    let router = create_router(container.app_state(env!("CARGO_PKG_VERSION")));

    let addr: SocketAddr = format!(
        "{}:{}",
        config.server.bind_address, config.server.http_port
    )
    .parse()
    .context("invalid server bind address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    // Dropping the last publisher closes the queue; the worker drains it.
    drop(container);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    match tokio::time::timeout(shutdown_timeout, worker).await {
        Ok(Ok(())) => tracing::info!("Notification queue drained"),
        Ok(Err(e)) => tracing::error!(error = %e, "Notification worker panicked"),
        Err(_) => tracing::warn!(
            timeout_secs = shutdown_timeout.as_secs(),
            "Notification worker did not finish before shutdown timeout"
        ),
    }

    tracing::info!("Order service stopped");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
