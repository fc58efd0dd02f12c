//! API server entry point.

use insightx_api::{Config, ServerError};
use insightx_api::telemetry;
use tokio::signal;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// A signal whose handler cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // 1. Load configuration
    let config = Config::from_env();

    // 2. Initialize tracing
    telemetry::init(&config.log_level);

    // 3. Bind and serve
    let addr = config.addr();
    tracing::info!(service = %config.service_name, %addr, "starting API server");

    let listener = insightx_api::bind(&config).await?;
    insightx_api::serve(listener, insightx_api::create_app(), shutdown_signal()).await?;

    tracing::info!(service = %config.service_name, "stopped");
    Ok(())
}
