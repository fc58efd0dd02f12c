//! HTTP liveness service for the InsightX intelligence API.
//!
//! Serves a single `GET /health` route returning `{"status":"ok"}`, with
//! request ids and structured access logging (tracing).

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::future::Future;

use axum::Router;
use axum::http::HeaderName;
use axum::routing::get;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use config::Config;
pub use error::{Result, ServerError};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Creates the Axum application router with the health route and HTTP middleware.
///
/// Any other path falls through to Axum's default 404, and any other method
/// on `/health` to its default 405.
pub fn create_app() -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/health", get(routes::health::check))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(telemetry::request_span)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
}

/// Binds a TCP listener on the configured `host:port`.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    TcpListener::bind(config.addr())
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr(),
            source,
        })
}

/// Serves `app` on `listener` until `shutdown` resolves, then drains
/// in-flight connections.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(ServerError::LocalAddr)?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!(%addr, "server shut down gracefully");
    Ok(())
}
