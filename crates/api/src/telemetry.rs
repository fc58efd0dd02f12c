//! Tracing setup: subscriber initialization and per-request spans.

use axum::extract::Request;
use tracing::Span;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::REQUEST_ID_HEADER;

/// Filter used when the configured directive cannot be parsed.
pub const FALLBACK_LOG_FILTER: &str = "info";

/// Parses `directive` into a filter.
///
/// A malformed directive yields the [`FALLBACK_LOG_FILTER`] filter together
/// with the parse error, so the caller can report it once logging is up.
pub fn build_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(error) => (EnvFilter::new(FALLBACK_LOG_FILTER), Some(error)),
    }
}

/// Installs the global subscriber: an env filter plus a fmt layer.
pub fn init(directive: &str) {
    let (filter, rejected) = build_filter(directive);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(error) = rejected {
        tracing::warn!(
            %error,
            %directive,
            fallback = FALLBACK_LOG_FILTER,
            "invalid log filter, using fallback"
        );
    }
}

/// Root span for one HTTP request, carrying its `x-request-id`.
pub fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
