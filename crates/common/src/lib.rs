//! Types shared between the InsightX API server and its clients.

pub mod types;

pub use types::{HealthResponse, HealthStatus};
