use serde::{Deserialize, Serialize};

/// Liveness status reported by the health endpoint.
///
/// Serialized lowercase. The service only ever reports `Ok`: a process
/// that can answer is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

impl HealthStatus {
    /// Returns the wire representation of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a `GET /health` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

impl HealthResponse {
    /// The response for a live process.
    pub const fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
        }
    }
}
