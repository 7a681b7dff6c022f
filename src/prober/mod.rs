use serde::{Deserialize, Serialize};

pub mod tcp_connect;

/// Result of a single connection attempt. Every failure mode maps into one of
/// these two variants; the probe never surfaces an error to its caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ProbeOutcome {
    /// The remote stack answered: handshake completed, or the connection was
    /// actively refused/reset. Either way the elapsed time is a valid sample.
    Reachable { latency_ms: f64 },
    /// Timeout, resolution failure, no route. No evidence of a response.
    Loss,
}

impl ProbeOutcome {
    pub fn latency_ms(&self) -> Option<f64> {
        match self {
            ProbeOutcome::Reachable { latency_ms } => Some(*latency_ms),
            ProbeOutcome::Loss => None,
        }
    }
}
