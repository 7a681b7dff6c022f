use anyhow::Result;
use clap::Parser;

use crate::config::ProbeConfig;

/// TCP connect latency probe with fping -C compatible output, suitable as a
/// SmokePing TCPPing binary: `tcpping-connect -C -x N <host> [port]`.
#[derive(Parser, Debug)]
#[command(name = "tcpping-connect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TCP connect latency probe (SmokePing TCPPing compatible)")]
#[command(after_help = "Environment:\n  \
    TCPPING_TIMEOUT or TCPPING_TIMEOUT_SEC  default timeout seconds")]
pub struct Cli {
    /// fping -C compatible output (always on; accepted for compatibility)
    #[arg(short = 'C')]
    pub compat: bool,

    /// Number of connection attempts
    #[arg(short = 'x', value_name = "COUNT", default_value_t = 1)]
    pub count: u32,

    /// Per-attempt timeout in seconds (float supported)
    #[arg(short = 'w', value_name = "SECONDS")]
    pub timeout_sec: Option<f64>,

    /// Target host (IP or hostname)
    #[arg(value_name = "HOST")]
    pub host: String,

    /// Target port
    #[arg(value_name = "PORT", default_value_t = 80)]
    pub port: u16,
}

impl Cli {
    /// Fold in the environment-derived default timeout and validate. The
    /// `-C` flag has no effect on behavior; output is unconditionally the
    /// compatibility format.
    pub fn into_config(self, default_timeout_sec: f64) -> Result<ProbeConfig> {
        let _ = self.compat;
        let timeout_sec = self.timeout_sec.unwrap_or(default_timeout_sec);
        ProbeConfig::new(self.host, self.port, self.count, timeout_sec)
    }
}
