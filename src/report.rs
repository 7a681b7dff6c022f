use std::fmt::Write as _;
use tracing::debug;

use crate::config::ProbeConfig;
use crate::prober;

/// Append-only series of latency samples in attempt order. Lost attempts
/// leave no entry, not even a placeholder ("successful probes only").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    samples: Vec<f64>,
}

impl SampleSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self { samples: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, latency_ms: f64) {
        self.samples.push(latency_ms);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
}

/// Outcome of a whole run: the target host plus whatever samples were
/// collected. Knows how to render the compatibility line and pick the
/// process exit status.
#[derive(Debug, Clone)]
pub struct Report {
    host: String,
    samples: SampleSeries,
}

impl Report {
    pub fn new(host: String, samples: SampleSeries) -> Self {
        Self { host, samples }
    }

    /// The fping -C style line SmokePing's TCPPing probe expects:
    /// `<host> : <ms> <ms> ...`, three decimals, attempt order. With zero
    /// samples the line is just `<host> :`.
    pub fn render(&self) -> String {
        let mut line = format!("{} :", self.host);
        for v in self.samples.as_slice() {
            // write! to a String cannot fail
            let _ = write!(line, " {:.3}", v);
        }
        line
    }

    /// 0 if at least one sample was recorded, 1 on total loss.
    pub fn exit_code(&self) -> u8 {
        if self.samples.is_empty() { 1 } else { 0 }
    }

    pub fn samples(&self) -> &SampleSeries {
        &self.samples
    }
}

/// Run the probe exactly `count` times, sequentially, and fold the outcomes.
/// Worst case wall time is `count * timeout`.
pub async fn run(config: &ProbeConfig) -> Report {
    let mut samples = SampleSeries::with_capacity(config.count as usize);
    for attempt in 1..=config.count {
        let outcome =
            prober::tcp_connect::probe_tcp(&config.host, config.port, config.timeout()).await;
        match outcome.latency_ms() {
            Some(ms) => {
                debug!("attempt {}/{}: {:.3} ms", attempt, config.count, ms);
                samples.push(ms);
            }
            None => {
                debug!("attempt {}/{}: loss", attempt, config.count);
            }
        }
    }
    Report::new(config.host.clone(), samples)
}
