use std::io;
use tokio::net::TcpStream;
use tokio::time::{timeout, Duration, Instant};
use tracing::debug;

use super::ProbeOutcome;

/// A refused or reset handshake is an answer from a live stack (an RST is a
/// timed response), so closed ports still yield a latency sample. This is a
/// deliberate predicate over the error kind, not a catch-all: anything else
/// stays a loss.
fn is_refused_or_reset(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::ConnectionRefused | io::ErrorKind::ConnectionReset
    )
}

/// One bounded connection attempt against `host:port`. Never errors: every
/// failure path collapses into `ProbeOutcome::Loss`. An established stream is
/// dropped before returning; no data is sent or received.
pub async fn probe_tcp(host: &str, port: u16, per_try: Duration) -> ProbeOutcome {
    let addr = format!("{}:{}", host, port);
    let start = Instant::now();
    let result = timeout(per_try, TcpStream::connect(&addr)).await;
    let elapsed = start.elapsed();

    match result {
        Ok(Ok(conn)) => {
            drop(conn);
            ProbeOutcome::Reachable {
                latency_ms: elapsed.as_secs_f64() * 1000.0,
            }
        }
        Ok(Err(e)) if is_refused_or_reset(&e) => ProbeOutcome::Reachable {
            latency_ms: elapsed.as_secs_f64() * 1000.0,
        },
        Ok(Err(e)) => {
            // DNS failure, no route, OS-level timeout: all count as loss.
            debug!("tcp connect {} failed: {:?}", addr, e);
            ProbeOutcome::Loss
        }
        Err(_) => {
            debug!("tcp connect {} timed out after {:?}", addr, per_try);
            ProbeOutcome::Loss
        }
    }
}
