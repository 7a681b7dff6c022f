mod cli;
mod config;
mod prober;
mod report;

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logging goes to stderr; stdout carries only the compatibility line.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();
    let default_timeout = config::default_timeout_sec(|name| std::env::var(name).ok());

    let config = match args.into_config(default_timeout) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: tcpping-connect -C -x <count> [-w <timeout_sec>] <host> [port]");
            return ExitCode::from(2);
        }
    };
    debug!(
        "probing {}:{} x{} timeout {}s",
        config.host, config.port, config.count, config.timeout_sec
    );

    let report = report::run(&config).await;
    println!("{}", report.render());
    ExitCode::from(report.exit_code())
}
