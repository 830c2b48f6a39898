use std::{process::ExitCode, time::Duration};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use weblog_analyzer::{
    analyze,
    fetch::{FetchConfig, Location, fetch},
    render::{OutputFormat, render},
};

#[derive(Parser, Debug)]
#[command(version, about = "Summarize image requests and browsers in a CSV access log", long_about = None)]
struct Args {
    /// http(s):// URL, file:// URL or local path of the CSV log
    #[arg(long)]
    url: Location,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Extra download attempts after a failure
    #[arg(long, default_value_t = 0)]
    retries: u32,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(url = %args.url, "running analysis");

    let config = FetchConfig {
        retries: args.retries,
        timeout: Duration::from_secs(args.timeout_secs),
    };
    let text = match fetch(&args.url, &config).await {
        Ok(text) => text,
        Err(e) => {
            error!("error downloading data: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(bytes = text.len(), "download successful");

    let report = analyze(&text);
    match render(&report, args.format) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("could not render report: {e}");
            ExitCode::FAILURE
        }
    }
}
