use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake CSV access logs for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value_t = 10_000)]
    rows: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// File to write instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Share of rows cut down to path, datetime and browser
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    short_row_percent: u8,
}
