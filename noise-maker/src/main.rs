mod args;
mod generator;
mod output;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use args::CliArgs;
use chrono::{Local, TimeDelta};
use clap::Parser;
use generator::RowGenerator;
use output::write_rows;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let start = (Local::now() - TimeDelta::days(1)).naive_local();
    let mut generator = RowGenerator::new(start, *args.short_row_percent());

    let mut out: Box<dyn Write> = match args.output() {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    info!(rows = args.rows(), seed = ?args.seed(), "generating access log");
    write_rows(&mut out, &mut rng, &mut generator, *args.rows())?;
    info!("done");
    Ok(())
}
