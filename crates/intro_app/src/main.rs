mod app;
mod cli;
mod logging;

use std::io;

use anyhow::Context;
use clap::Parser;
use intro_engine::{FetchSettings, IntroLookup};

fn main() -> anyhow::Result<()> {
    let args = cli::CliArgs::parse();
    logging::initialize(&args.log_settings());
    args.log_ignored();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let lookup = IntroLookup::new(FetchSettings::default());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runtime
        .block_on(app::run(args.topic, stdin.lock(), &mut out, &lookup))
        .context("failed to write output")?;
    Ok(())
}
