use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use migration_outlook::config::Args;
use migration_outlook::{Console, ObservationLoader, OutlookError, QuerySession};
use std::io;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(error) = run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let data_file = args.data_file();
    let fetcher = args
        .fetcher()
        .context("Failed to set up the observation download")?;
    if fetcher.is_none() && !args.offline {
        warn!(
            "No API key given (--auth-key or {}); using cached observations only",
            migration_outlook::config::AUTH_KEY_ENV
        );
    }

    let table = ObservationLoader::new(&data_file, fetcher)
        .load()
        .map_err(OutlookError::from)
        .with_context(|| format!("Failed to load observations into {}", data_file.display()))?;
    info!("{} observations available for lookup", table.len());

    let mut session = QuerySession::new(table);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), args.report_dir.clone())
        .with_banner(args.banner());
    console
        .run(&mut session)
        .map_err(OutlookError::Console)?;
    Ok(())
}
