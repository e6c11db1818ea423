//! check-version-sync - CLI entry point.

use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;

use version_sync::cli::{LogArgs, PathArgs, exit_with_error, init_tracing, parse_args};
use version_sync::{SyncReport, run_check};

/// Ensure the package.json version matches VERSION in git-local-sweep.
#[derive(Parser, Debug)]
#[command(name = "check-version-sync")]
#[command(about = "Ensure package.json version matches VERSION in git-local-sweep")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli: Cli = match parse_args() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    init_tracing(&cli.log);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit_with_error(&e),
    }
}

fn run(cli: Cli) -> Result<()> {
    let report = run_check(&cli.paths.version_paths())?;

    if let SyncReport::Mismatch { .. } = report {
        bail!("{}", report);
    }

    println!("{}", report);
    Ok(())
}
