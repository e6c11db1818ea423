//! bump-version - CLI entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use version_sync::cli::{LogArgs, PathArgs, exit_with_error, init_tracing, parse_args};
use version_sync::{BumpType, run_bump};

/// Bump the semantic version in package.json and git-local-sweep in one step.
#[derive(Parser, Debug)]
#[command(name = "bump-version")]
#[command(about = "Bump semantic version in package.json and git-local-sweep")]
#[command(version)]
struct Cli {
    /// Version bump type: major, minor or patch
    bump_type: String,

    /// Print the new version without writing any file
    #[arg(long)]
    dry_run: bool,

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
    let bump: BumpType = cli.bump_type.parse()?;
    let paths = cli.paths.version_paths();

    let outcome = run_bump(&paths, bump, cli.dry_run)?;

    if cli.dry_run {
        println!("Would bump version: {} -> {}", outcome.old_text, outcome.new);
    } else {
        println!("Bumped version: {} -> {}", outcome.old_text, outcome.new);
    }

    Ok(())
}
