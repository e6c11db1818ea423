//! Shared command-line plumbing for the two binaries.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;

use crate::config::VersionPaths;

/// File location flags shared by both tools.
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Repository root containing package.json and git-local-sweep
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to the JSON manifest (overrides <ROOT>/package.json)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Path to the script file (overrides <ROOT>/git-local-sweep)
    #[arg(long)]
    pub script: Option<PathBuf>,
}

/// Diagnostics flags shared by both tools.
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl PathArgs {
    pub fn version_paths(&self) -> VersionPaths {
        let defaults = VersionPaths::in_root(&self.root);
        VersionPaths {
            manifest: self.manifest.clone().unwrap_or(defaults.manifest),
            script: self.script.clone().unwrap_or(defaults.script),
        }
    }
}

/// Parse arguments, mapping usage errors to exit code 1.
///
/// `--help` and `--version` still print to stdout and exit 0.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings, or debug output for this
/// crate with `--verbose`. Colour is used only when stderr is a terminal.
pub fn init_tracing(log: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if log.verbose {
            EnvFilter::new("warn,version_sync=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Print an error as a single stderr line and return the failure exit code.
pub fn exit_with_error(err: &anyhow::Error) -> ExitCode {
    eprintln!("{}", err);
    ExitCode::FAILURE
}
