//! version-sync - keep the release version of package.json and the
//! git-local-sweep script in step.
//!
//! # Overview
//!
//! `bump-version` reads the manifest version, bumps it (major, minor or patch)
//! and writes it to both files. `check-version-sync` reads both files and
//! fails when they disagree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod files;
pub mod sync;
pub mod version;

// Re-export commonly used types
pub use commands::{BumpOutcome, run_bump, run_check};
pub use config::VersionPaths;
pub use error::VersionSyncError;
pub use sync::{LocatedVersion, SyncReport};
pub use version::BumpType;
