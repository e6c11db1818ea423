//! Error types for version-sync using thiserror.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::label;

/// Errors from reading, bumping, and writing versions.
#[derive(Error, Debug)]
pub enum VersionSyncError {
    #[error("Missing file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("{} is missing a version field.", label(.0))]
    MissingField(PathBuf),

    #[error("Could not find VERSION line in {}", .0.display())]
    PatternNotFound(PathBuf),

    #[error("Found {count} VERSION lines in {} (lines {}); expected exactly one", .path.display(), join_lines(.lines))]
    AmbiguousVersionLine {
        path: PathBuf,
        count: usize,
        lines: Vec<usize>,
    },

    #[error("Invalid semantic version: {0}")]
    InvalidVersion(String),

    #[error("Unsupported bump type: {0}")]
    UnsupportedBumpType(String),

    #[error("Cannot bump {component} component of {version}: value would overflow")]
    VersionOverflow {
        version: String,
        component: &'static str,
    },

    #[error("Invalid JSON in {}: {reason}", .path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
