//! Locating and rewriting the version in the manifest and the script file.

pub mod manifest;
pub mod script;

use std::path::Path;

use crate::error::VersionSyncError;

pub use manifest::{read_manifest_version, read_manifest_version_text, write_manifest_version};
pub use script::{read_script_version, write_script_version};

fn read_file(path: &Path) -> Result<String, VersionSyncError> {
    if !path.exists() {
        return Err(VersionSyncError::MissingFile(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|source| VersionSyncError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), VersionSyncError> {
    std::fs::write(path, content).map_err(|source| VersionSyncError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}
