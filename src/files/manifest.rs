//! package.json version access.

use std::path::Path;

use semver::Version;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::VersionSyncError;
use crate::version::parse_version;

use super::{read_file, write_file};

/// Read the `version` field of a JSON manifest.
pub fn read_manifest_version(path: &Path) -> Result<Version, VersionSyncError> {
    let raw = read_manifest_version_text(path)?;
    let version = parse_version(&raw)?;

    debug!(path = %path.display(), %version, "Read manifest version");
    Ok(version)
}

/// Read the `version` field of a JSON manifest as written, without parsing it.
///
/// Absent and falsy values (`null`, `false`, `0`, `""`, `[]`, `{}`) are
/// reported as a missing field. Any other non-string value is an invalid
/// version.
pub fn read_manifest_version_text(path: &Path) -> Result<String, VersionSyncError> {
    let mut manifest = load_manifest(path)?;

    let value = manifest
        .remove("version")
        .filter(|v| !is_falsy(v))
        .ok_or_else(|| VersionSyncError::MissingField(path.to_path_buf()))?;

    match value {
        Value::String(s) => Ok(s),
        other => Err(VersionSyncError::InvalidVersion(other.to_string())),
    }
}

/// Set the `version` field of a JSON manifest and write it back.
///
/// Other fields keep their values and order. Output is indented with two
/// spaces and ends with a newline, as npm writes it.
pub fn write_manifest_version(path: &Path, new_version: &Version) -> Result<(), VersionSyncError> {
    let mut manifest = load_manifest(path)?;

    manifest.insert(
        "version".to_string(),
        Value::String(new_version.to_string()),
    );

    let output = serde_json::to_string_pretty(&Value::Object(manifest)).map_err(|e| {
        VersionSyncError::InvalidManifest {
            path: path.to_path_buf(),
            reason: format!("Failed to serialize JSON: {}", e),
        }
    })?;

    write_file(path, &format!("{}\n", output))?;
    debug!(path = %path.display(), version = %new_version, "Wrote manifest version");
    Ok(())
}

fn load_manifest(path: &Path) -> Result<Map<String, Value>, VersionSyncError> {
    let content = read_file(path)?;

    let json: Value =
        serde_json::from_str(&content).map_err(|e| VersionSyncError::InvalidManifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    match json {
        Value::Object(map) => Ok(map),
        _ => Err(VersionSyncError::InvalidManifest {
            path: path.to_path_buf(),
            reason: "top-level value is not an object".into(),
        }),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
