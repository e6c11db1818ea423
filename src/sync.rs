//! Comparing the manifest version against the script version.

use std::fmt;

use semver::Version;

/// A version together with the label of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedVersion {
    pub label: String,
    pub version: Version,
}

impl LocatedVersion {
    pub fn new(label: impl Into<String>, version: Version) -> Self {
        Self {
            label: label.into(),
            version,
        }
    }
}

/// Outcome of comparing the two files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncReport {
    InSync(Version),
    Mismatch {
        manifest: LocatedVersion,
        script: LocatedVersion,
    },
}

impl SyncReport {
    pub fn is_in_sync(&self) -> bool {
        matches!(self, SyncReport::InSync(_))
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncReport::InSync(version) => write!(f, "Versions are in sync: {}", version),
            SyncReport::Mismatch { manifest, script } => write!(
                f,
                "Version mismatch detected: {}={}, {}={}",
                manifest.label, manifest.version, script.label, script.version
            ),
        }
    }
}

/// Compare the manifest and script versions component by component.
pub fn check_sync(manifest: LocatedVersion, script: LocatedVersion) -> SyncReport {
    if manifest.version == script.version {
        SyncReport::InSync(manifest.version)
    } else {
        SyncReport::Mismatch { manifest, script }
    }
}
