//! Verify that the manifest and script carry the same version.

use tracing::debug;

use crate::config::VersionPaths;
use crate::error::VersionSyncError;
use crate::files::{read_manifest_version, read_script_version};
use crate::sync::{LocatedVersion, SyncReport, check_sync};

/// Read both versions and compare them.
///
/// Read failures are errors; a version mismatch is a report, not an error.
pub fn run_check(paths: &VersionPaths) -> Result<SyncReport, VersionSyncError> {
    let manifest = LocatedVersion::new(
        paths.manifest_label(),
        read_manifest_version(&paths.manifest)?,
    );
    let script = LocatedVersion::new(paths.script_label(), read_script_version(&paths.script)?);

    let report = check_sync(manifest, script);
    debug!(in_sync = report.is_in_sync(), "Compared versions");
    Ok(report)
}
