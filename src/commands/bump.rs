//! Bump the version in the manifest and mirror it into the script.

use semver::Version;
use tracing::debug;

use crate::config::VersionPaths;
use crate::error::VersionSyncError;
use crate::files::{read_manifest_version_text, write_manifest_version, write_script_version};
use crate::version::{BumpType, bump_version, parse_version};

/// Old and new versions of a bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// The manifest version exactly as it was written, e.g. `01.2.3`.
    pub old_text: String,
    pub old: Version,
    pub new: Version,
}

/// Run the bump.
///
/// The manifest is the source of truth. It is written first, then the script.
/// A failed script write leaves the manifest already updated; the check
/// command reports that state. With `dry_run` nothing is written.
pub fn run_bump(
    paths: &VersionPaths,
    bump: BumpType,
    dry_run: bool,
) -> Result<BumpOutcome, VersionSyncError> {
    let old_text = read_manifest_version_text(&paths.manifest)?;
    let old = parse_version(&old_text)?;
    let new = bump_version(&old, bump)?;

    debug!(%old, %new, %bump, dry_run, "Computed next version");

    if !dry_run {
        write_manifest_version(&paths.manifest, &new)?;
        write_script_version(&paths.script, &new)?;
    }

    Ok(BumpOutcome { old_text, old, new })
}
