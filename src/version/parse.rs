//! Strict `MAJOR.MINOR.PATCH` parsing.

use std::sync::LazyLock;

use regex_lite::Regex;
use semver::Version;

use crate::error::VersionSyncError;

static SEMVER_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").expect("Invalid regex"));

/// Parse a version string made of exactly three dot-separated integers.
///
/// Leading zeros are accepted and dropped (`01.2.3` parses as `1.2.3`).
/// Pre-release and build metadata are rejected, so the result always renders
/// back as plain `major.minor.patch`.
pub fn parse_version(input: &str) -> Result<Version, VersionSyncError> {
    let invalid = || VersionSyncError::InvalidVersion(input.to_string());

    let caps = SEMVER_TRIPLE.captures(input).ok_or_else(invalid)?;

    let component = |i: usize| -> Result<u64, VersionSyncError> {
        caps[i].parse::<u64>().map_err(|_| invalid())
    };

    Ok(Version::new(component(1)?, component(2)?, component(3)?))
}
