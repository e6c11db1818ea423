//! Semver bump arithmetic.

use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::error::VersionSyncError;

/// Type of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::Patch => "patch",
            BumpType::Minor => "minor",
            BumpType::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpType {
    type Err = VersionSyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(BumpType::Major),
            "minor" => Ok(BumpType::Minor),
            "patch" => Ok(BumpType::Patch),
            other => Err(VersionSyncError::UnsupportedBumpType(other.to_string())),
        }
    }
}

/// Compute the version that follows `version` for the given bump.
///
/// - major: `(M+1, 0, 0)`
/// - minor: `(M, N+1, 0)`
/// - patch: `(M, N, P+1)`
pub fn bump_version(version: &Version, bump: BumpType) -> Result<Version, VersionSyncError> {
    let overflow = |component| VersionSyncError::VersionOverflow {
        version: version.to_string(),
        component,
    };

    let next = match bump {
        BumpType::Major => Version::new(
            version.major.checked_add(1).ok_or_else(|| overflow("major"))?,
            0,
            0,
        ),
        BumpType::Minor => Version::new(
            version.major,
            version.minor.checked_add(1).ok_or_else(|| overflow("minor"))?,
            0,
        ),
        BumpType::Patch => Version::new(
            version.major,
            version.minor,
            version.patch.checked_add(1).ok_or_else(|| overflow("patch"))?,
        ),
    };

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_bump() {
        let next = bump_version(&Version::new(1, 2, 3), BumpType::Patch).unwrap();
        assert_eq!(next, Version::new(1, 2, 4));
    }

    #[test]
    fn test_minor_bump_resets_patch() {
        let next = bump_version(&Version::new(1, 2, 3), BumpType::Minor).unwrap();
        assert_eq!(next, Version::new(1, 3, 0));
    }

    #[test]
    fn test_major_bump_resets_minor_and_patch() {
        let next = bump_version(&Version::new(1, 2, 3), BumpType::Major).unwrap();
        assert_eq!(next, Version::new(2, 0, 0));
    }

    #[test]
    fn test_bump_from_zero() {
        let zero = Version::new(0, 0, 0);
        assert_eq!(bump_version(&zero, BumpType::Patch).unwrap(), Version::new(0, 0, 1));
        assert_eq!(bump_version(&zero, BumpType::Minor).unwrap(), Version::new(0, 1, 0));
        assert_eq!(bump_version(&zero, BumpType::Major).unwrap(), Version::new(1, 0, 0));
    }

    #[test]
    fn test_bump_overflow_is_an_error() {
        let max = Version::new(u64::MAX, 0, 0);
        let err = bump_version(&max, BumpType::Major).unwrap_err();
        assert!(matches!(
            err,
            VersionSyncError::VersionOverflow { component: "major", .. }
        ));

        // Other components are unaffected by a saturated major
        assert_eq!(
            bump_version(&max, BumpType::Patch).unwrap(),
            Version::new(u64::MAX, 0, 1)
        );
    }

    #[test]
    fn test_bump_type_from_str() {
        assert_eq!("major".parse::<BumpType>().unwrap(), BumpType::Major);
        assert_eq!("minor".parse::<BumpType>().unwrap(), BumpType::Minor);
        assert_eq!("patch".parse::<BumpType>().unwrap(), BumpType::Patch);
    }

    #[test]
    fn test_bump_type_rejects_unknown() {
        for input in ["Major", "prerelease", "", " patch"] {
            assert!(matches!(
                input.parse::<BumpType>(),
                Err(VersionSyncError::UnsupportedBumpType(ref s)) if s == input
            ));
        }
    }

    #[test]
    fn test_bump_type_display_round_trips() {
        for bump in [BumpType::Major, BumpType::Minor, BumpType::Patch] {
            assert_eq!(bump.to_string().parse::<BumpType>().unwrap(), bump);
        }
    }
}
