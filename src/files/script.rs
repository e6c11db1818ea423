//! `VERSION = "X.Y.Z"` line in the git-local-sweep script.
//!
//! The script is treated as a list of lines, each keeping its own terminator.
//! Exactly one line must match; reads and writes both fail otherwise.

use std::path::Path;
use std::sync::LazyLock;

use regex_lite::Regex;
use semver::Version;
use tracing::debug;

use crate::error::VersionSyncError;
use crate::version::parse_version;

use super::{read_file, write_file};

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^VERSION = "(\d+\.\d+\.\d+)"$"#).expect("Invalid regex")
});

/// The single version line found in a script.
#[derive(Debug, Clone, PartialEq, Eq)]
struct VersionLine<'a> {
    /// Zero-based index into the line list.
    index: usize,
    version: &'a str,
}

/// Read the version from the script's `VERSION = "X.Y.Z"` line.
pub fn read_script_version(path: &Path) -> Result<Version, VersionSyncError> {
    let content = read_file(path)?;
    let lines = split_lines(&content);
    let found = locate_version_line(path, &lines)?;

    let version = parse_version(found.version)?;
    debug!(path = %path.display(), line = found.index + 1, %version, "Read script version");
    Ok(version)
}

/// Replace the script's version line with `VERSION = "<new_version>"`.
///
/// All other lines, and the replaced line's terminator, are written back
/// unchanged.
pub fn write_script_version(path: &Path, new_version: &Version) -> Result<(), VersionSyncError> {
    let content = read_file(path)?;
    let lines = split_lines(&content);
    let found = locate_version_line(path, &lines)?;

    let replacement = format!("VERSION = \"{}\"", new_version);

    let mut updated = String::with_capacity(content.len());
    for (i, line) in lines.iter().enumerate() {
        if i == found.index {
            let (_, terminator) = strip_terminator(line);
            updated.push_str(&replacement);
            updated.push_str(terminator);
        } else {
            updated.push_str(line);
        }
    }

    write_file(path, &updated)?;
    debug!(path = %path.display(), line = found.index + 1, version = %new_version, "Wrote script version");
    Ok(())
}

fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Split a line into its body and its `\n` or `\r\n` terminator.
fn strip_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

fn locate_version_line<'a>(
    path: &Path,
    lines: &[&'a str],
) -> Result<VersionLine<'a>, VersionSyncError> {
    let matches: Vec<VersionLine<'a>> = lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let (body, _) = strip_terminator(line);
            VERSION_LINE.captures(body).and_then(|caps| {
                caps.get(1).map(|m| VersionLine {
                    index,
                    version: m.as_str(),
                })
            })
        })
        .collect();

    match matches.as_slice() {
        [] => Err(VersionSyncError::PatternNotFound(path.to_path_buf())),
        [single] => Ok(single.clone()),
        many => Err(VersionSyncError::AmbiguousVersionLine {
            path: path.to_path_buf(),
            count: many.len(),
            lines: many.iter().map(|m| m.index + 1).collect(),
        }),
    }
}
