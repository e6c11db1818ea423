//! File locations used by the commands.

use std::path::{Path, PathBuf};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Default script file name.
pub const SCRIPT_FILE: &str = "git-local-sweep";

/// File name used to refer to a path in messages, falling back to the full path.
pub fn label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Where the manifest and the script live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPaths {
    pub manifest: PathBuf,
    pub script: PathBuf,
}

impl VersionPaths {
    /// Default file names inside `root`.
    pub fn in_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            manifest: root.join(MANIFEST_FILE),
            script: root.join(SCRIPT_FILE),
        }
    }

    pub fn manifest_label(&self) -> String {
        label(&self.manifest)
    }

    pub fn script_label(&self) -> String {
        label(&self.script)
    }
}
