//! [`PolicyDir`] scratch directory for tests that read documents from disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the suppression config written by [`PolicyDir::write_config`]
pub const CONFIG_FILE: &str = "suppress.toml";

/// A temporary directory holding policy documents and configs.
///
/// # Example
///
/// ```rust
/// use policy_test_utils::{PolicyDir, fixtures};
///
/// let dir = PolicyDir::new();
/// let old = dir.write("old.xml", fixtures::POLICY);
/// assert!(old.exists());
/// ```
pub struct PolicyDir {
    temp_dir: TempDir,
}

impl Default for PolicyDir {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyDir {
    /// Create an empty temporary directory.
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new()
                .unwrap_or_else(|e| panic!("PolicyDir::new: failed to create temp dir: {e}")),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` under the directory and return its path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("PolicyDir::write: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("PolicyDir::write: failed to write {name}: {e}"));
        path
    }

    /// Write a suppression config as [`CONFIG_FILE`] and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write(CONFIG_FILE, content)
    }
}
