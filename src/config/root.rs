//! Project root discovery.
//!
//! A project root is the closest directory at or above the start directory
//! that contains an `env/` configuration directory. All other paths the
//! tool touches hang off the located root.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{EnvelopeError, Result};

/// Name of the configuration directory that marks a project root.
pub const CONFIG_DIR_NAME: &str = "env";

/// Name of the compiled output file written into the project root.
pub const OUTPUT_FILE_NAME: &str = ".env";

/// A located project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    root: PathBuf,
}

impl ProjectRoot {
    /// Locate the project root by walking up from `start`.
    ///
    /// Checks `start` itself first, then each parent in turn, and stops at
    /// the first directory containing an `env/` subdirectory. A plain file
    /// named `env` does not count. Relative start paths are resolved against
    /// the current working directory before the walk.
    ///
    /// # Example
    ///
    /// ```
    /// use envelope::config::ProjectRoot;
    /// use tempfile::TempDir;
    /// use std::fs;
    ///
    /// let temp = TempDir::new().unwrap();
    /// fs::create_dir_all(temp.path().join("env")).unwrap();
    /// fs::create_dir_all(temp.path().join("src/deep")).unwrap();
    ///
    /// let root = ProjectRoot::locate(&temp.path().join("src/deep")).unwrap();
    /// assert_eq!(root.root(), temp.path());
    /// ```
    pub fn locate(start: &Path) -> Result<Self> {
        let start = absolute(start)?;
        let mut current = start.clone();

        loop {
            if current.join(CONFIG_DIR_NAME).is_dir() {
                tracing::debug!("project root found at {}", current.display());
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(EnvelopeError::ConfigNotFound { start });
            }
        }
    }

    /// The root directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `env/` configuration directory under the root.
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR_NAME)
    }

    /// The `.env` output file the `use` command writes into the root.
    pub fn output_file(&self) -> PathBuf {
        self.root.join(OUTPUT_FILE_NAME)
    }
}

/// Resolve a possibly-relative path against the current working directory.
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn locates_root_in_start_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("env")).unwrap();

        let root = ProjectRoot::locate(temp.path()).unwrap();

        assert_eq!(root.root(), temp.path());
    }

    #[test]
    fn locates_root_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("env")).unwrap();
        let nested = temp.path().join("src/app/components");
        fs::create_dir_all(&nested).unwrap();

        let root = ProjectRoot::locate(&nested).unwrap();

        assert_eq!(root.root(), temp.path());
    }

    #[test]
    fn prefers_closest_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("env")).unwrap();
        let inner = temp.path().join("packages/api");
        fs::create_dir_all(inner.join("env")).unwrap();

        let root = ProjectRoot::locate(&inner).unwrap();

        assert_eq!(root.root(), inner);
    }

    #[test]
    fn ignores_plain_file_named_env() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("env")).unwrap();
        let inner = temp.path().join("tools");
        fs::create_dir_all(&inner).unwrap();
        fs::write(inner.join("env"), "#!/bin/sh\n").unwrap();

        let root = ProjectRoot::locate(&inner).unwrap();

        assert_eq!(root.root(), temp.path());
    }

    #[test]
    fn fails_when_no_root_exists() {
        // Assumes no env/ directory exists between the tempdir and /
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let err = ProjectRoot::locate(&nested).unwrap_err();

        match err {
            EnvelopeError::ConfigNotFound { start } => assert_eq!(start, nested),
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn derived_paths_hang_off_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("env")).unwrap();

        let root = ProjectRoot::locate(temp.path()).unwrap();

        assert_eq!(root.config_dir(), temp.path().join("env"));
        assert_eq!(root.output_file(), temp.path().join(".env"));
    }
}
