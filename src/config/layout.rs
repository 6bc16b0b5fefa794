//! Configuration layout detection.
//!
//! A configuration directory stores its environments in exactly one of two
//! layouts. Directory layout keeps one subdirectory per environment, each
//! with its own `.env` file; flat layout keeps sibling `.env.<name>` files
//! instead. Detection runs before any listing or resolution so mixed trees
//! are rejected up front.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{EnvelopeError, Result};

/// File name shared by the common file and per-environment files in
/// directory layout.
pub const ENV_FILE_NAME: &str = ".env";

/// Prefix of flat-layout environment files (`.env.<name>`).
pub const FLAT_FILE_PREFIX: &str = ".env.";

/// Directory names that never count as environments.
pub const RESERVED_DIR_NAMES: &[&str] = &["node_modules"];

/// How environments are laid out inside the configuration directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// One subdirectory per environment, each holding a `.env` file.
    Directory,
    /// One `.env.<name>` file per environment.
    Flat,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Directory => write!(f, "directory"),
            LayoutMode::Flat => write!(f, "flat"),
        }
    }
}

/// The flat-layout environment name for a file name, if it is one.
///
/// The common file `.env` has no suffix and never matches, and neither does
/// a bare `.env.`.
pub fn flat_environment_name(file_name: &str) -> Option<&str> {
    match file_name.strip_prefix(FLAT_FILE_PREFIX) {
        Some("") | None => None,
        Some(name) => Some(name),
    }
}

/// Whether a directory name is reserved and excluded from environments.
pub fn is_reserved_dir(name: &str) -> bool {
    RESERVED_DIR_NAMES.contains(&name)
}

/// Classify a configuration directory as directory or flat layout.
///
/// Any non-reserved subdirectory marks directory layout; any `.env.<name>`
/// file marks flat layout. Finding markers for both is an error that names
/// one offender of each kind. A directory with no markers at all defaults
/// to directory layout, so an empty tree lists zero environments instead of
/// failing.
pub fn detect_layout(config_dir: &Path) -> Result<LayoutMode> {
    let mut subdir: Option<String> = None;
    let mut flat_file: Option<String> = None;

    for entry in fs::read_dir(config_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        if path.is_dir() {
            if !is_reserved_dir(&name) && subdir.is_none() {
                subdir = Some(name);
            }
        } else if path.is_file() && flat_environment_name(&name).is_some() && flat_file.is_none() {
            flat_file = Some(name);
        }

        if let (Some(subdir), Some(file)) = (&subdir, &flat_file) {
            return Err(EnvelopeError::IncompatibleModes {
                dir: config_dir.to_path_buf(),
                subdir: subdir.clone(),
                file: file.clone(),
            });
        }
    }

    let mode = if flat_file.is_some() {
        LayoutMode::Flat
    } else {
        LayoutMode::Directory
    };
    tracing::debug!("detected {} layout in {}", mode, config_dir.display());
    Ok(mode)
}
