//! Environment discovery and resolution.
//!
//! Turns names into the files behind them. Listing and resolution both run
//! layout detection first, so a mixed configuration directory fails before
//! any names are produced.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::layout::{
    detect_layout, flat_environment_name, is_reserved_dir, LayoutMode, ENV_FILE_NAME,
    FLAT_FILE_PREFIX,
};
use crate::error::{EnvelopeError, Result};

/// The resolved sources behind one environment.
///
/// Either file may be absent; compilation simply skips a missing one. The
/// environment itself must exist, so at least the directory (or, in flat
/// layout, the environment file) is always real.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSources {
    /// The requested environment name.
    pub name: String,
    /// Directory the environment resolves to. The environment subdirectory
    /// in directory layout, the configuration directory itself in flat
    /// layout.
    pub dir: PathBuf,
    /// The shared `.env` file at the configuration directory root, when
    /// present.
    pub common_file: Option<PathBuf>,
    /// The environment-specific file, when present.
    pub env_file: Option<PathBuf>,
}

/// List the environment names in a configuration directory.
///
/// In directory layout every non-reserved subdirectory is an environment,
/// whether or not it contains a `.env` file. In flat layout every
/// `.env.<name>` file is one. Names come back in directory-read order.
pub fn list_environments(config_dir: &Path) -> Result<Vec<String>> {
    let mode = detect_layout(config_dir)?;
    let mut names = Vec::new();

    for entry in fs::read_dir(config_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        match mode {
            LayoutMode::Directory => {
                if path.is_dir() && !is_reserved_dir(&name) {
                    names.push(name);
                }
            }
            LayoutMode::Flat => {
                if path.is_file() {
                    if let Some(env_name) = flat_environment_name(&name) {
                        names.push(env_name.to_string());
                    }
                }
            }
        }
    }

    tracing::debug!("found {} environments in {}", names.len(), config_dir.display());
    Ok(names)
}

/// Resolve an environment name to its contributing files.
///
/// Directory layout requires `<config_dir>/<name>/` to exist; flat layout
/// requires `<config_dir>/.env.<name>`. The common file is attached when
/// present in either layout. Reserved directory names and names that are
/// empty or path-like are never environments, so every name that resolves
/// also appears in [`list_environments`]. An unknown name reports the one
/// path that was probed for it.
pub fn resolve_environment(config_dir: &Path, name: &str) -> Result<EnvironmentSources> {
    // An empty name would resolve to the configuration directory itself,
    // and a path-like one to something outside it
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(EnvelopeError::EnvironmentNotFound {
            name: name.to_string(),
            probed: config_dir.to_path_buf(),
        });
    }

    let mode = detect_layout(config_dir)?;
    let common = config_dir.join(ENV_FILE_NAME);
    let common_file = if common.is_file() { Some(common) } else { None };

    let sources = match mode {
        LayoutMode::Directory => {
            let dir = config_dir.join(name);
            // A reserved directory may exist on disk but is not an environment
            if is_reserved_dir(name) || !dir.is_dir() {
                return Err(EnvelopeError::EnvironmentNotFound {
                    name: name.to_string(),
                    probed: dir,
                });
            }

            let file = dir.join(ENV_FILE_NAME);
            let env_file = if file.is_file() { Some(file) } else { None };
            EnvironmentSources {
                name: name.to_string(),
                dir,
                common_file,
                env_file,
            }
        }
        LayoutMode::Flat => {
            let file = config_dir.join(format!("{}{}", FLAT_FILE_PREFIX, name));
            if !file.is_file() {
                return Err(EnvelopeError::EnvironmentNotFound {
                    name: name.to_string(),
                    probed: file,
                });
            }

            EnvironmentSources {
                name: name.to_string(),
                dir: config_dir.to_path_buf(),
                common_file,
                env_file: Some(file),
            }
        }
    };

    tracing::debug!(
        "resolved environment '{}' in {}",
        sources.name,
        sources.dir.display()
    );
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn directory_config(temp: &TempDir) -> PathBuf {
        let dir = temp.path().join("env");
        fs::create_dir_all(dir.join("development")).unwrap();
        fs::create_dir_all(dir.join("staging")).unwrap();
        fs::write(dir.join(".env"), "SHARED=1\n").unwrap();
        fs::write(dir.join("development/.env"), "A=dev\n").unwrap();
        dir
    }

    fn flat_config(temp: &TempDir) -> PathBuf {
        let dir = temp.path().join("env");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(".env"), "SHARED=1\n").unwrap();
        fs::write(dir.join(".env.development"), "A=dev\n").unwrap();
        fs::write(dir.join(".env.staging"), "A=stage\n").unwrap();
        dir
    }

    #[test]
    fn lists_directory_layout_environments() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);

        let mut names = list_environments(&dir).unwrap();
        names.sort();

        assert_eq!(names, vec!["development", "staging"]);
    }

    #[test]
    fn lists_flat_layout_environments() {
        let temp = TempDir::new().unwrap();
        let dir = flat_config(&temp);

        let mut names = list_environments(&dir).unwrap();
        names.sort();

        assert_eq!(names, vec!["development", "staging"]);
    }

    #[test]
    fn listing_skips_reserved_directories() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);
        fs::create_dir(dir.join("node_modules")).unwrap();

        let names = list_environments(&dir).unwrap();

        assert!(!names.contains(&"node_modules".to_string()));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn listing_includes_subdirectory_without_env_file() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);
        fs::create_dir(dir.join("empty")).unwrap();

        let names = list_environments(&dir).unwrap();

        assert!(names.contains(&"empty".to_string()));
    }

    #[test]
    fn listing_fails_on_mixed_layout() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);
        fs::write(dir.join(".env.production"), "A=1\n").unwrap();

        let err = list_environments(&dir).unwrap_err();

        assert!(matches!(err, EnvelopeError::IncompatibleModes { .. }));
    }

    #[test]
    fn resolves_directory_layout_environment() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);

        let sources = resolve_environment(&dir, "development").unwrap();

        assert_eq!(sources.name, "development");
        assert_eq!(sources.dir, dir.join("development"));
        assert_eq!(sources.common_file, Some(dir.join(".env")));
        assert_eq!(sources.env_file, Some(dir.join("development/.env")));
    }

    #[test]
    fn resolves_directory_environment_without_env_file() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);

        let sources = resolve_environment(&dir, "staging").unwrap();

        assert_eq!(sources.dir, dir.join("staging"));
        assert_eq!(sources.env_file, None);
    }

    #[test]
    fn resolves_flat_layout_environment() {
        let temp = TempDir::new().unwrap();
        let dir = flat_config(&temp);

        let sources = resolve_environment(&dir, "staging").unwrap();

        assert_eq!(sources.name, "staging");
        assert_eq!(sources.dir, dir);
        assert_eq!(sources.common_file, Some(dir.join(".env")));
        assert_eq!(sources.env_file, Some(dir.join(".env.staging")));
    }

    #[test]
    fn missing_common_file_resolves_to_none() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("env");
        fs::create_dir_all(dir.join("development")).unwrap();

        let sources = resolve_environment(&dir, "development").unwrap();

        assert_eq!(sources.common_file, None);
    }

    #[test]
    fn unknown_directory_environment_reports_probed_path() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);

        let err = resolve_environment(&dir, "production").unwrap_err();

        match err {
            EnvelopeError::EnvironmentNotFound { name, probed } => {
                assert_eq!(name, "production");
                assert_eq!(probed, dir.join("production"));
            }
            other => panic!("expected EnvironmentNotFound, got {:?}", other),
        }
    }

    #[test]
    fn unknown_flat_environment_reports_probed_path() {
        let temp = TempDir::new().unwrap();
        let dir = flat_config(&temp);

        let err = resolve_environment(&dir, "production").unwrap_err();

        match err {
            EnvelopeError::EnvironmentNotFound { name, probed } => {
                assert_eq!(name, "production");
                assert_eq!(probed, dir.join(".env.production"));
            }
            other => panic!("expected EnvironmentNotFound, got {:?}", other),
        }
    }

    #[test]
    fn empty_name_is_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);

        let err = resolve_environment(&dir, "").unwrap_err();

        assert!(matches!(err, EnvelopeError::EnvironmentNotFound { .. }));
    }

    #[test]
    fn reserved_directory_name_is_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);
        fs::create_dir(dir.join("node_modules")).unwrap();
        fs::write(dir.join("node_modules/.env"), "A=1\n").unwrap();

        let names = list_environments(&dir).unwrap();
        let err = resolve_environment(&dir, "node_modules").unwrap_err();

        assert!(!names.contains(&"node_modules".to_string()));
        assert!(matches!(err, EnvelopeError::EnvironmentNotFound { .. }));
    }

    #[test]
    fn dot_names_are_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);

        // Both point at real directories, the config dir and the project root
        for name in [".", ".."] {
            let err = resolve_environment(&dir, name).unwrap_err();
            assert!(matches!(err, EnvelopeError::EnvironmentNotFound { .. }));
        }
    }

    #[test]
    fn names_with_path_separators_are_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = directory_config(&temp);
        fs::create_dir_all(dir.join("development/nested")).unwrap();

        for name in ["development/nested", "development\\nested"] {
            let err = resolve_environment(&dir, name).unwrap_err();
            assert!(matches!(err, EnvelopeError::EnvironmentNotFound { .. }));
        }
    }

    #[test]
    fn resolution_fails_on_mixed_layout() {
        let temp = TempDir::new().unwrap();
        let dir = flat_config(&temp);
        fs::create_dir(dir.join("development")).unwrap();

        let err = resolve_environment(&dir, "development").unwrap_err();

        assert!(matches!(err, EnvelopeError::IncompatibleModes { .. }));
    }
}
