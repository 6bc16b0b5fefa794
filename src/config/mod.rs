//! Environment resolution and compilation.
//!
//! This module handles the whole pipeline:
//! - Project root discovery in [`root`]
//! - Layout detection in [`layout`]
//! - Environment resolution in [`resolver`]
//! - Merging and validation in [`compiler`]
//! - Ordered maps and .env parsing in [`env_file`]
//!
//! # Example
//!
//! ```
//! use envelope::config::{compile, resolve_environment, ProjectRoot};
//! use envelope::ui::MockUI;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config = temp.path().join("env");
//! fs::create_dir_all(config.join("development")).unwrap();
//! fs::write(config.join(".env"), "FOO=FOO\n").unwrap();
//! fs::write(config.join("development/.env"), "FOO=BAR\n").unwrap();
//!
//! let root = ProjectRoot::locate(temp.path()).unwrap();
//! let sources = resolve_environment(&root.config_dir(), "development").unwrap();
//! let vars = compile(&sources, &mut MockUI::new()).unwrap();
//!
//! assert_eq!(vars.get("FOO"), Some("BAR"));
//! assert_eq!(vars.get("ENVELOPE_ENV"), Some("development"));
//! ```
//!
//! # Configuration Layouts
//!
//! A project keeps its environments under `<root>/env/` in one of two
//! layouts, never both:
//! 1. Directory: `env/development/.env`, `env/staging/.env`, ...
//! 2. Flat: `env/.env.development`, `env/.env.staging`, ...
//!
//! Either way, an optional `env/.env` holds values shared by every
//! environment, and the environment-specific file overrides it key by key.

pub mod compiler;
pub mod env_file;
pub mod layout;
pub mod resolver;
pub mod root;

// Root re-exports
pub use root::{ProjectRoot, CONFIG_DIR_NAME, OUTPUT_FILE_NAME};

// Layout re-exports
pub use layout::{
    detect_layout, flat_environment_name, is_reserved_dir, LayoutMode, ENV_FILE_NAME,
    FLAT_FILE_PREFIX, RESERVED_DIR_NAMES,
};

// Resolver re-exports
pub use resolver::{list_environments, resolve_environment, EnvironmentSources};

// Compiler re-exports
pub use compiler::{compile, current_environment, validate, DIR_VAR, ENV_VAR};

// Env file re-exports
pub use env_file::EnvMap;
