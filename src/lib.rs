//! Envelope - Named environment compilation for dotenv files.
//!
//! Envelope turns a directory of per-environment dotenv fragments into a
//! single `.env` file. Environments live under an `env/` directory at the
//! project root, either as subdirectories (`env/development/.env`) or as
//! suffixed files (`env/.env.development`), and every environment inherits
//! a shared `env/.env` base before applying its own values.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Root discovery, layout detection, and environment compilation
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output, themes, and output modes
//!
//! # Example
//!
//! ```
//! use envelope::config::env_file::parse;
//!
//! // Later assignments win, as they would when sourcing the file.
//! let vars = parse("DATABASE_URL=postgres://localhost/app\nDATABASE_URL=postgres://localhost/app_test");
//! assert_eq!(vars.get("DATABASE_URL"), Some("postgres://localhost/app_test"));
//! ```
//!
//! For file-based environment compilation, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{EnvelopeError, Result};
