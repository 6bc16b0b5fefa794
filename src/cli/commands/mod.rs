//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`envelope use`, `envelope list`)
//! - Shared project root discovery
//! - Consistent global flag handling

pub mod completions;
pub mod current;
pub mod dispatcher;
pub mod get;
pub mod list;
pub mod use_env;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
