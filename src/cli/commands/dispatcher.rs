//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    start_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher starting the project search from `start_dir`.
    pub fn new(start_dir: PathBuf) -> Self {
        Self { start_dir }
    }

    /// Get the directory the project search starts from.
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. With no subcommand, lists environments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.start_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Get(args)) => {
                let cmd = super::get::GetCommand::new(&self.start_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Use(args)) => {
                let cmd = super::use_env::UseCommand::new(&self.start_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Current) => {
                let cmd = super::current::CurrentCommand::new(&self.start_dir);
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::list::ListCommand::new(
                    &self.start_dir,
                    crate::cli::args::ListArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
