//! Get command implementation.
//!
//! The `envelope get` command compiles an environment and prints the result
//! without writing anything.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::GetArgs;
use crate::config::{compile, resolve_environment, ProjectRoot};
use crate::error::{EnvelopeError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The get command implementation.
pub struct GetCommand {
    start_dir: PathBuf,
    args: GetArgs,
}

impl GetCommand {
    /// Create a new get command.
    pub fn new(start_dir: &Path, args: GetArgs) -> Self {
        Self {
            start_dir: start_dir.to_path_buf(),
            args,
        }
    }

    /// Get the directory the project search starts from.
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Get the command arguments.
    pub fn args(&self) -> &GetArgs {
        &self.args
    }
}

impl Command for GetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = match ProjectRoot::locate(&self.start_dir) {
            Ok(root) => root,
            Err(EnvelopeError::ConfigNotFound { start }) => {
                ui.error(&format!(
                    "No 'env' directory found in {} or any parent. Create one to get started.",
                    start.display()
                ));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let sources = resolve_environment(&root.config_dir(), &self.args.name)?;
        let vars = compile(&sources, ui)?;

        if self.args.json {
            let text = if ui.is_interactive() {
                serde_json::to_string_pretty(&vars)
            } else {
                serde_json::to_string(&vars)
            }
            .context("serializing compiled environment")?;
            ui.message(&text);
        } else {
            ui.message(&vars.to_env_string());
        }

        Ok(CommandResult::success())
    }
}
