//! Use command implementation.
//!
//! The `envelope use` command compiles an environment and writes the result
//! to the project root's `.env` file. The file is only written after the
//! whole merged text validates, so a malformed source never clobbers a
//! working output file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::UseArgs;
use crate::config::{compile, resolve_environment, ProjectRoot};
use crate::error::{EnvelopeError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The use command implementation.
pub struct UseCommand {
    start_dir: PathBuf,
    args: UseArgs,
}

impl UseCommand {
    /// Create a new use command.
    pub fn new(start_dir: &Path, args: UseArgs) -> Self {
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
    pub fn args(&self) -> &UseArgs {
        &self.args
    }
}

impl Command for UseCommand {
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

        let output_path = root.output_file();
        fs::write(&output_path, format!("{}\n", vars.to_env_string()))?;
        tracing::debug!(
            "wrote {} variables to {}",
            vars.len(),
            output_path.display()
        );

        if ui.output_mode().shows_detail() {
            ui.message(&vars.to_env_string());
        }
        ui.success(&format!(
            "Now using environment '{}' ({} variables in {})",
            sources.name,
            vars.len(),
            output_path.display()
        ));

        Ok(CommandResult::success())
    }
}
