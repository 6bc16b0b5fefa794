//! Current command implementation.
//!
//! The `envelope current` command reports which environment the project's
//! `.env` file was last compiled from.

use std::path::{Path, PathBuf};

use crate::config::{current_environment, ProjectRoot};
use crate::error::{EnvelopeError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The current command implementation.
pub struct CurrentCommand {
    start_dir: PathBuf,
}

impl CurrentCommand {
    /// Create a new current command.
    pub fn new(start_dir: &Path) -> Self {
        Self {
            start_dir: start_dir.to_path_buf(),
        }
    }

    /// Get the directory the project search starts from.
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }
}

impl Command for CurrentCommand {
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

        match current_environment(&root.output_file()) {
            Ok(name) => {
                ui.message(&name);
                Ok(CommandResult::success())
            }
            Err(EnvelopeError::MissingCurrentEnvironment { .. }) => {
                ui.error("No environment in use. Run 'envelope use <name>' first.");
                Ok(CommandResult::failure(2))
            }
            Err(e) => Err(e),
        }
    }
}
