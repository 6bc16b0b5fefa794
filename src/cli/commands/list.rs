//! List command implementation.
//!
//! The `envelope list` command lists the environments available in the
//! project's configuration directory.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::ListArgs;
use crate::config::{current_environment, detect_layout, list_environments, ProjectRoot};
use crate::error::{EnvelopeError, Result};
use crate::ui::theme::EnvelopeTheme;
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    start_dir: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(start_dir: &Path, args: ListArgs) -> Self {
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
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
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

        let config_dir = root.config_dir();
        let mode = detect_layout(&config_dir)?;
        let names = list_environments(&config_dir)?;

        if self.args.json {
            let payload = serde_json::json!({
                "layout": mode,
                "environments": names,
            });
            let text = if ui.is_interactive() {
                serde_json::to_string_pretty(&payload)
            } else {
                serde_json::to_string(&payload)
            }
            .context("serializing environment list")?;
            ui.message(&text);
            return Ok(CommandResult::success());
        }

        if names.is_empty() {
            ui.warning(&format!(
                "No environments found in {}",
                config_dir.display()
            ));
            return Ok(CommandResult::success());
        }

        // Marking the active environment is best-effort; a missing or broken
        // output file just means no marker.
        let current = current_environment(&root.output_file()).ok();

        let theme = if should_use_colors() {
            EnvelopeTheme::new()
        } else {
            EnvelopeTheme::plain()
        };

        ui.message(&format!("Environments ({} layout):", mode));
        for name in &names {
            if current.as_deref() == Some(name.as_str()) {
                ui.message(&format!(
                    "  {} {}",
                    theme.highlight.apply_to(name),
                    theme.dim.apply_to("(current)")
                ));
            } else {
                ui.message(&format!("  {}", theme.highlight.apply_to(name)));
            }
        }

        Ok(CommandResult::success())
    }
}
