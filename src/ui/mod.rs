//! Terminal user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use envelope::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.notice("common: env/.env");
//! ui.success("Now using environment 'development'");
//!
//! assert!(ui.has_notice("env/.env"));
//! assert!(ui.has_success("development"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, EnvelopeTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests. Compilation takes it as an
/// explicit parameter, so library callers decide how notices are rendered
/// instead of the core writing to a global logger.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational notice. Suppressed in quiet mode.
    fn notice(&mut self, msg: &str);

    /// Display primary output. Always shown.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
