//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use envelope::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.notice("common: env/.env");
//! ui.success("Done");
//!
//! // Assert on captured output
//! assert!(ui.has_notice("env/.env"));
//! assert!(ui.successes().contains(&"Done".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures everything unconditionally; mode-based suppression is the
/// terminal implementation's concern.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    notices: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured notices.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific notice was shown.
    pub fn has_notice(&self, msg: &str) -> bool {
        self.notices.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        self.notices.clear();
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn notice(&mut self, msg: &str) {
        self.notices.push(msg.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_all_output_kinds() {
        let mut ui = MockUI::new();
        ui.notice("a notice");
        ui.message("a message");
        ui.success("a success");
        ui.warning("a warning");
        ui.error("an error");

        assert_eq!(ui.notices(), &["a notice".to_string()]);
        assert_eq!(ui.messages(), &["a message".to_string()]);
        assert_eq!(ui.successes(), &["a success".to_string()]);
        assert_eq!(ui.warnings(), &["a warning".to_string()]);
        assert_eq!(ui.errors(), &["an error".to_string()]);
    }

    #[test]
    fn has_helpers_match_substrings() {
        let mut ui = MockUI::new();
        ui.message("compiled 5 variables");

        assert!(ui.has_message("5 variables"));
        assert!(!ui.has_message("missing"));
    }

    #[test]
    fn with_mode_sets_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn clear_resets_captured_output() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.error("two");

        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn interactive_defaults_to_false() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());

        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
