//! Output verbosity mode.

/// Output verbosity mode.
///
/// Quiet keeps primary output (compiled text, environment names) and errors
/// so the tool stays usable in pipelines, and drops everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including per-command detail.
    Verbose,
    /// Show notices and status alongside primary output.
    #[default]
    Normal,
    /// Show primary output and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows notices and status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows extra per-command detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
