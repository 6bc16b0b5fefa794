//! Error types for envelope operations.
//!
//! This module defines [`EnvelopeError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `EnvelopeError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `EnvelopeError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envelope operations.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// No `env` configuration directory in the start directory or any parent.
    #[error("No 'env' configuration directory found in {start} or any parent directory")]
    ConfigNotFound { start: PathBuf },

    /// The configuration directory mixes directory and flat layout markers.
    #[error(
        "Configuration directory {dir} mixes layouts: subdirectory '{subdir}' implies directory mode while '{file}' implies flat mode; remove one of them"
    )]
    IncompatibleModes {
        dir: PathBuf,
        subdir: String,
        file: String,
    },

    /// The requested environment has no backing directory or file.
    #[error("Environment '{name}' not found: {probed} does not exist")]
    EnvironmentNotFound { name: String, probed: PathBuf },

    /// A merged line is neither blank, a comment, nor a valid assignment.
    #[error("Invalid format on line {line}: {content}")]
    InvalidFormat { line: usize, content: String },

    /// The compiled output file is absent or lacks the environment marker.
    #[error("No environment in use: {path} is missing or does not define ENVELOPE_ENV")]
    MissingCurrentEnvironment { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envelope operations.
pub type Result<T> = std::result::Result<T, EnvelopeError>;
