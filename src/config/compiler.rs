//! Environment compilation.
//!
//! Compilation concatenates the seeded variables, the common file, and the
//! environment file into one text, validates every line of it against the
//! assignment grammar, and parses the result into an ordered map. Later
//! lines overwrite earlier ones that share a key, which is how the
//! environment file overrides the common file and both override the seeds.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::env_file::{parse, EnvMap};
use crate::config::resolver::EnvironmentSources;
use crate::error::{EnvelopeError, Result};
use crate::ui::UserInterface;

/// Seeded variable holding the compiled environment's name.
pub const ENV_VAR: &str = "ENVELOPE_ENV";

/// Seeded variable holding the compiled environment's source directory.
pub const DIR_VAR: &str = "ENVELOPE_DIR";

/// Matches the `KEY =` head of an assignment line. Anything after the first
/// `=` is value text and unconstrained.
static ASSIGNMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Za-z_][A-Za-z0-9_]*\s*=").unwrap());

/// Validate .env text against the line grammar.
///
/// A line is valid if it is entirely whitespace, a `#` comment, or an
/// assignment to an identifier (`[A-Za-z_][A-Za-z0-9_]*`). The first
/// offending line fails with its 1-based number and trimmed content.
pub fn validate(text: &str) -> Result<()> {
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if !ASSIGNMENT_LINE.is_match(line) {
            return Err(EnvelopeError::InvalidFormat {
                line: index + 1,
                content: trimmed.to_string(),
            });
        }
    }

    Ok(())
}

/// Compile an environment into its final variable map.
///
/// The merged text starts with the seeded `ENVELOPE_ENV` and `ENVELOPE_DIR`
/// assignments, then appends the common file and the environment file in
/// that order. One notice per contributing file goes through `ui` before
/// validation, so a malformed file is still named in the output. The whole
/// merged text is validated before anything is parsed; a bad line in any
/// source aborts the compile.
pub fn compile(sources: &EnvironmentSources, ui: &mut dyn UserInterface) -> Result<EnvMap> {
    let mut text = String::new();
    text.push_str(&format!("{}={}\n", ENV_VAR, sources.name));
    text.push_str(&format!("{}={}\n", DIR_VAR, sources.dir.display()));

    if let Some(path) = &sources.common_file {
        ui.notice(&format!("common: {}", path.display()));
        append_file(&mut text, path)?;
    }
    match &sources.env_file {
        Some(path) => {
            ui.notice(&format!("{}: {}", sources.name, path.display()));
            append_file(&mut text, path)?;
        }
        None => ui.warning(&format!("environment '{}' has no .env file", sources.name)),
    }

    validate(&text)?;

    let map = parse(&text);
    tracing::debug!(
        "compiled environment '{}' with {} variables",
        sources.name,
        map.len()
    );
    Ok(map)
}

/// Read the environment name back from a compiled output file.
///
/// The file goes through the same validate-then-parse path as compilation,
/// so a hand-edited broken file surfaces as [`EnvelopeError::InvalidFormat`]
/// rather than a missing variable.
pub fn current_environment(output_file: &Path) -> Result<String> {
    let text = match fs::read_to_string(output_file) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(EnvelopeError::MissingCurrentEnvironment {
                path: output_file.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    validate(&text)?;

    match parse(&text).get(ENV_VAR) {
        Some(name) => Ok(name.to_string()),
        None => Err(EnvelopeError::MissingCurrentEnvironment {
            path: output_file.to_path_buf(),
        }),
    }
}

/// Append a file's contents, keeping the merged text newline-terminated so
/// line numbers stay aligned with the contributing files.
fn append_file(text: &mut String, path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    text.push_str(&contents);
    if !contents.ends_with('\n') {
        text.push('\n');
    }
    Ok(())
}
