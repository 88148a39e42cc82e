//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::domain::version::is_partial_version;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_failure, display_report, display_success, display_tags,
    display_warning,
};

/// Prompts user for the version to release.
///
/// Re-prompts while the input could not even become a version (letters,
/// `v` prefixes, more than three components). A complete but otherwise
/// invalid version is returned as typed so the checks can report on it.
///
/// # Returns
/// * `Ok(String)` - The trimmed input
/// * `Err` - If stdin is closed or an input error occurs
pub fn prompt_candidate() -> Result<String> {
    let stdin = io::stdin();
    read_candidate(&mut stdin.lock(), &mut io::stdout())
}

fn read_candidate<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        write!(output, "\nRequested release version (X.X.X): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(anyhow::anyhow!("No release version entered"));
        }

        let candidate = line.trim();
        if is_partial_version(candidate) {
            return Ok(candidate.to_string());
        }

        writeln!(output, "'{}' is not a version number", candidate)?;
    }
}
