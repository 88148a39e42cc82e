//! Pure formatting functions for UI output.
//!
//! Maps check results to status glyphs and prints the report. Nothing here
//! decides whether a release is valid.

use console::style;

use crate::boundary::CheckWarning;
use crate::cli::ReleaseReport;
use crate::domain::{ConflictStatus, SequenceStatus, TagSet};

/// Glyph shown for a check result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Ok,
    NotOk,
    Caution,
    Unknown,
}

impl Indicator {
    /// Coloured glyph for terminal output
    pub fn glyph(&self) -> String {
        match self {
            Indicator::Ok => style("●").green().to_string(),
            Indicator::NotOk => style("●").red().to_string(),
            Indicator::Caution => style("●").yellow().to_string(),
            Indicator::Unknown => style("?").dim().to_string(),
        }
    }
}

pub fn format_indicator(valid: bool) -> Indicator {
    if valid {
        Indicator::Ok
    } else {
        Indicator::NotOk
    }
}

pub fn sequence_indicator(status: SequenceStatus) -> Indicator {
    match status {
        SequenceStatus::Ok => Indicator::Ok,
        SequenceStatus::Invalid => Indicator::NotOk,
        SequenceStatus::Caution => Indicator::Caution,
        SequenceStatus::Unknown => Indicator::Unknown,
    }
}

pub fn conflict_indicator(status: ConflictStatus) -> Indicator {
    match status {
        ConflictStatus::NoConflict => Indicator::Ok,
        ConflictStatus::Conflict => Indicator::NotOk,
        ConflictStatus::Unknown => Indicator::Unknown,
    }
}

pub fn up_to_date_indicator(up_to_date: Option<bool>) -> Indicator {
    match up_to_date {
        Some(true) => Indicator::Ok,
        Some(false) => Indicator::NotOk,
        None => Indicator::Unknown,
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a failure message with red cross.
pub fn display_failure(message: &str) {
    println!("{} {}", style("✗").red(), message);
}

/// Display a check warning to the user.
pub fn display_warning(warning: &CheckWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

fn display_row(item: &str, value: &str, indicator: Indicator) {
    println!("  {:<22} {:<16} {}", item, value, indicator.glyph());
}

/// Display the full release check report.
///
/// Shows the version string checks, the git checks and any warnings.
pub fn display_report(report: &ReleaseReport) {
    println!("\n{}", style("Version String Checks").bold());
    display_row(
        "format",
        &report.candidate,
        format_indicator(report.format_valid),
    );
    display_row(
        "sequence",
        &report.verdict.sequence.to_string(),
        sequence_indicator(report.verdict.sequence),
    );
    display_row(
        "conflict",
        &report.verdict.conflict.to_string(),
        conflict_indicator(report.verdict.conflict),
    );

    println!("\n{}", style("Git Checks").bold());
    display_row(
        "latest release tag",
        report.latest_release().unwrap_or("-"),
        match report.latest_release() {
            Some(_) => Indicator::Ok,
            None => Indicator::Unknown,
        },
    );
    let current = report.context.current_branch.as_deref().unwrap_or("(detached)");
    display_row(
        "current branch",
        current,
        if report.context.is_on_release_branch() {
            Indicator::Ok
        } else {
            Indicator::Caution
        },
    );
    display_row(
        "not tracked items",
        &report.worktree.untracked.len().to_string(),
        format_indicator(report.worktree.untracked.is_empty()),
    );
    display_row(
        "not committed items",
        &report.worktree.uncommitted.len().to_string(),
        format_indicator(report.worktree.uncommitted.is_empty()),
    );
    display_row(
        "up-to-date",
        match report.up_to_date {
            Some(true) => "yes",
            Some(false) => "no",
            None => "unknown",
        },
        up_to_date_indicator(report.up_to_date),
    );

    if !report.warnings.is_empty() {
        println!();
        for warning in &report.warnings {
            display_warning(warning);
        }
    }
}

/// Display classified release tags, release branch first.
pub fn display_tags(tags: &TagSet, release_branch: &str) {
    println!(
        "{}",
        style(format!("Release tags on '{}':", release_branch)).bold()
    );
    if tags.main().is_empty() {
        println!("  (none)");
    }
    for tag in tags.main() {
        println!("  - {}", tag.name);
    }

    println!("{}", style("Other release tags:").bold());
    if tags.other().is_empty() {
        println!("  (none)");
    }
    for tag in tags.other() {
        println!("  - {}", tag.name);
    }
}
