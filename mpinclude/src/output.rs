use crate::include::{FileOutcome, RunSummary};
use crate::utils::normalize_display_path;
use colored::Colorize;
use std::io::Write;

/// Print the banner shown before a dry run.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_dry_run_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}",
        "[DRY-RUN] Files that would be rewritten:".yellow()
    )
}

/// Print one file's outcome.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_file_outcome(
    writer: &mut impl Write,
    outcome: &FileOutcome,
    dry_run: bool,
) -> std::io::Result<()> {
    let path = normalize_display_path(&outcome.path);
    if outcome.replacements == 0 {
        let status = if outcome.written {
            "no match (rewritten)"
        } else {
            "no match"
        };
        return writeln!(writer, "  {} {}", path.dimmed(), status.dimmed());
    }

    let noun = if outcome.replacements == 1 {
        "include"
    } else {
        "includes"
    };
    let verb = if dry_run { "would rewrite" } else { "rewrote" };
    writeln!(
        writer,
        "  {} {verb} {} {noun}",
        path.green(),
        outcome.replacements.to_string().bold()
    )
}

/// Print the totals line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(
    writer: &mut impl Write,
    summary: &RunSummary,
    dry_run: bool,
) -> std::io::Result<()> {
    let label = if dry_run { "[DRY-RUN] " } else { "" };
    let line = format!(
        "{label}{} of {} files changed, {} includes rewritten",
        summary.files_changed(),
        summary.files_processed(),
        summary.total_replacements()
    );
    writeln!(writer, "{}", line.bold())
}
