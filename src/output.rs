//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output. [`ConsoleReporter`]
//! renders organizer events as they happen; the `*_line` helpers build the
//! plain text so it can be checked without a terminal.

use crate::file_organizer::{
    FileEntry, Group, OrganizeError, OrganizeObserver, OrganizeOptions, OrganizeReport,
    PlannedMove,
};
use colored::*;
use std::path::Path;

/// Width of the separator printed under the run header.
const SEPARATOR_WIDTH: usize = 50;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green.
    pub fn success(message: &str) {
        println!("{}", message.green());
    }

    /// Prints an error message in red with an X mark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirgenie::output::OutputFormatter;
    /// OutputFormatter::error("Error: Directory '/tmp/missing' does not exist.");
    /// ```
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message.red());
    }

    /// Prints a failure inline with the regular output, in red on stdout.
    pub fn failure(message: &str) {
        println!("{}", message.red());
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message.yellow());
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", message.yellow());
    }

    /// Prints the lines describing the run about to start.
    pub fn run_header(directory: &Path, options: &OrganizeOptions) {
        Self::info(&format!("Organizing directory: {}", directory.display()));
        Self::plain(&format!("Grouping by: {}", options.mode.label()));
        Self::plain(&format!("Mode: {}", mode_label(options.dry_run)));
        Self::plain(&"-".repeat(SEPARATOR_WIDTH));
    }
}

/// `1 file`, `2 files`
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}

/// Label for the execution mode.
pub fn mode_label(dry_run: bool) -> &'static str {
    if dry_run { "Dry run" } else { "Execute" }
}

/// `Found 3 files in 2 different types/categories:`
pub fn found_line(files_found: usize, group_count: usize) -> String {
    format!(
        "Found {} in {} different types/categories:",
        pluralize(files_found, "file"),
        group_count
    )
}

/// `Created folder: ...` or `Would create folder: ...`
pub fn folder_line(folder: &Path, dry_run: bool) -> String {
    let verb = if dry_run { "Would create" } else { "Created" };
    format!("{} folder: {}", verb, folder.display())
}

/// `  Moved: a.txt -> Documents/a_1.txt` or the dry-run equivalent.
pub fn move_line(planned: &PlannedMove, dry_run: bool) -> String {
    let verb = if dry_run { "Would move" } else { "Moved" };
    format!(
        "  {}: {} -> {}/{}",
        verb, planned.file_name, planned.group, planned.destination_name
    )
}

/// `  Error moving a.txt: <reason>`
pub fn move_error_line(file: &FileEntry, error: &OrganizeError) -> String {
    format!("  Error moving {}: {}", file.name, error)
}

/// `Error: Failed to create directory ...`
pub fn folder_error_line(error: &OrganizeError) -> String {
    format!("Error: {}", error)
}

/// Final summary line of a run.
pub fn summary_line(report: &OrganizeReport) -> String {
    let folders = pluralize(report.folder_count(), "folder");
    if report.dry_run {
        format!(
            "Dry run complete! Would move {} into {}.",
            pluralize(report.moves.len(), "file"),
            folders
        )
    } else {
        format!(
            "Organization complete! Moved {} into {}.",
            pluralize(report.moved, "file"),
            folders
        )
    }
}

/// Prints organizer events to the terminal as they happen.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl OrganizeObserver for ConsoleReporter {
    fn no_files(&mut self, directory: &Path) {
        OutputFormatter::plain(&format!("No files found in '{}'.", directory.display()));
    }

    fn scan_complete(&mut self, files_found: usize, groups: &[Group], options: &OrganizeOptions) {
        OutputFormatter::plain(&found_line(files_found, groups.len()));
        for group in groups {
            OutputFormatter::plain(&format!(
                "  {}: {}",
                group.name,
                pluralize(group.files.len(), "file")
            ));
        }
        if options.dry_run {
            println!();
            OutputFormatter::dry_run_notice(
                "DRY RUN - No files will be moved. Here's what would happen:",
            );
        }
        println!();
    }

    fn folder_ready(&mut self, folder: &Path, dry_run: bool) {
        OutputFormatter::plain(&folder_line(folder, dry_run).bold().to_string());
    }

    fn folder_failed(&mut self, _folder: &Path, error: &OrganizeError) {
        OutputFormatter::failure(&folder_error_line(error));
    }

    fn file_moved(&mut self, planned: &PlannedMove, dry_run: bool) {
        let line = move_line(planned, dry_run);
        if planned.renamed() {
            OutputFormatter::plain(&line.yellow().to_string());
        } else {
            OutputFormatter::plain(&line);
        }
    }

    fn file_failed(&mut self, file: &FileEntry, error: &OrganizeError) {
        OutputFormatter::failure(&move_error_line(file, error));
    }

    fn finished(&mut self, report: &OrganizeReport) {
        if report.files_found == 0 {
            return;
        }
        println!();
        OutputFormatter::success(&summary_line(report));
        if !report.is_complete_success() {
            OutputFormatter::warning(&format!(
                "{} could not be organized. Please review errors above.",
                pluralize(report.failures.len(), "file")
            ));
        }
    }
}
