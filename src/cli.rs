//! Command-line interface module for dirgenie.
//!
//! This module handles all CLI-related functionality including:
//! - Argument parsing (clap)
//! - Resolving the target directory
//! - Running the organizer with console or JSON output

use crate::file_category::GroupingMode;
use crate::file_organizer::{
    FileOrganizer, OrganizeObserver, OrganizeOptions, OrganizeReport, SilentObserver,
};
use crate::output::{ConsoleReporter, OutputFormatter};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::debug;

const EXAMPLES: &str = "\
Examples:
  dirgenie /path/to/directory
  dirgenie ~/Downloads --extensions
  dirgenie ./messy_folder --dry-run";

/// Organize files in a directory into folders based on file types.
#[derive(Parser, Debug, Clone)]
#[command(name = "dirgenie", version, about, after_help = EXAMPLES)]
pub struct Cli {
    /// Directory path to organize
    pub directory: PathBuf,

    /// Group by exact file extensions instead of categories
    #[arg(long)]
    pub extensions: bool,

    /// Show what would be done without actually moving files
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON instead of the human-readable summary
    #[arg(long)]
    pub json: bool,

    /// Enable debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Organizer options selected by the flags.
    pub fn options(&self) -> OrganizeOptions {
        OrganizeOptions {
            mode: if self.extensions {
                GroupingMode::Extension
            } else {
                GroupingMode::Category
            },
            dry_run: self.dry_run,
        }
    }
}

/// Makes `path` absolute against the current directory without resolving symlinks.
pub fn resolve_directory(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Runs the CLI application for parsed arguments.
///
/// Returns the run report, or a human-readable message when the target
/// directory is invalid or cannot be read. Per-file failures do not make
/// the run fail; they are listed in the report.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use dirgenie::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from(["dirgenie", "/path/to/directory", "--dry-run"]);
/// match run_cli(&cli) {
///     Ok(report) => println!("{} files planned", report.moves.len()),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
pub fn run_cli(cli: &Cli) -> Result<OrganizeReport, String> {
    let directory = resolve_directory(&cli.directory);
    let options = cli.options();
    debug!(directory = %directory.display(), ?options, json = cli.json, "starting run");

    let mut console = ConsoleReporter::new();
    let mut silent = SilentObserver;
    let observer: &mut dyn OrganizeObserver = if cli.json {
        &mut silent
    } else {
        OutputFormatter::run_header(&directory, &options);
        &mut console
    };

    let report = FileOrganizer::organize(&directory, options, observer)
        .map_err(|e| format!("Error: {}", e))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Error serializing report: {}", e))?;
        println!("{}", json);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["dirgenie", "some/dir"]);
        assert_eq!(cli.directory, PathBuf::from("some/dir"));
        assert_eq!(cli.options(), OrganizeOptions::default());
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["dirgenie", "dir", "--extensions", "--dry-run"]);
        let options = cli.options();
        assert_eq!(options.mode, GroupingMode::Extension);
        assert!(options.dry_run);
    }

    #[test]
    fn test_cli_requires_directory() {
        assert!(Cli::try_parse_from(["dirgenie"]).is_err());
    }

    #[test]
    fn test_resolve_directory_is_absolute() {
        assert!(resolve_directory(Path::new("relative/dir")).is_absolute());
        assert_eq!(
            resolve_directory(Path::new("/already/absolute")),
            PathBuf::from("/already/absolute")
        );
    }

    #[test]
    fn test_run_cli_missing_directory() {
        let cli = Cli::parse_from(["dirgenie", "/definitely/not/here/dirgenie", "--json"]);
        let err = run_cli(&cli).unwrap_err();
        assert!(err.starts_with("Error: Directory '"));
        assert!(err.ends_with("does not exist."));
    }
}
