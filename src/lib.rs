//! dirgenie - organize a directory's files into per-type folders
//!
//! This library classifies files by extension, groups them into category or
//! per-extension folders, and moves them with collision-safe renaming. Every
//! run can be simulated first with a dry run that reports the exact same plan.

pub mod cli;
pub mod file_category;
pub mod file_organizer;
pub mod output;

pub use cli::{Cli, run_cli};
pub use file_category::{Category, GroupingMode, classify};
pub use file_organizer::{
    FileEntry, FileOrganizer, Group, OrganizeError, OrganizeObserver, OrganizeOptions,
    OrganizeReport, OrganizeResult, PlannedMove,
};
pub use output::{ConsoleReporter, OutputFormatter};
