//! File organization system for moving files into group directories.
//!
//! A run validates the target directory, scans its direct children for
//! regular files, groups them with [`classify`], creates one folder per
//! group and moves every file into its folder. Name collisions are resolved
//! by appending `_1`, `_2`, ... to the file stem.
//!
//! Destination names are decided against the filesystem plus the set of
//! names already claimed earlier in the same run, so a dry run reports the
//! same plan a real run carries out.

use crate::file_category::{GroupingMode, classify};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during file organization.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The target directory does not exist.
    #[error("Directory '{}' does not exist.", path.display())]
    DirectoryNotFound { path: PathBuf },
    /// The target path exists but is not a directory.
    #[error("'{}' is not a directory.", path.display())]
    NotADirectory { path: PathBuf },
    /// The target directory could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDirFailed { path: PathBuf, source: io::Error },
    /// Failed to create a group directory.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },
    /// Failed to move a file to its group directory.
    #[error("{source}")]
    FileMoveFailure {
        source_path: PathBuf,
        destination: PathBuf,
        source: io::Error,
    },
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// A regular file found directly inside the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path of the file.
    pub path: PathBuf,
    /// Base name, lossily converted for display.
    pub name: String,
    /// Extension including the leading dot, or empty.
    pub extension: String,
}

impl FileEntry {
    /// Builds an entry from a file path. Returns `None` for paths without a
    /// file name component (`/`, `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_string();
        let extension = dotted_extension(path)
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default();

        Some(Self {
            path: path.to_path_buf(),
            name,
            extension,
        })
    }

    fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_else(|| self.path.as_os_str())
    }

    /// Name used for the `counter`-th collision: `stem_<counter>.ext`.
    fn numbered_name(&self, counter: usize) -> OsString {
        let mut name = match dotted_extension(&self.path) {
            Some(_) => self
                .path
                .file_stem()
                .unwrap_or_else(|| self.file_name())
                .to_os_string(),
            None => self.file_name().to_os_string(),
        };
        name.push(format!("_{}", counter));
        if let Some(ext) = dotted_extension(&self.path) {
            name.push(ext);
        }
        name
    }
}

/// `.ext` for paths with a non-empty extension.
fn dotted_extension(path: &Path) -> Option<OsString> {
    let ext = path.extension().filter(|ext| !ext.is_empty())?;
    let mut dotted = OsString::from(".");
    dotted.push(ext);
    Some(dotted)
}

/// A named bucket of files that share a destination folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub files: Vec<FileEntry>,
}

/// Options for a single organization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrganizeOptions {
    /// Grouping strategy.
    pub mode: GroupingMode,
    /// If true, report the plan without touching the filesystem.
    pub dry_run: bool,
}

/// One file's move, planned (dry run) or carried out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedMove {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub group: String,
    /// Original base name.
    pub file_name: String,
    /// Final base name after collision resolution.
    pub destination_name: String,
}

impl PlannedMove {
    /// Returns true if the file had to be renamed to avoid a collision.
    pub fn renamed(&self) -> bool {
        self.file_name != self.destination_name
    }
}

/// A per-file failure. These never abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub file: PathBuf,
    pub error: String,
}

/// Per-group summary line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub folder: PathBuf,
    pub file_count: usize,
}

/// Outcome of an organization run.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizeReport {
    pub generated_at: DateTime<Utc>,
    pub directory: PathBuf,
    pub mode: GroupingMode,
    pub dry_run: bool,
    pub files_found: usize,
    /// Groups in first-encounter order.
    pub groups: Vec<GroupSummary>,
    /// Completed moves, or planned moves for a dry run.
    pub moves: Vec<PlannedMove>,
    /// Number of files actually moved. Always zero for a dry run.
    pub moved: usize,
    pub failures: Vec<FileFailure>,
}

impl OrganizeReport {
    fn new(directory: &Path, options: OrganizeOptions) -> Self {
        Self {
            generated_at: Utc::now(),
            directory: directory.to_path_buf(),
            mode: options.mode,
            dry_run: options.dry_run,
            files_found: 0,
            groups: Vec::new(),
            moves: Vec::new(),
            moved: 0,
            failures: Vec::new(),
        }
    }

    /// Number of group folders involved in the run.
    pub fn folder_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no file failed.
    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Receives progress events from [`FileOrganizer::organize`].
///
/// All methods default to doing nothing.
pub trait OrganizeObserver {
    /// The directory held no regular files.
    fn no_files(&mut self, _directory: &Path) {}

    /// Files were scanned and grouped.
    fn scan_complete(
        &mut self,
        _files_found: usize,
        _groups: &[Group],
        _options: &OrganizeOptions,
    ) {
    }

    /// A group folder was created, already existed, or would be created.
    fn folder_ready(&mut self, _folder: &Path, _dry_run: bool) {}

    /// A group folder could not be created; its files are skipped.
    fn folder_failed(&mut self, _folder: &Path, _error: &OrganizeError) {}

    /// A file was moved, or would be moved in a dry run.
    fn file_moved(&mut self, _planned: &PlannedMove, _dry_run: bool) {}

    /// A file could not be moved.
    fn file_failed(&mut self, _file: &FileEntry, _error: &OrganizeError) {}

    /// The run finished.
    fn finished(&mut self, _report: &OrganizeReport) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl OrganizeObserver for SilentObserver {}

/// Destination names decided so far in the current run.
#[derive(Debug, Default)]
struct RunState {
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

impl RunState {
    fn is_taken(&self, candidate: &Path) -> bool {
        self.claimed.contains(candidate)
            || (candidate.exists() && !self.vacated.contains(candidate))
    }

    /// A non-directory entry already sits where the group folder should go.
    fn blocks_folder(&self, folder: &Path) -> bool {
        folder.exists() && !folder.is_dir() && !self.vacated.contains(folder)
    }
}

/// Organizes the files of a directory into group subdirectories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Runs a complete organization pass over `directory`.
    ///
    /// Returns `Err` only when the directory is invalid or cannot be listed;
    /// in that case nothing has been touched. Per-file problems are recorded
    /// in the report and reported to `observer`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirgenie::file_organizer::{FileOrganizer, OrganizeOptions, SilentObserver};
    /// use std::path::Path;
    ///
    /// let options = OrganizeOptions { dry_run: true, ..Default::default() };
    /// let report = FileOrganizer::organize(Path::new("/path/to/dir"), options, &mut SilentObserver)
    ///     .expect("valid directory");
    /// println!("Would move {} files", report.moves.len());
    /// ```
    pub fn organize(
        directory: &Path,
        options: OrganizeOptions,
        observer: &mut dyn OrganizeObserver,
    ) -> OrganizeResult<OrganizeReport> {
        Self::validate_directory(directory)?;

        let files = Self::scan(directory)?;
        let mut report = OrganizeReport::new(directory, options);
        report.files_found = files.len();

        if files.is_empty() {
            observer.no_files(directory);
            observer.finished(&report);
            return Ok(report);
        }

        let groups = Self::group_files(files, options.mode);
        debug!(
            files = report.files_found,
            groups = groups.len(),
            "grouped files"
        );
        observer.scan_complete(report.files_found, &groups, &options);

        let mut state = RunState::default();
        for group in &groups {
            let folder = directory.join(&group.name);
            report.groups.push(GroupSummary {
                name: group.name.clone(),
                folder: folder.clone(),
                file_count: group.files.len(),
            });

            if let Err(e) = Self::prepare_folder(&folder, options.dry_run, &state) {
                warn!(folder = %folder.display(), error = %e, "cannot prepare group folder");
                observer.folder_failed(&folder, &e);
                let message = e.to_string();
                report
                    .failures
                    .extend(group.files.iter().map(|file| FileFailure {
                        file: file.path.clone(),
                        error: message.clone(),
                    }));
                continue;
            }
            observer.folder_ready(&folder, options.dry_run);

            for file in &group.files {
                Self::process_file(file, group, &folder, options, &mut state, &mut report, observer);
            }
        }

        observer.finished(&report);
        Ok(report)
    }

    /// Checks that `directory` exists and is a directory.
    pub fn validate_directory(directory: &Path) -> OrganizeResult<()> {
        match fs::metadata(directory) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(OrganizeError::NotADirectory {
                path: directory.to_path_buf(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(OrganizeError::DirectoryNotFound {
                    path: directory.to_path_buf(),
                })
            }
            Err(e) => Err(OrganizeError::ReadDirFailed {
                path: directory.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Lists the regular files directly inside `directory`, in listing order.
    ///
    /// Subdirectories are skipped. Symlinks are followed when deciding whether
    /// an entry is a regular file.
    pub fn scan(directory: &Path) -> OrganizeResult<Vec<FileEntry>> {
        let entries = fs::read_dir(directory).map_err(|e| OrganizeError::ReadDirFailed {
            path: directory.to_path_buf(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(directory = %directory.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(file) = FileEntry::from_path(&path) {
                files.push(file);
            }
        }

        debug!(directory = %directory.display(), count = files.len(), "scanned directory");
        Ok(files)
    }

    /// Splits files into groups, keeping first-encounter order of groups and
    /// listing order of files within each group.
    pub fn group_files(files: Vec<FileEntry>, mode: GroupingMode) -> Vec<Group> {
        let mut groups: Vec<Group> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for file in files {
            let name = classify(&file.extension, mode);
            match index.get(&name) {
                Some(&i) => groups[i].files.push(file),
                None => {
                    index.insert(name.clone(), groups.len());
                    groups.push(Group {
                        name,
                        files: vec![file],
                    });
                }
            }
        }

        groups
    }

    /// Returns the first free destination for `file` inside `folder`:
    /// `name`, then `stem_1.ext`, `stem_2.ext`, ...
    ///
    /// `is_taken` decides whether a candidate path is already in use.
    pub fn resolve_destination(
        folder: &Path,
        file: &FileEntry,
        is_taken: impl Fn(&Path) -> bool,
    ) -> PathBuf {
        let mut candidate = folder.join(file.file_name());
        let mut counter = 1;
        while is_taken(&candidate) {
            candidate = folder.join(file.numbered_name(counter));
            counter += 1;
        }
        candidate
    }

    fn prepare_folder(folder: &Path, dry_run: bool, state: &RunState) -> OrganizeResult<()> {
        if state.blocks_folder(folder) {
            return Err(OrganizeError::DirectoryCreationFailed {
                path: folder.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "a file with the same name already exists",
                ),
            });
        }
        if dry_run {
            return Ok(());
        }

        match fs::create_dir(folder) {
            Ok(()) => {
                debug!(folder = %folder.display(), "created group folder");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && folder.is_dir() => Ok(()),
            Err(e) => Err(OrganizeError::DirectoryCreationFailed {
                path: folder.to_path_buf(),
                source: e,
            }),
        }
    }

    fn process_file(
        file: &FileEntry,
        group: &Group,
        folder: &Path,
        options: OrganizeOptions,
        state: &mut RunState,
        report: &mut OrganizeReport,
        observer: &mut dyn OrganizeObserver,
    ) {
        let destination = Self::resolve_destination(folder, file, |c| state.is_taken(c));
        debug!(
            source = %file.path.display(),
            destination = %destination.display(),
            "resolved destination"
        );

        let planned = PlannedMove {
            source: file.path.clone(),
            destination_name: destination
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            destination,
            group: group.name.clone(),
            file_name: file.name.clone(),
        };

        if !options.dry_run
            && let Err(e) = Self::move_file(&planned.source, &planned.destination)
        {
            warn!(file = %file.path.display(), error = %e, "move failed");
            observer.file_failed(file, &e);
            report.failures.push(FileFailure {
                file: file.path.clone(),
                error: e.to_string(),
            });
            return;
        }

        state.claimed.insert(planned.destination.clone());
        state.vacated.insert(planned.source.clone());
        if !options.dry_run {
            info!(
                source = %planned.source.display(),
                destination = %planned.destination.display(),
                "moved file"
            );
            report.moved += 1;
        }
        observer.file_moved(&planned, options.dry_run);
        report.moves.push(planned);
    }

    /// Moves a single file with the platform rename primitive.
    pub fn move_file(source: &Path, destination: &Path) -> OrganizeResult<()> {
        fs::rename(source, destination).map_err(|e| OrganizeError::FileMoveFailure {
            source_path: source.to_path_buf(),
            destination: destination.to_path_buf(),
            source: e,
        })
    }
}
