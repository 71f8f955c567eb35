//! File categorization by extension.
//!
//! Maps a file extension to the name of the folder the file is grouped into,
//! either a coarse category (e.g. "Images", "Documents") or a name derived
//! from the extension itself.
//!
//! # Examples
//!
//! ```
//! use dirgenie::file_category::{GroupingMode, classify};
//!
//! assert_eq!(classify(".JPG", GroupingMode::Category), "Images");
//! assert_eq!(classify(".foo", GroupingMode::Category), "FOO_Files");
//! assert_eq!(classify(".txt", GroupingMode::Extension), "TXT_Files");
//! assert_eq!(classify("", GroupingMode::Extension), "No_Extension");
//! ```

use serde::Serialize;

/// Group name used for files without an extension.
pub const NO_EXTENSION_GROUP: &str = "No_Extension";

/// Suffix appended to extension-derived group names.
const EXTENSION_GROUP_SUFFIX: &str = "_Files";

/// Represents a broad file category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (JPG, PNG, GIF, etc.)
    Images,
    /// Text and word-processor documents (PDF, DOCX, TXT, etc.)
    Documents,
    /// Spreadsheet files (XLSX, CSV, ODS, etc.)
    Spreadsheets,
    /// Presentation files (PPTX, ODP, KEY, etc.)
    Presentations,
    /// Video files (MP4, MKV, AVI, etc.)
    Videos,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Audio,
    /// Archive and disk image files (ZIP, 7Z, ISO, etc.)
    Archives,
    /// Source code files
    Code,
    /// Installers and executables
    Executables,
    /// Structured data and databases (JSON, XML, SQLite, etc.)
    Data,
}

/// The extension table, in lookup order. An extension listed under more than
/// one category resolves to the first one (`.dmg` is an archive).
static CATEGORY_TABLE: [(Category, &[&str]); 10] = [
    (
        Category::Images,
        &[
            ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".svg", ".webp", ".ico", ".raw",
        ],
    ),
    (
        Category::Documents,
        &[".pdf", ".doc", ".docx", ".txt", ".rtf", ".odt", ".pages", ".tex"],
    ),
    (
        Category::Spreadsheets,
        &[".xls", ".xlsx", ".csv", ".ods", ".numbers"],
    ),
    (Category::Presentations, &[".ppt", ".pptx", ".odp", ".key"]),
    (
        Category::Videos,
        &[
            ".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".webm", ".m4v", ".3gp",
        ],
    ),
    (
        Category::Audio,
        &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".wma", ".m4a", ".opus"],
    ),
    (
        Category::Archives,
        &[".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz", ".dmg", ".iso"],
    ),
    (
        Category::Code,
        &[
            ".py", ".js", ".html", ".css", ".java", ".cpp", ".c", ".h", ".php", ".rb", ".go",
            ".rs", ".swift",
        ],
    ),
    (
        Category::Executables,
        &[".exe", ".msi", ".deb", ".rpm", ".dmg", ".pkg", ".app"],
    ),
    (
        Category::Data,
        &[".json", ".xml", ".yaml", ".yml", ".sql", ".db", ".sqlite"],
    ),
];

impl Category {
    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirgenie::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "Images");
    /// assert_eq!(Category::Data.dir_name(), "Data");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Spreadsheets => "Spreadsheets",
            Category::Presentations => "Presentations",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Archives => "Archives",
            Category::Code => "Code",
            Category::Executables => "Executables",
            Category::Data => "Data",
        }
    }

    /// Returns a human-readable description of this category.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Images => "Image files",
            Category::Documents => "Document files",
            Category::Spreadsheets => "Spreadsheet files",
            Category::Presentations => "Presentation files",
            Category::Videos => "Video files",
            Category::Audio => "Audio files",
            Category::Archives => "Archive files",
            Category::Code => "Source code files",
            Category::Executables => "Executable files",
            Category::Data => "Data files",
        }
    }

    /// Looks up the category for an extension such as `".png"`.
    ///
    /// The lookup is case-insensitive. Returns `None` for unknown or empty extensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirgenie::file_category::Category;
    ///
    /// assert_eq!(Category::for_extension(".PDF"), Some(Category::Documents));
    /// assert_eq!(Category::for_extension(".xyz"), None);
    /// ```
    pub fn for_extension(extension: &str) -> Option<Category> {
        if extension.is_empty() {
            return None;
        }
        let lower = extension.to_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|(_, extensions)| extensions.contains(&lower.as_str()))
            .map(|(category, _)| *category)
    }
}

/// How files are grouped into folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    /// Group by coarse category, falling back to the extension for unknown types.
    #[default]
    Category,
    /// Group by the exact file extension.
    Extension,
}

impl GroupingMode {
    /// Label used in console output.
    pub fn label(&self) -> &'static str {
        match self {
            GroupingMode::Category => "Categories",
            GroupingMode::Extension => "Extensions",
        }
    }
}

/// Returns the group (folder) name for a file extension.
///
/// `extension` includes the leading dot (`".jpg"`) or is empty when the file
/// has no extension.
pub fn classify(extension: &str, mode: GroupingMode) -> String {
    if extension.is_empty() {
        return NO_EXTENSION_GROUP.to_string();
    }

    if mode == GroupingMode::Category
        && let Some(category) = Category::for_extension(extension)
    {
        return category.dir_name().to_string();
    }

    extension_group_name(extension)
}

/// `.foo` -> `FOO_Files`
fn extension_group_name(extension: &str) -> String {
    let bare = extension.strip_prefix('.').unwrap_or(extension);
    format!("{}{}", bare.to_uppercase(), EXTENSION_GROUP_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Images.dir_name(), "Images");
        assert_eq!(Category::Documents.dir_name(), "Documents");
        assert_eq!(Category::Spreadsheets.dir_name(), "Spreadsheets");
        assert_eq!(Category::Presentations.dir_name(), "Presentations");
        assert_eq!(Category::Videos.dir_name(), "Videos");
        assert_eq!(Category::Audio.dir_name(), "Audio");
        assert_eq!(Category::Archives.dir_name(), "Archives");
        assert_eq!(Category::Code.dir_name(), "Code");
        assert_eq!(Category::Executables.dir_name(), "Executables");
        assert_eq!(Category::Data.dir_name(), "Data");
        assert_eq!(Category::Code.description(), "Source code files");
    }

    #[test]
    fn test_every_listed_extension_maps_to_a_category() {
        for (category, extensions) in CATEGORY_TABLE.iter() {
            for ext in extensions.iter() {
                assert!(ext.starts_with('.'), "{ext} should carry a leading dot");
                assert_eq!(ext.to_lowercase(), *ext, "{ext} should be lowercase");
                let found = Category::for_extension(ext).expect("listed extension");
                // .dmg is listed twice; the earlier entry wins
                if *ext != ".dmg" {
                    assert_eq!(found, *category, "{ext}");
                }
            }
        }
    }

    #[test]
    fn test_classify_category_case_insensitive() {
        assert_eq!(classify(".jpg", GroupingMode::Category), "Images");
        assert_eq!(classify(".JPG", GroupingMode::Category), "Images");
        assert_eq!(classify(".Mp3", GroupingMode::Category), "Audio");
        assert_eq!(classify(".PDF", GroupingMode::Category), "Documents");
    }

    #[test]
    fn test_classify_duplicate_extension_uses_first_category() {
        assert_eq!(classify(".dmg", GroupingMode::Category), "Archives");
        let listed_under = CATEGORY_TABLE
            .iter()
            .filter(|(_, extensions)| extensions.contains(&".dmg"))
            .count();
        assert_eq!(listed_under, 2);
    }

    #[test]
    fn test_classify_unknown_extension_falls_back() {
        assert_eq!(classify(".foo", GroupingMode::Category), "FOO_Files");
        assert_eq!(classify(".Md", GroupingMode::Category), "MD_Files");
    }

    #[test]
    fn test_classify_extension_mode_ignores_table() {
        assert_eq!(classify(".jpg", GroupingMode::Extension), "JPG_Files");
        assert_eq!(classify(".TXT", GroupingMode::Extension), "TXT_Files");
        assert_eq!(classify(".zip", GroupingMode::Extension), "ZIP_Files");
    }

    #[test]
    fn test_classify_empty_extension() {
        assert_eq!(classify("", GroupingMode::Category), NO_EXTENSION_GROUP);
        assert_eq!(classify("", GroupingMode::Extension), NO_EXTENSION_GROUP);
    }

    #[test]
    fn test_for_extension_unknown() {
        assert_eq!(Category::for_extension(".unknown"), None);
        assert_eq!(Category::for_extension(""), None);
        // without the dot nothing matches
        assert_eq!(Category::for_extension("png"), None);
    }

    #[test]
    fn test_grouping_mode_labels() {
        assert_eq!(GroupingMode::default(), GroupingMode::Category);
        assert_eq!(GroupingMode::Category.label(), "Categories");
        assert_eq!(GroupingMode::Extension.label(), "Extensions");
    }
}
