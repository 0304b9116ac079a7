use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub name: String,
    pub directory: PathBuf, // Always absolute
    pub separator: String,
    pub pad_width: usize,
    pub include_directories: bool,
    pub skip_confirmation: bool,
}

/// A single immediate child of the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: OsString,
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Extension after the last dot, if there is a non-empty one.
    pub fn extension(&self) -> Option<&OsStr> {
        extension(&self.name)
    }
}

/// Last-dot extension of a bare file name.
///
/// Dotfiles such as `.gitignore` and names ending in a dot have no extension.
pub fn extension(file_name: &OsStr) -> Option<&OsStr> {
    Path::new(file_name).extension().filter(|ext| !ext.is_empty())
}

/// A rename that the filesystem refused.
#[derive(Debug)]
pub struct RenameFailure {
    pub from: OsString,
    pub to: OsString,
    pub reason: String,
}

/// Outcome of one pass over the directory.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: usize,
    pub skipped: usize,
    pub failures: Vec<RenameFailure>,
}

impl RenameReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
