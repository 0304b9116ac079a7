use crate::app::models::DirectoryEntry;
use ignore::WalkBuilder;
use std::io;
use std::path::Path;

/// The filesystem operations a rename pass needs.
///
/// Paths are always absolute; nothing relies on the process working directory.
pub trait Filesystem {
    /// Immediate children of `dir`, sorted by file name.
    fn list(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>>;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real disk, listed with the `ignore` walker limited to one level.
pub struct Scanner;

impl Filesystem for Scanner {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
        // Every entry counts: hidden files and ignored files are renamed too
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .max_depth(Some(1))
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let entry = result.map_err(|err| io::Error::other(err.to_string()))?;
            if entry.depth() == 0 {
                continue;
            }
            // `Path::is_dir` follows symlinks, so a link to a directory is a directory
            let name = entry.file_name().to_os_string();
            entries.push(if entry.path().is_dir() {
                DirectoryEntry::dir(name)
            } else {
                DirectoryEntry::file(name)
            });
        }

        // Byte order of the names fixes the numbering order
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        log::debug!("Listed {} entries in {}", entries.len(), dir.display());
        Ok(entries)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_immediate_entries_sorted() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("b.txt"), "b")?;
        fs::write(dir.path().join("a.txt"), "a")?;
        fs::write(dir.path().join(".hidden"), "h")?;
        fs::create_dir(dir.path().join("sub"))?;
        fs::write(dir.path().join("sub").join("nested.txt"), "n")?;

        let entries = Scanner.list(dir.path())?;
        assert_eq!(
            entries,
            vec![
                DirectoryEntry::file(".hidden"),
                DirectoryEntry::file("a.txt"),
                DirectoryEntry::file("b.txt"),
                DirectoryEntry::dir("sub"),
            ]
        );
        Ok(())
    }

    #[test]
    fn includes_gitignored_files() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join(".gitignore"), "*.log\n")?;
        fs::write(dir.path().join("debug.log"), "x")?;

        let names: Vec<_> = Scanner
            .list(dir.path())?
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec![".gitignore", "debug.log"]);
        Ok(())
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(Scanner.list(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn renames_within_directory() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("old.txt"), "x")?;
        Scanner.rename(&dir.path().join("old.txt"), &dir.path().join("new.txt"))?;
        assert!(dir.path().join("new.txt").exists());
        assert!(!dir.path().join("old.txt").exists());
        Ok(())
    }
}
