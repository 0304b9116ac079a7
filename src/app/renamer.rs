use crate::app::formatter::{NameGenerator, OutputGenerator};
use crate::app::models::{DirectoryEntry, RenameFailure, RenameReport, RuntimeConfig};
use crate::app::scanner::Filesystem;
use std::io::{self, Write};

pub struct Renamer<'a, F: Filesystem> {
    config: &'a RuntimeConfig,
    fs: &'a F,
}

impl<'a, F: Filesystem> Renamer<'a, F> {
    pub fn new(config: &'a RuntimeConfig, fs: &'a F) -> Self {
        Self { config, fs }
    }

    fn is_eligible(&self, entry: &DirectoryEntry) -> bool {
        !entry.is_dir || self.config.include_directories
    }

    /// Renames `entries` in the given order, numbering eligible ones from 1.
    ///
    /// A failed rename is printed to `output` as it happens, recorded, and
    /// still consumes its number.
    pub fn rename_all<W: Write>(
        &self,
        entries: &[DirectoryEntry],
        output: &mut W,
    ) -> io::Result<RenameReport> {
        let names = NameGenerator::new(self.config);
        let dir = &self.config.directory;
        let mut report = RenameReport::default();
        let mut counter = 1;

        for entry in entries {
            if !self.is_eligible(entry) {
                log::debug!("Skipping directory {:?}", entry.name);
                report.skipped += 1;
                continue;
            }

            let new_name = names.name_for(counter, entry.extension());
            counter += 1;

            match self.fs.rename(&dir.join(&entry.name), &dir.join(&new_name)) {
                Ok(()) => {
                    log::debug!("Renamed {:?} -> {:?}", entry.name, new_name);
                    report.renamed += 1;
                }
                Err(err) => {
                    let failure = RenameFailure {
                        from: entry.name.clone(),
                        to: new_name,
                        reason: err.to_string(),
                    };
                    log::warn!(
                        "Failed to rename {:?} -> {:?}: {}",
                        failure.from,
                        failure.to,
                        failure.reason
                    );
                    writeln!(output, "{}", OutputGenerator::failure(&failure))?;
                    report.failures.push(failure);
                }
            }
        }

        Ok(report)
    }
}
