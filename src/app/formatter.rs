use crate::app::models::{RenameFailure, RenameReport, RuntimeConfig};
use colored::Colorize;
use std::ffi::{OsStr, OsString};

/// Left-pads the decimal form of `counter` with zeros up to `width` digits.
///
/// `width` is a minimum; longer numbers are returned as-is.
pub fn zero_pad(counter: usize, width: usize) -> String {
    format!("{:0>width$}", counter, width = width)
}

/// Builds `<name><separator><number>[.ext]` names.
pub struct NameGenerator<'a> {
    name: &'a str,
    separator: &'a str,
    pad_width: usize,
}

impl<'a> NameGenerator<'a> {
    pub fn new(config: &'a RuntimeConfig) -> Self {
        Self {
            name: &config.name,
            separator: &config.separator,
            pad_width: config.pad_width,
        }
    }

    pub fn name_for(&self, counter: usize, extension: Option<&OsStr>) -> OsString {
        let mut new_name = OsString::from(format!(
            "{}{}{}",
            self.name,
            self.separator,
            zero_pad(counter, self.pad_width)
        ));
        if let Some(ext) = extension {
            new_name.push(".");
            new_name.push(ext);
        }
        new_name
    }

    /// Human-readable pattern shown at the confirmation prompt, e.g. `img-##.ext`.
    pub fn pattern(&self) -> String {
        format!(
            "{}{}{}.ext",
            self.name,
            self.separator,
            "#".repeat(self.pad_width)
        )
    }
}

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn confirmation_request(config: &RuntimeConfig) -> String {
        format!(
            "Are you certain you want to rename the files using the provided parameters?\nDirectory: {}\nName: {}",
            config.directory.display(),
            NameGenerator::new(config).pattern()
        )
        .yellow()
        .to_string()
    }

    pub fn declined() -> String {
        "Exiting without changing files.".green().to_string()
    }

    pub fn error(message: &str) -> String {
        format!("ERROR: {}", message).red().to_string()
    }

    pub fn failure(failure: &RenameFailure) -> String {
        Self::error(&format!(
            "error while renaming file '{}': {}",
            failure.from.to_string_lossy(),
            failure.reason
        ))
    }

    /// Closing line; individual failures were already printed by the renamer.
    pub fn report(report: &RenameReport) -> String {
        if report.is_success() {
            "Finished renaming files successfully.".green().to_string()
        } else {
            "Finished processing files, with errors.".red().to_string()
        }
    }
}
