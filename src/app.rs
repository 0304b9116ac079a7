// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod prompt;
pub mod renamer;
pub mod scanner;

use std::io::{BufRead, Write};

use self::cli::Cli;
use self::config::{load_presets_file, resolve_config};
use self::error::AppError;
use self::formatter::OutputGenerator;
use self::models::{RenameReport, RuntimeConfig};
use self::renamer::Renamer;
use self::scanner::Filesystem;

#[derive(Debug)]
pub enum Outcome {
    /// The user answered anything but yes; nothing was touched.
    Declined,
    Completed(RenameReport),
}

/// Resolves configuration from the CLI and presets, then runs the rename.
pub fn run<F: Filesystem, R: BufRead, W: Write>(
    cli: Cli,
    fs: &F,
    input: R,
    output: &mut W,
) -> Result<Outcome, AppError> {
    let config = resolve_config(cli, load_presets_file)?;
    execute(&config, fs, input, output)
}

/// Confirms, lists, and renames for an already resolved configuration.
pub fn execute<F: Filesystem, R: BufRead, W: Write>(
    config: &RuntimeConfig,
    fs: &F,
    input: R,
    output: &mut W,
) -> Result<Outcome, AppError> {
    // 1. Confirm (skipped with -c)
    if !config.skip_confirmation && !prompt::confirm(config, input, output)? {
        print(output, &OutputGenerator::declined())?;
        return Ok(Outcome::Declined);
    }

    // 2. List Directory
    let entries = fs.list(&config.directory).map_err(|e| {
        AppError::system("failed to get file listing for the target directory", e)
    })?;

    // 3. Rename in listing order; failures are printed and collected, not fatal
    let report = Renamer::new(config, fs)
        .rename_all(&entries, output)
        .map_err(|e| AppError::system("failed to write output", e))?;

    // 4. Report
    print(output, &OutputGenerator::report(&report))?;

    Ok(Outcome::Completed(report))
}

fn print<W: Write>(output: &mut W, text: &str) -> Result<(), AppError> {
    writeln!(output, "{}", text).map_err(|e| AppError::system("failed to write output", e))
}
