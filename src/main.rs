mod app;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io;
use std::process;

use app::cli::Cli;
use app::error::{AppError, EXIT_INVALID_INPUT};
use app::formatter::OutputGenerator;
use app::scanner::Scanner;
use app::Outcome;

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_INVALID_INPUT,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    init_logger(cli.verbose);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match app::run(cli, &Scanner, stdin.lock(), &mut stdout) {
        Ok(Outcome::Completed(report)) => {
            log::info!(
                "{} renamed, {} skipped, {} failed",
                report.renamed,
                report.skipped,
                report.failures.len()
            );
        }
        Ok(Outcome::Declined) => {}
        Err(err) => {
            eprintln!("{}", OutputGenerator::error(&err.to_string()));
            if matches!(err, AppError::MissingName) {
                let _ = Cli::command().print_help();
            }
            process::exit(err.exit_code());
        }
    }
}
