//! Errors that end a run before or instead of renaming.
//!
//! Every variant maps to a process exit code. Per-entry rename failures are
//! not errors at this level; they are collected in a
//! [`RenameReport`](crate::app::models::RenameReport).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Bad or missing arguments, or unusable user input.
pub const EXIT_INVALID_INPUT: i32 = 0x1;
/// An OS-level failure unrelated to what the user typed.
pub const EXIT_SYSTEM: i32 = 0x2;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("a base filename string is required.")]
    MissingName,

    #[error("the supplied directory ('{}') is not a valid path.", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("preset '{0}' is not defined in presets.toml.")]
    UnknownPreset(String),

    #[error("{0:#}")]
    Presets(#[source] anyhow::Error),

    #[error("failed to get user input.")]
    Input(#[source] io::Error),

    #[error("{context}: {source}")]
    System {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn system(context: impl Into<String>, source: io::Error) -> Self {
        Self::System {
            context: context.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingName
            | Self::InvalidDirectory(_)
            | Self::UnknownPreset(_)
            | Self::Presets(_)
            | Self::Input(_) => EXIT_INVALID_INPUT,
            Self::System { .. } => EXIT_SYSTEM,
        }
    }
}
