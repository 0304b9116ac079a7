use crate::app::cli::Cli;
use crate::app::error::AppError;
use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_PAD_WIDTH: usize = 1;

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PresetConfig {
    pub separator: Option<String>,
    pub pad: Option<usize>,
    pub include_directories: Option<bool>,
}

pub type Presets = HashMap<String, PresetConfig>;

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("seqname").join("presets.toml"))
}

/// Loads `~/.config/seqname/presets.toml`; a missing file means no presets.
pub fn load_presets_file() -> Result<Presets> {
    load_presets_from(&presets_path()?)
}

pub fn load_presets_from(config_path: &Path) -> Result<Presets> {
    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read presets at {}", config_path.display()))?;

    let parsed: PresetsFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    Ok(parsed.presets)
}

/// `-s ""` or `-n ""` count as not given.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn resolve_directory(dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match dir {
        None => env::current_dir()
            .map_err(|e| AppError::system("could not get current directory path", e)),
        Some(dir) => {
            if !dir.is_dir() {
                return Err(AppError::InvalidDirectory(dir));
            }
            std::path::absolute(&dir)
                .map_err(|e| AppError::system("could not resolve directory path", e))
        }
    }
}

/// Looks up `--preset`; the presets file is only read when one is requested.
fn select_preset<L>(requested: Option<&str>, load_presets: L) -> Result<PresetConfig, AppError>
where
    L: FnOnce() -> Result<Presets>,
{
    let Some(key) = requested else {
        return Ok(PresetConfig::default());
    };

    let presets = load_presets().map_err(AppError::Presets)?;
    let preset = presets
        .get(key)
        .cloned()
        .ok_or_else(|| AppError::UnknownPreset(key.to_string()))?;
    log::debug!("Using preset '{}': {:?}", key, preset);
    Ok(preset)
}

pub fn resolve_config<L>(cli: Cli, load_presets: L) -> Result<RuntimeConfig, AppError>
where
    L: FnOnce() -> Result<Presets>,
{
    let name = non_empty(cli.name)
        .or_else(|| non_empty(cli.base))
        .ok_or(AppError::MissingName)?;
    let directory = resolve_directory(cli.directory)?;
    let preset = select_preset(cli.preset.as_deref(), load_presets)?;

    let config = RuntimeConfig {
        name,
        directory,
        separator: non_empty(cli.separator)
            .or_else(|| non_empty(preset.separator))
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
        pad_width: cli
            .pad
            .or(preset.pad)
            .unwrap_or(DEFAULT_PAD_WIDTH)
            .max(DEFAULT_PAD_WIDTH),
        include_directories: cli.include_dirs || preset.include_directories.unwrap_or(false),
        skip_confirmation: cli.no_confirm,
    };

    log::debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
