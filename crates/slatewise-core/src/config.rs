// Configuration loading and parsing (config/slatewise.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::browse::pagination::DEFAULT_ROWS_PER_PAGE;
use crate::browse::PlayerGate;

/// Shipped default configuration, written to `config/` when missing.
pub const DEFAULT_CONFIG: &str = include_str!("../defaults/slatewise.toml");

const CONFIG_FILE_NAME: &str = "slatewise.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub table: TableConfig,
    #[serde(default)]
    pub filters: FiltersConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataConfig {
    /// Path to the slate JSON document.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableConfig {
    pub rows_per_page: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FiltersConfig {
    #[serde(default)]
    pub player_gate: PlayerGate,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig {
                path: "data.json".to_string(),
            },
            table: TableConfig {
                rows_per_page: DEFAULT_ROWS_PER_PAGE,
            },
            filters: FiltersConfig::default(),
        }
    }
}

impl Config {
    /// The slate document path, resolved against `base_dir` when relative.
    pub fn data_path(&self, base_dir: &Path) -> PathBuf {
        let path = Path::new(&self.data.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/slatewise.toml` relative to `base_dir`.
///
/// This does not create missing files; prefer `load_config()` which writes
/// the defaults first.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE_NAME);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Write the default config into `base_dir/config/` if it is not there yet.
/// Returns the files that were created; existing files are never touched.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let config_dir = base_dir.join("config");

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let target = config_dir.join(CONFIG_FILE_NAME);
    let mut created = Vec::new();

    match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
    {
        Ok(mut dest) => {
            std::io::Write::write_all(&mut dest, DEFAULT_CONFIG.as_bytes()).map_err(|e| {
                ConfigError::DefaultsCopyError {
                    message: format!("failed to write {}: {e}", target.display()),
                }
            })?;
            created.push(target);
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
        Err(e) => {
            return Err(ConfigError::DefaultsCopyError {
                message: format!("failed to create {}: {e}", target.display()),
            });
        }
    }

    Ok(created)
}

/// Convenience wrapper: loads config relative to the current working directory,
/// writing the defaults first when needed.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data.path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.path".into(),
            message: "must not be empty".into(),
        });
    }

    if config.table.rows_per_page == 0 {
        return Err(ConfigError::ValidationError {
            field: "table.rows_per_page".into(),
            message: "must be greater than 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
