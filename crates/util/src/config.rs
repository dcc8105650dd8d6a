//! Runtime configuration for Swatch.
//!
//! Values are layered, highest precedence first: command-line overrides,
//! environment variables, the JSON config file, built-in defaults. The file
//! lives at `~/.config/swatch/config.json` unless `SWATCH_CONFIG_PATH` or an
//! explicit path says otherwise. A missing file is not an error; an
//! unreadable-but-present file is.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use swatch_api::DEFAULT_PALETTE_URL;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::{config_root, expand_tilde};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "SWATCH_CONFIG_PATH";
/// Environment variable overriding the palette endpoint.
pub const PALETTE_URL_ENV: &str = "SWATCH_PALETTE_URL";
/// Environment variable overriding how many colors to request.
pub const PALETTE_COUNT_ENV: &str = "SWATCH_PALETTE_COUNT";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_PALETTE_COUNT: u32 = 5;
const MAX_PALETTE_COUNT: u32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("palette count must be between 1 and {MAX_PALETTE_COUNT}; got {0}")]
    InvalidCount(u32),
    #[error("{name} has an invalid value '{value}'")]
    InvalidEnv { name: &'static str, value: String },
    #[error("invalid palette URL '{0}'")]
    InvalidUrl(String),
}

/// Shape of the on-disk config file. Every field is optional.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    palette_url: Option<String>,
    palette_count: Option<u32>,
}

/// Values supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub palette_url: Option<String>,
    pub palette_count: Option<u32>,
}

/// Effective configuration after all layers are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchConfig {
    pub palette_url: String,
    pub palette_count: u32,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            palette_url: DEFAULT_PALETTE_URL.to_string(),
            palette_count: DEFAULT_PALETTE_COUNT,
        }
    }
}

impl SwatchConfig {
    /// Merge overrides, environment, file, and defaults.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let path = overrides.config_path.clone().unwrap_or_else(default_config_path);
        let file = load_file(&path)?;

        let palette_url = overrides
            .palette_url
            .clone()
            .or_else(|| env_value(PALETTE_URL_ENV))
            .or(file.palette_url)
            .unwrap_or_else(|| DEFAULT_PALETTE_URL.to_string());

        let env_count = match env_value(PALETTE_COUNT_ENV) {
            Some(raw) => Some(raw.parse::<u32>().map_err(|_| ConfigError::InvalidEnv {
                name: PALETTE_COUNT_ENV,
                value: raw,
            })?),
            None => None,
        };
        let palette_count = overrides
            .palette_count
            .or(env_count)
            .or(file.palette_count)
            .unwrap_or(DEFAULT_PALETTE_COUNT);
        if !(1..=MAX_PALETTE_COUNT).contains(&palette_count) {
            return Err(ConfigError::InvalidCount(palette_count));
        }

        let config = Self {
            palette_url,
            palette_count,
        };
        debug!(path = %path.display(), url = %config.palette_url, count = config.palette_count, "configuration loaded");
        Ok(config)
    }

    /// Palette URL with its `count` query parameter set to `palette_count`.
    pub fn request_url(&self) -> Result<String, ConfigError> {
        let mut url = Url::parse(&self.palette_url).map_err(|_| ConfigError::InvalidUrl(self.palette_url.clone()))?;
        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "count")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair("count", &self.palette_count.to_string());
        Ok(url.into())
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn default_config_path() -> PathBuf {
    if let Some(path) = env_value(CONFIG_PATH_ENV) {
        return expand_tilde(&path);
    }
    config_root().join(CONFIG_FILE_NAME)
}

fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(file) => Ok(file),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse config file; using defaults"
                );
                Ok(ConfigFile::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
