use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::inference::InferenceConfig;
use self::lookup::LookupConfig;
use self::translator::TranslatorConfig;

pub mod cache;
pub mod inference;
pub mod lookup;
pub mod translator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inference: InferenceConfig,
    pub translator: TranslatorConfig,
    pub cache: CacheConfig,
    pub lookup: LookupConfig,
}

impl Config {
    /// Build config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            inference: InferenceConfig::from_env(),
            translator: TranslatorConfig::from_env(),
            cache: CacheConfig::from_env(),
            lookup: LookupConfig::from_env(),
        }
    }

    /// Load config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        Ok(config)
    }
}

pub(crate) fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
