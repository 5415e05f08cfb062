use serde::{Deserialize, Serialize};

use crate::env_string;

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// Keep generated explanations in memory for the process lifetime
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        let enabled = env_string("KAMUS_CACHE_ENABLED")
            .map(|v| v != "false" && v != "0")
            .unwrap_or_else(default_enabled);

        Self { enabled }
    }
}
