use serde::{Deserialize, Serialize};

use crate::env_string;

fn default_target_language() -> String {
    "Mandarin".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Language label of translated words, used in prompts and cache keys
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
        }
    }
}

impl LookupConfig {
    pub fn from_env() -> Self {
        Self {
            target_language: env_string("KAMUS_TARGET_LANGUAGE")
                .unwrap_or_else(default_target_language),
        }
    }
}
