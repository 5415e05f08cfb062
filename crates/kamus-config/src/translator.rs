use serde::{Deserialize, Serialize};

use crate::env_string;

fn default_enabled() -> bool {
    true
}

fn default_provider() -> String {
    "libretranslate".to_string()
}

fn default_from_lang() -> String {
    "ms".to_string()
}

fn default_to_lang() -> String {
    "zh".to_string()
}

fn default_api_url() -> String {
    "http://localhost:5000/translate".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// `libretranslate` or `phrasebook`
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: default_provider(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            api_key: String::new(),
            api_url: default_api_url(),
        }
    }
}

impl TranslatorConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let enabled = env_string("KAMUS_TRANSLATOR_ENABLED")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(defaults.enabled);

        Self {
            enabled,
            provider: env_string("KAMUS_TRANSLATOR_PROVIDER").unwrap_or(defaults.provider),
            from_lang: env_string("KAMUS_FROM_LANG").unwrap_or(defaults.from_lang),
            to_lang: env_string("KAMUS_TO_LANG").unwrap_or(defaults.to_lang),
            api_key: env_string("LIBRETRANSLATE_API_KEY").unwrap_or(defaults.api_key),
            api_url: env_string("LIBRETRANSLATE_API_URL").unwrap_or(defaults.api_url),
        }
    }
}
