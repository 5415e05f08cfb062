use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{env_parse, env_string};

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_api_url() -> String {
    "http://localhost:11434/api/generate".to_string()
}

fn default_model() -> String {
    "gpt-oss:20b".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    300
}

// LLM inference is slow and its latency varies a lot
fn default_timeout_secs() -> u64 {
    300
}

fn default_connect_timeout_secs() -> u64 {
    60
}

fn default_explanation_language() -> String {
    "Malay".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InferenceConfig {
    /// `ollama` or `offline`
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Upper bound on a single completion, after which the call is abandoned
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Language the explanation text is written in
    #[serde(default = "default_explanation_language")]
    pub explanation_language: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            explanation_language: default_explanation_language(),
        }
    }
}

impl InferenceConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            provider: env_string("KAMUS_INFERENCE_PROVIDER").unwrap_or(defaults.provider),
            api_url: env_string("KAMUS_INFERENCE_URL").unwrap_or(defaults.api_url),
            model: env_string("KAMUS_INFERENCE_MODEL").unwrap_or(defaults.model),
            temperature: env_parse("KAMUS_INFERENCE_TEMPERATURE").unwrap_or(defaults.temperature),
            max_tokens: env_parse("KAMUS_INFERENCE_MAX_TOKENS").unwrap_or(defaults.max_tokens),
            timeout_secs: env_parse("KAMUS_INFERENCE_TIMEOUT_SECS").unwrap_or(defaults.timeout_secs),
            connect_timeout_secs: env_parse("KAMUS_INFERENCE_CONNECT_TIMEOUT_SECS")
                .unwrap_or(defaults.connect_timeout_secs),
            explanation_language: env_string("KAMUS_EXPLANATION_LANGUAGE")
                .unwrap_or(defaults.explanation_language),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
