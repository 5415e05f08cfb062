use std::collections::HashMap;

use async_trait::async_trait;
use kamus_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for a LibreTranslate instance
#[derive(Clone)]
pub struct LibreTranslator {
    client: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
}

impl LibreTranslator {
    pub fn new(api_url: String, api_key: String) -> Self {
        // Sample .env files ship a dummy key, which the server rejects
        let api_key = Some(api_key)
            .filter(|key| !key.trim().is_empty() && key != "your_libretranslate_api_key");

        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let request = LibreRequest {
            q: text,
            source: &from,
            target: &to,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self.client.post(&self.api_url).json(&request).send().await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(TranslateError::Authentication);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Upstream(format!("HTTP {}: {}", status, body)));
        }

        let body: LibreResponse = response.json().await.map_err(|e| {
            TranslateError::Upstream(format!("Failed to parse response: {}", e))
        })?;

        tracing::debug!("Translated '{}' ({} -> {}): '{}'", text, from, to, body.translated_text);

        Ok(Translation {
            text: body.translated_text,
            from,
            to,
            provider: "libretranslate".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "LibreTranslate".to_string(),
            requires_api_key: false,
            offline: false,
        }
    }
}

/// Text returned for words the phrasebook does not know
pub const NO_TRANSLATION: &str = "无翻译";

/// Fixed Malay to Mandarin word list, for running without a translation server
pub struct PhrasebookTranslator {
    words: HashMap<&'static str, &'static str>,
}

impl PhrasebookTranslator {
    pub fn new() -> Self {
        let words = HashMap::from([
            ("test", "测试"),
            ("baik", "好"),
            ("cantik", "漂亮"),
            ("cepat", "快"),
            ("besar", "大"),
            ("kecil", "小"),
            ("panas", "热"),
            ("sejuk", "冷"),
            ("tinggi", "高"),
            ("rendah", "低"),
        ]);
        Self { words }
    }
}

impl Default for PhrasebookTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for PhrasebookTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if from != "ms" || to != "zh" {
            return Err(TranslateError::UnsupportedLanguagePair { from, to });
        }

        let translated = self
            .words
            .get(text.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or(NO_TRANSLATION);

        Ok(Translation {
            text: translated.to_string(),
            from,
            to,
            provider: "phrasebook".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Phrasebook".to_string(),
            requires_api_key: false,
            offline: true,
        }
    }
}
