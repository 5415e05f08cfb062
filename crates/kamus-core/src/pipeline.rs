use std::sync::Arc;
use std::time::Duration;

use kamus_config::inference::InferenceConfig;
use kamus_inference::{InferenceClient, InferenceError, InferenceParams};
use kamus_types::ExplanationRecord;

use crate::assemble::parse_response;
use crate::cache::{CacheKey, ExplanationCache};
use crate::overrides::Overrides;
use crate::prompt::PromptBuilder;

/// Cache-backed explanation generation for one word at a time.
///
/// `lookup_or_generate` never fails. Backend problems of any kind are turned
/// into a fallback record which is returned but not cached, so the next
/// lookup for the same word tries the backend again.
pub struct ExplanationPipeline {
    client: Arc<dyn InferenceClient>,
    cache: Arc<ExplanationCache>,
    overrides: Arc<dyn Overrides>,
    prompts: PromptBuilder,
    params: InferenceParams,
    timeout: Duration,
}

impl ExplanationPipeline {
    pub fn new(
        client: Arc<dyn InferenceClient>,
        cache: Arc<ExplanationCache>,
        overrides: Arc<dyn Overrides>,
        prompts: PromptBuilder,
        params: InferenceParams,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            cache,
            overrides,
            prompts,
            params,
            timeout,
        }
    }

    pub fn with_config(
        client: Arc<dyn InferenceClient>,
        cache: Arc<ExplanationCache>,
        overrides: Arc<dyn Overrides>,
        config: &InferenceConfig,
    ) -> Self {
        Self::new(
            client,
            cache,
            overrides,
            PromptBuilder::new(config.explanation_language.clone()),
            InferenceParams {
                temperature: config.temperature,
                max_tokens: config.max_tokens,
            },
            config.timeout(),
        )
    }

    pub fn cache(&self) -> &Arc<ExplanationCache> {
        &self.cache
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn lookup_or_generate(&self, word: &str, language: &str) -> ExplanationRecord {
        let key = CacheKey::new(language, word);

        if let Some(record) = self.cache.get(&key) {
            tracing::info!("Cache hit for '{}'", key);
            return record;
        }
        tracing::info!("Cache miss for '{}', generating explanation", key);

        match self.generate(word, language).await {
            Ok(record) => {
                self.cache.put(key, record.clone());
                record
            }
            Err(e) => {
                tracing::error!(
                    "Explanation for '{}' failed on {}: {}",
                    word,
                    self.client.backend(),
                    e
                );
                tracing::warn!("Returning uncached fallback record for '{}'", word);
                ExplanationRecord::fallback(word, &e.to_string())
            }
        }
    }

    async fn generate(&self, word: &str, language: &str) -> Result<ExplanationRecord, InferenceError> {
        let hint = self.overrides.hint(word);
        let prompt = self.prompts.build(word, language, hint.as_deref());

        // Dropping the future on timeout abandons the in-flight request
        let raw = tokio::time::timeout(self.timeout, self.client.complete(&prompt, &self.params))
            .await
            .map_err(|_| InferenceError::Timeout(self.timeout))??;

        tracing::debug!("Raw response for '{}': {} bytes", word, raw.len());

        let mut record = parse_response(&raw);
        if let Some(patch) = self.overrides.find(word) {
            tracing::info!("Applying override patch for '{}'", word);
            record = patch(record);
        }

        Ok(record)
    }
}
