use std::sync::Arc;

use anyhow::bail;
use kamus_config::Config;
use kamus_core::{ExplanationCache, ExplanationPipeline};
use kamus_inference::{InferenceClient, OfflineClient, OllamaClient};
use kamus_lang_malay::{DictionaryService, LibreTranslator, MalayOverrides, PhrasebookTranslator};
use kamus_translator::Translator;

pub struct AppState {
    pub config: Config,
    pub cache: Arc<ExplanationCache>,
    pub dictionary: DictionaryService,
}

impl AppState {
    /// Wire up backends from `config`. `offline` forces the in-process
    /// inference and translation backends regardless of configuration.
    pub fn new(config: Config, offline: bool) -> anyhow::Result<Self> {
        let client = inference_client(&config, offline)?;
        let translator = translator(&config, offline)?;

        tracing::info!(
            "Using {} inference and {} translation",
            client.backend(),
            translator.metadata().name
        );

        let cache = Arc::new(ExplanationCache::new(config.cache.enabled));
        let pipeline = ExplanationPipeline::with_config(
            client,
            Arc::clone(&cache),
            Arc::new(MalayOverrides::table()),
            &config.inference,
        );
        let dictionary = DictionaryService::new(
            translator,
            Arc::new(pipeline),
            &config.translator,
            &config.lookup,
        );

        Ok(Self {
            config,
            cache,
            dictionary,
        })
    }
}

fn inference_client(config: &Config, offline: bool) -> anyhow::Result<Arc<dyn InferenceClient>> {
    let inference = &config.inference;
    if offline {
        return Ok(Arc::new(OfflineClient::new()));
    }

    match inference.provider.as_str() {
        "offline" => Ok(Arc::new(OfflineClient::new())),
        "ollama" => {
            tracing::info!("Inference endpoint {} (model {})", inference.api_url, inference.model);
            let client = OllamaClient::new(
                inference.api_url.clone(),
                inference.model.clone(),
                inference.connect_timeout(),
                inference.timeout(),
            )?;
            Ok(Arc::new(client))
        }
        other => bail!("Unknown inference provider '{other}' (expected 'ollama' or 'offline')"),
    }
}

fn translator(config: &Config, offline: bool) -> anyhow::Result<Arc<dyn Translator>> {
    let translator = &config.translator;
    if offline {
        return Ok(Arc::new(PhrasebookTranslator::new()));
    }

    match translator.provider.as_str() {
        "phrasebook" => Ok(Arc::new(PhrasebookTranslator::new())),
        "libretranslate" => Ok(Arc::new(LibreTranslator::new(
            translator.api_url.clone(),
            translator.api_key.clone(),
        ))),
        other => bail!(
            "Unknown translation provider '{other}' (expected 'libretranslate' or 'phrasebook')"
        ),
    }
}
