use std::sync::Arc;

use kamus_config::lookup::LookupConfig;
use kamus_config::translator::TranslatorConfig;
use kamus_core::ExplanationPipeline;
use kamus_core::preprocess::{DefaultPreprocessor, Preprocessor};
use kamus_translator::Translator;
use kamus_types::{DictionaryEntry, ExplanationRecord, SentenceTranslation};

/// Word lookups and sentence translation for the Malay to Mandarin pair
pub struct DictionaryService {
    translator: Arc<dyn Translator>,
    pipeline: Arc<ExplanationPipeline>,
    preprocessor: DefaultPreprocessor,
    translate_words: bool,
    from_lang: String,
    to_lang: String,
    target_language: String,
}

impl DictionaryService {
    pub fn new(
        translator: Arc<dyn Translator>,
        pipeline: Arc<ExplanationPipeline>,
        translator_config: &TranslatorConfig,
        lookup_config: &LookupConfig,
    ) -> Self {
        Self {
            translator,
            pipeline,
            preprocessor: DefaultPreprocessor,
            translate_words: translator_config.enabled,
            from_lang: translator_config.from_lang.clone(),
            to_lang: translator_config.to_lang.clone(),
            target_language: lookup_config.target_language.clone(),
        }
    }

    pub fn pipeline(&self) -> &Arc<ExplanationPipeline> {
        &self.pipeline
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Translate a source word and explain its Mandarin equivalent.
    ///
    /// With word translation disabled the input is taken to already be in
    /// the target language.
    pub async fn process_word(&self, word: &str) -> DictionaryEntry {
        let word = self.preprocessor.process(word);
        if word.is_empty() {
            return DictionaryEntry::new(
                String::new(),
                String::new(),
                ExplanationRecord {
                    explanation: "Error: No word provided".to_string(),
                    ..ExplanationRecord::placeholder()
                },
            );
        }

        if !self.translate_words {
            let record = self.pipeline.lookup_or_generate(&word, &self.target_language).await;
            return DictionaryEntry::new(word.clone(), word, record);
        }

        tracing::info!(
            "Translating '{}' from {} to {}",
            word,
            self.from_lang,
            self.to_lang
        );

        match self
            .translator
            .translate(&word, self.from_lang.clone(), self.to_lang.clone())
            .await
        {
            Ok(translation) => {
                let translated = translation.text.trim().to_string();
                let record = self
                    .pipeline
                    .lookup_or_generate(&translated, &self.target_language)
                    .await;
                DictionaryEntry::new(word, translated, record)
            }
            Err(e) => {
                tracing::error!(
                    "Translation of '{}' failed on {}: {}",
                    word,
                    self.translator.metadata().name,
                    e
                );
                let diagnostic = e.to_string();
                let record = ExplanationRecord::fallback(&word, &diagnostic);
                DictionaryEntry::new(word, format!("[Translation Failed: {diagnostic}]"), record)
            }
        }
    }

    /// Translate a whole sentence. `from` and `to` default to the
    /// configured language pair.
    pub async fn translate_sentence(
        &self,
        sentence: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> SentenceTranslation {
        let from = from.unwrap_or(&self.from_lang).to_string();
        let to = to.unwrap_or(&self.to_lang).to_string();

        let sentence = self.preprocessor.process(sentence);
        if sentence.is_empty() {
            return SentenceTranslation {
                original_sentence: String::new(),
                translated_sentence: "Error: No sentence provided".to_string(),
                source_language: from,
                target_language: to,
                success: false,
            };
        }

        tracing::info!("Translating sentence from {} to {}", from, to);

        match self.translator.translate(&sentence, from.clone(), to.clone()).await {
            Ok(translation) => SentenceTranslation {
                original_sentence: sentence,
                translated_sentence: translation.text,
                source_language: from,
                target_language: to,
                success: true,
            },
            Err(e) => {
                tracing::error!("Sentence translation failed: {}", e);
                SentenceTranslation {
                    original_sentence: sentence,
                    translated_sentence: format!("Translation error: {e}"),
                    source_language: from,
                    target_language: to,
                    success: false,
                }
            }
        }
    }
}
