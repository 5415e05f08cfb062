use serde::{Deserialize, Serialize};

pub const NO_EXPLANATION: &str = "No explanation available.";
pub const NO_PRONUNCIATION: &str = "No pronunciation available.";
pub const NO_EXAMPLES: &str = "No examples available.";

/// Structured explanation of a single word.
///
/// Every field is always populated. Missing data is carried as one of the
/// placeholder strings above, never as an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationRecord {
    pub explanation: String,
    pub pronunciation: String,
    pub examples: String,
    pub is_adjective: bool,
}

impl ExplanationRecord {
    /// Record made only of placeholders
    pub fn placeholder() -> Self {
        Self {
            explanation: NO_EXPLANATION.to_string(),
            pronunciation: NO_PRONUNCIATION.to_string(),
            examples: NO_EXAMPLES.to_string(),
            is_adjective: false,
        }
    }

    /// Record returned when the backend could not produce an answer for `word`
    pub fn fallback(word: &str, diagnostic: &str) -> Self {
        Self {
            explanation: format!(
                "Unable to generate explanation at this time. Error: {diagnostic}"
            ),
            pronunciation: format!("Pinyin unavailable for '{word}'"),
            examples: "No examples available due to API error.".to_string(),
            is_adjective: false,
        }
    }

    /// True if any text field still holds its placeholder
    pub fn is_incomplete(&self) -> bool {
        self.explanation.contains(NO_EXPLANATION.trim_end_matches('.'))
            || self.pronunciation.contains(NO_PRONUNCIATION.trim_end_matches('.'))
            || self.examples.contains(NO_EXAMPLES.trim_end_matches('.'))
    }
}

/// Prompt pair sent to the inference backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    /// Word the prompt was rendered for
    pub subject: String,
    pub system_instruction: String,
    pub user_prompt: String,
}

/// Result of a full dictionary lookup: translation plus explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub source_word: String,
    pub translated_word: String,
    pub explanation: String,
    pub examples: String,
    pub pronunciation: String,
    pub is_adjective: bool,
}

impl DictionaryEntry {
    pub fn new(source_word: String, translated_word: String, record: ExplanationRecord) -> Self {
        Self {
            source_word,
            translated_word,
            explanation: record.explanation,
            examples: record.examples,
            pronunciation: record.pronunciation,
            is_adjective: record.is_adjective,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceTranslation {
    pub original_sentence: String,
    pub translated_sentence: String,
    pub source_language: String,
    pub target_language: String,
    pub success: bool,
}

/// Snapshot of the explanation cache for status endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatus {
    pub size: usize,
    pub enabled: bool,
    pub timestamp_ms: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheClearReport {
    pub cleared_entries: usize,
    pub timestamp_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_record_is_incomplete() {
        assert!(ExplanationRecord::placeholder().is_incomplete());
    }

    #[test]
    fn test_fallback_record_mentions_word_and_error() {
        let record = ExplanationRecord::fallback("好", "connection refused");
        assert!(record.explanation.ends_with("Error: connection refused"));
        assert_eq!(record.pronunciation, "Pinyin unavailable for '好'");
        assert!(!record.is_adjective);
        // examples still read as missing
        assert!(record.is_incomplete());
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = DictionaryEntry::new(
            "baik".to_string(),
            "好".to_string(),
            ExplanationRecord::placeholder(),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["sourceWord"], "baik");
        assert_eq!(json["translatedWord"], "好");
        assert_eq!(json["isAdjective"], false);
    }
}
