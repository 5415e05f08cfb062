use kamus_types::{DictionaryEntry, ExplanationRecord, SentenceTranslation};
use serde::Serialize;

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn entry(entry: &DictionaryEntry) -> String {
    format!(
        "{} → {}\n\nPronunciation: {}\nAdjective: {}\n\n{}\n\nExamples:\n{}",
        entry.source_word,
        entry.translated_word,
        entry.pronunciation,
        yes_no(entry.is_adjective),
        entry.explanation,
        entry.examples,
    )
}

pub fn record(word: &str, record: &ExplanationRecord) -> String {
    format!(
        "{}\n\nPronunciation: {}\nAdjective: {}\n\n{}\n\nExamples:\n{}",
        word,
        record.pronunciation,
        yes_no(record.is_adjective),
        record.explanation,
        record.examples,
    )
}

pub fn sentence(translation: &SentenceTranslation) -> String {
    if translation.success {
        format!(
            "[{} → {}] {}",
            translation.source_language, translation.target_language, translation.translated_sentence
        )
    } else {
        translation.translated_sentence.clone()
    }
}

pub fn json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
