use unicode_normalization::UnicodeNormalization;

/// Input cleanup applied to a word or sentence before lookup
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFKC folds full-width latin and compatibility forms
        let text: String = text.nfkc().collect();

        // Line breaks are dropped, other whitespace runs become one space
        text.replace(['\n', '\r'], "")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
