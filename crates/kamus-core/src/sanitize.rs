use std::sync::LazyLock;

use regex::Regex;

use crate::section::SectionMap;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid newline regex"));

/// Markdown emphasis markers dropped from model text. `~~` goes last so
/// tildes brought together by earlier removals are caught too.
const MARKERS: [&str; 6] = ["**", "*", "__", "_", "`", "~~"];

/// Strip formatting artifacts from model text.
///
/// Idempotent: `clean(&clean(x)) == clean(x)`.
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Tags first, so removing markers can never join a `<` with a later `>`
    let mut cleaned = TAG.replace_all(text, "").into_owned();

    for marker in MARKERS {
        cleaned = cleaned.replace(marker, "");
    }

    let cleaned = BLANK_RUN.replace_all(&cleaned, "\n\n");
    let cleaned = cleaned.trim().to_string();

    tracing::debug!("Cleaned text from {} to {} bytes", text.len(), cleaned.len());
    cleaned
}

/// Clean every section value
pub fn clean_sections(sections: SectionMap) -> SectionMap {
    sections.map_values(clean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKey;
    use proptest::prelude::*;

    #[test]
    fn test_markdown_markers_removed() {
        assert_eq!(
            clean("**bold** and _italic_ and `code`"),
            "bold and italic and code"
        );
        assert_eq!(clean("__strong__ ~~gone~~ *em*"), "strong gone em");
    }

    #[test]
    fn test_tags_removed() {
        assert_eq!(clean("<b>hǎo</b>"), "hǎo");
        assert_eq!(clean("before<think>after"), "beforeafter");
        assert_eq!(clean("a <span class=\"x\">b</span> c"), "a b c");
    }

    #[test]
    fn test_blank_runs_collapsed() {
        assert_eq!(clean("one\n\n\n\n\ntwo\n\nthree"), "one\n\ntwo\n\nthree");
    }

    #[test]
    fn test_outer_whitespace_trimmed() {
        assert_eq!(clean("  \n  text \t\n"), "text");
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "");
    }

    #[test]
    fn test_tildes_joined_by_marker_removal() {
        assert_eq!(clean("~*~x"), "x");
        assert_eq!(clean(clean("~*~x").as_str()), "x");
    }

    #[test]
    fn test_clean_sections_touches_every_value() {
        let mut sections = SectionMap::new();
        sections.insert(SectionKey::Explanation, "**Baik**".to_string());
        sections.insert(SectionKey::Pronunciation, " `hǎo` ".to_string());

        let sections = clean_sections(sections);
        assert_eq!(sections.get(SectionKey::Explanation), Some("Baik"));
        assert_eq!(sections.get(SectionKey::Pronunciation), Some("hǎo"));
    }

    proptest! {
        #[test]
        fn prop_clean_is_idempotent(text in "[a-z<>*_`~\n \t]{0,40}") {
            let once = clean(&text);
            prop_assert_eq!(clean(&once), once);
        }

        #[test]
        fn prop_clean_is_idempotent_any_text(text in any::<String>()) {
            let once = clean(&text);
            prop_assert_eq!(clean(&once), once);
        }
    }
}
