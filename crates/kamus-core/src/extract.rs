//! Section extraction from free-form model output.
//!
//! Headers are located by plain substring search, so a header token quoted
//! inside another section (an example sentence containing `EXAMPLES:`, say)
//! is taken as a section boundary. Telling the two apart would need a
//! stricter delimiter syntax in the prompt contract.

use std::sync::LazyLock;

use regex::Regex;

use crate::section::{SectionKey, SectionMap};

static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid think regex"));

// Fallback header patterns, indexed by `SectionKey::index`. They accept
// `EXPLANATION :`, `**EXPLANATION**:` and `IS ADJECTIVE:` as well.
static FALLBACK_HEADERS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"EXPLANATION[ \t*_]*:",
        r"PRONUNCIATION[ \t*_]*:",
        r"EXAMPLES[ \t*_]*:",
        r"IS[ _]ADJECTIVE[ \t*_]*:",
    ]
    .map(|pattern| Regex::new(pattern).expect("valid header regex"))
});

/// Remove reasoning blocks and normalize line endings
fn prepare(raw: &str) -> String {
    let text = THINK_BLOCK.replace_all(raw, "");
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

/// Split raw model output into sections.
///
/// Never fails: text without any recognizable header yields an empty map.
pub fn extract(raw: &str) -> SectionMap {
    let text = prepare(raw);
    let mut sections = SectionMap::new();

    let mut positions: Vec<(SectionKey, usize)> = SectionKey::ALL
        .into_iter()
        .filter_map(|key| {
            let pos = text.find(key.header());
            match pos {
                Some(pos) => tracing::debug!("Found section '{}' at position {}", key.name(), pos),
                None => tracing::warn!("Section '{}' not found in response", key.name()),
            }
            pos.map(|pos| (key, pos))
        })
        .collect();

    // The model may reorder or drop sections
    positions.sort_by_key(|(_, pos)| *pos);

    for (i, (key, pos)) in positions.iter().enumerate() {
        let start = pos + key.header().len();
        let end = positions
            .get(i + 1)
            .map(|(_, next)| *next)
            .unwrap_or(text.len());

        let content = text[start..end].trim();
        tracing::debug!("Extracted '{}' section: {} characters", key.name(), content.len());
        sections.insert(*key, content.to_string());
    }

    let missing = sections.missing();
    if !missing.is_empty() {
        tracing::info!(
            "{} section(s) missing from primary extraction, trying pattern extraction",
            missing.len()
        );
        for key in missing {
            if let Some(content) = extract_with_pattern(&text, key) {
                tracing::debug!(
                    "Extracted '{}' with pattern: {} characters",
                    key.name(),
                    content.len()
                );
                sections.insert(key, content);
            }
        }
    }

    sections
}

/// Take the text after `key`'s header up to the next header of any other
/// section, or to the end of text.
fn extract_with_pattern(text: &str, key: SectionKey) -> Option<String> {
    let header = FALLBACK_HEADERS[key.index()].find(text)?;
    let start = header.end();

    let end = SectionKey::ALL
        .into_iter()
        .filter(|other| *other != key)
        .filter_map(|other| FALLBACK_HEADERS[other.index()].find_at(text, start))
        .map(|m| m.start())
        .min()
        .unwrap_or(text.len());

    Some(text[start..end].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "EXPLANATION:\nGood word.\n\nPRONUNCIATION:\nhǎo\n\nEXAMPLES:\n1. 你好\n\nIS_ADJECTIVE:\nYES";

    #[test]
    fn test_canonical_order_yields_all_sections() {
        let sections = extract(CANONICAL);

        assert_eq!(sections.len(), 4);
        assert_eq!(sections.get(SectionKey::Explanation), Some("Good word."));
        assert_eq!(sections.get(SectionKey::Pronunciation), Some("hǎo"));
        assert_eq!(sections.get(SectionKey::Examples), Some("1. 你好"));
        assert_eq!(sections.get(SectionKey::IsAdjective), Some("YES"));
    }

    #[test]
    fn test_reordered_sections() {
        let raw = "IS_ADJECTIVE:\nNO\nEXAMPLES:\n1. 吃饭\nEXPLANATION:\nMakan\nPRONUNCIATION:\nchī";
        let sections = extract(raw);

        assert_eq!(sections.get(SectionKey::Explanation), Some("Makan"));
        assert_eq!(sections.get(SectionKey::Pronunciation), Some("chī"));
        assert_eq!(sections.get(SectionKey::Examples), Some("1. 吃饭"));
        assert_eq!(sections.get(SectionKey::IsAdjective), Some("NO"));
    }

    #[test]
    fn test_think_block_is_discarded() {
        let sections = extract("<think>internal musing</think>EXPLANATION:\nX");
        assert_eq!(sections.get(SectionKey::Explanation), Some("X"));
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_multiline_think_blocks_are_discarded() {
        let raw = "<think>\nEXPLANATION: wrong\n</think>\nEXPLANATION:\nright\n<think>PRONUNCIATION: no</think>";
        let sections = extract(raw);
        assert_eq!(sections.get(SectionKey::Explanation), Some("right"));
        assert!(!sections.contains(SectionKey::Pronunciation));
    }

    #[test]
    fn test_crlf_line_endings() {
        let sections = extract("EXPLANATION:\r\nLine one\r\nLine two\r\nPRONUNCIATION:\r\nhǎo\r\n");
        assert_eq!(sections.get(SectionKey::Explanation), Some("Line one\nLine two"));
        assert_eq!(sections.get(SectionKey::Pronunciation), Some("hǎo"));
    }

    #[test]
    fn test_no_headers_gives_empty_map() {
        assert!(extract("I cannot help with that.").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_first_occurrence_wins_for_repeated_header() {
        let raw = "EXPLANATION:\nfirst\nEXAMPLES:\n1. a\nEXPLANATION:\nsecond";
        let sections = extract(raw);
        assert_eq!(sections.get(SectionKey::Explanation), Some("first"));
        assert_eq!(sections.get(SectionKey::Examples), Some("1. a\nEXPLANATION:\nsecond"));
    }

    #[test]
    fn test_pattern_fallback_accepts_spaced_header() {
        let raw = "EXPLANATION:\nSlow\nPRONUNCIATION :\nmàn\nEXAMPLES:\n1. 慢\nIS ADJECTIVE:\nYES";
        let sections = extract(raw);

        assert_eq!(sections.get(SectionKey::Explanation), Some("Slow\nPRONUNCIATION :\nmàn"));
        assert_eq!(sections.get(SectionKey::Pronunciation), Some("màn"));
        assert_eq!(sections.get(SectionKey::Examples), Some("1. 慢\nIS ADJECTIVE:\nYES"));
        assert_eq!(sections.get(SectionKey::IsAdjective), Some("YES"));
    }

    #[test]
    fn test_pattern_fallback_accepts_bold_header() {
        let sections = extract("**EXPLANATION**:\nTall\n**PRONUNCIATION**:\ngāo");
        assert_eq!(sections.get(SectionKey::Explanation), Some("Tall\n**"));
        assert_eq!(sections.get(SectionKey::Pronunciation), Some("gāo"));
    }

    #[test]
    fn test_header_inside_content_splits_section() {
        // Known approximation: a quoted header is read as a boundary
        let raw = "EXPLANATION:\nThe label EXAMPLES: marks a list.\nPRONUNCIATION:\nx";
        let sections = extract(raw);
        assert_eq!(sections.get(SectionKey::Explanation), Some("The label"));
        assert_eq!(sections.get(SectionKey::Examples), Some("marks a list."));
    }
}
