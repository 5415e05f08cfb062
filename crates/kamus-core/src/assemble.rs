use kamus_types::{ExplanationRecord, NO_EXAMPLES, NO_EXPLANATION, NO_PRONUNCIATION};

use crate::extract::extract;
use crate::sanitize::clean_sections;
use crate::section::{SectionKey, SectionMap};

fn field_or(sections: &SectionMap, key: SectionKey, placeholder: &str) -> String {
    match sections.get(key) {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => {
            tracing::debug!("Section '{}' empty or missing, using placeholder", key.name());
            placeholder.to_string()
        }
    }
}

/// Lenient YES/NO reading: anything without `YES` is false
fn is_adjective(sections: &SectionMap) -> bool {
    sections
        .get(SectionKey::IsAdjective)
        .map(|text| text.trim().to_uppercase().contains("YES"))
        .unwrap_or(false)
}

/// Build a record from sanitized sections, substituting placeholders
pub fn assemble(sections: &SectionMap) -> ExplanationRecord {
    ExplanationRecord {
        explanation: field_or(sections, SectionKey::Explanation, NO_EXPLANATION),
        pronunciation: field_or(sections, SectionKey::Pronunciation, NO_PRONUNCIATION),
        examples: field_or(sections, SectionKey::Examples, NO_EXAMPLES),
        is_adjective: is_adjective(sections),
    }
}

/// Extract, sanitize and assemble raw model output in one step
pub fn parse_response(raw: &str) -> ExplanationRecord {
    let sections = clean_sections(extract(raw));
    let record = assemble(&sections);

    tracing::debug!(
        "Parsed sections: {} found, adjective={}",
        sections.len(),
        record.is_adjective
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn full_sections() -> SectionMap {
        let mut sections = SectionMap::new();
        sections.insert(SectionKey::Explanation, "Good word.".to_string());
        sections.insert(SectionKey::Pronunciation, "hǎo".to_string());
        sections.insert(SectionKey::Examples, "1. 你好".to_string());
        sections.insert(SectionKey::IsAdjective, "YES".to_string());
        sections
    }

    #[test]
    fn test_full_sections() {
        let record = assemble(&full_sections());
        assert_eq!(
            record,
            ExplanationRecord {
                explanation: "Good word.".to_string(),
                pronunciation: "hǎo".to_string(),
                examples: "1. 你好".to_string(),
                is_adjective: true,
            }
        );
    }

    #[test]
    fn test_empty_map_gives_placeholders() {
        assert_eq!(assemble(&SectionMap::new()), ExplanationRecord::placeholder());
    }

    #[test]
    fn test_blank_section_gives_placeholder() {
        let mut sections = full_sections();
        sections.insert(SectionKey::Examples, "  \n ".to_string());
        assert_eq!(assemble(&sections).examples, NO_EXAMPLES);
    }

    #[test]
    fn test_adjective_flag_is_lenient() {
        let cases = [
            ("yes", true),
            (" Yes, it is.", true),
            ("YES.", true),
            ("NO", false),
            ("maybe", false),
            ("", false),
            ("是", false),
        ];
        for (text, expected) in cases {
            let mut sections = SectionMap::new();
            sections.insert(SectionKey::IsAdjective, text.to_string());
            assert_eq!(assemble(&sections).is_adjective, expected, "input {text:?}");
        }
    }

    #[test]
    fn test_parse_full_response() {
        let raw = "EXPLANATION:\nGood word.\n\nPRONUNCIATION:\nhǎo\n\nEXAMPLES:\n1. 你好\n\nIS_ADJECTIVE:\nYES";
        assert_eq!(
            parse_response(raw),
            ExplanationRecord {
                explanation: "Good word.".to_string(),
                pronunciation: "hǎo".to_string(),
                examples: "1. 你好".to_string(),
                is_adjective: true,
            }
        );
    }

    #[test]
    fn test_parse_explanation_only() {
        assert_eq!(
            parse_response("EXPLANATION:\nHi"),
            ExplanationRecord {
                explanation: "Hi".to_string(),
                pronunciation: NO_PRONUNCIATION.to_string(),
                examples: NO_EXAMPLES.to_string(),
                is_adjective: false,
            }
        );
    }

    #[test]
    fn test_parse_strips_markdown_from_sections() {
        let raw = "EXPLANATION:\n**Cantik** bermaksud _indah_.\nPRONUNCIATION:\n`měi lì`\nIS_ADJECTIVE:\n**YES**";
        let record = parse_response(raw);
        assert_eq!(record.explanation, "Cantik bermaksud indah.");
        assert_eq!(record.pronunciation, "měi lì");
        assert!(record.is_adjective);
    }

    #[test]
    fn test_parse_garbage_never_fails() {
        assert_eq!(parse_response("¯\\_(ツ)_/¯"), ExplanationRecord::placeholder());
    }

    fn render(order: &[usize], bodies: &[String; 4]) -> String {
        order
            .iter()
            .map(|&i| format!("{}\n{}\n\n", SectionKey::ALL[i].header(), bodies[i]))
            .collect()
    }

    proptest! {
        #[test]
        fn prop_header_order_does_not_matter(
            bodies in proptest::array::uniform4("[a-z0-9 .,]{1,20}"),
            order in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
        ) {
            let canonical = parse_response(&render(&[0, 1, 2, 3], &bodies));
            let shuffled = parse_response(&render(&order, &bodies));
            prop_assert_eq!(canonical, shuffled);
        }

        #[test]
        fn prop_missing_header_only_affects_its_field(
            bodies in proptest::array::uniform4("[a-z0-9 .,]{1,20}"),
            dropped in 0usize..3,
        ) {
            let full = parse_response(&render(&[0, 1, 2, 3], &bodies));
            let kept: Vec<usize> = (0..4).filter(|i| *i != dropped).collect();
            let partial = parse_response(&render(&kept, &bodies));

            let (expected, actual) = match dropped {
                0 => (NO_EXPLANATION.to_string(), partial.explanation.clone()),
                1 => (NO_PRONUNCIATION.to_string(), partial.pronunciation.clone()),
                _ => (NO_EXAMPLES.to_string(), partial.examples.clone()),
            };
            prop_assert_eq!(actual, expected);

            if dropped != 0 { prop_assert_eq!(&partial.explanation, &full.explanation); }
            if dropped != 1 { prop_assert_eq!(&partial.pronunciation, &full.pronunciation); }
            if dropped != 2 { prop_assert_eq!(&partial.examples, &full.examples); }
            prop_assert_eq!(partial.is_adjective, full.is_adjective);
        }
    }
}
