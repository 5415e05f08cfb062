use std::fmt::Write;

use kamus_types::PromptSpec;

use crate::section::SectionKey;

/// Renders the instruction pair sent to the model.
///
/// Output depends only on the inputs, so identical lookups always produce
/// identical prompts.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    /// Language the explanation and example translations are written in
    explanation_language: String,
}

impl PromptBuilder {
    pub fn new(explanation_language: impl Into<String>) -> Self {
        Self {
            explanation_language: explanation_language.into(),
        }
    }

    pub fn explanation_language(&self) -> &str {
        &self.explanation_language
    }

    pub fn build(&self, word: &str, language: &str, hint: Option<&str>) -> PromptSpec {
        PromptSpec {
            subject: word.to_string(),
            system_instruction: self.system_instruction(language),
            user_prompt: self.user_prompt(word, language, hint),
        }
    }

    fn system_instruction(&self, language: &str) -> String {
        let explain_in = &self.explanation_language;
        format!(
            "You are a language expert with superior fluency in both {explain_in} and {language}. \
             Always respond directly with the final answer in the exact format requested. \
             The explanations must always be written in proper {explain_in}. \
             IMPORTANT: DO NOT USE ANY MARKDOWN FORMATTING IN YOUR RESPONSE. \
             Avoid using any asterisks (*), underscores (_), backticks (`), tildes (~), \
             or any other formatting characters in your text. \
             Provide plain, unformatted text only. \
             Never use <think> tags or show your internal reasoning process."
        )
    }

    fn user_prompt(&self, word: &str, language: &str, hint: Option<&str>) -> String {
        let explain_in = &self.explanation_language;
        let mut prompt = String::new();

        // Writing to a String cannot fail
        let _ = write!(
            prompt,
            "You are a language expert teaching {language} who needs accurate linguistic details for practical use.\n\n\
             DO NOT USE <think> TAGS OR INTERNAL DELIBERATION. RESPOND IMMEDIATELY WITH THE FINAL ANSWER.\n\n\
             IMPORTANT: DO NOT USE ANY FORMATTING such as **, _, ~~, or any other markdown. \
             Plain text only with no asterisks or formatting symbols.\n\n\
             Please provide a comprehensive explanation of the {language} word '{word}'."
        );

        if let Some(hint) = hint.map(str::trim).filter(|h| !h.is_empty()) {
            let _ = write!(prompt, " {hint}");
        }

        let _ = write!(
            prompt,
            "\nThe response must be clear, structured, and follow the exact format below:\n\n\
             1. A simple explanation of the word's meaning written ONLY in {explain_in}. \
             THE EXPLANATION MUST BE IN {upper_explain}, NOT IN {upper_language}.\n\
             2. The accurate pronunciation with tone marks where the language has tones (e.g., 'hǎo', not 'hao3').\n\
             3. Three example sentences using this word in real context. Each should include:\n\
             \x20  - The original sentence in {language}\n\
             \x20  - Its translation in {explain_in}\n\
             4. State whether this word is an adjective in {language} grammar (answer with YES or NO).\n\n\
             Use the following EXACT section headers in your response:\n\n",
            upper_explain = explain_in.to_uppercase(),
            upper_language = language.to_uppercase(),
        );

        for key in SectionKey::ALL {
            let body = match key {
                SectionKey::Explanation => {
                    format!("[your simple explanation written ONLY in {explain_in}]")
                }
                SectionKey::Pronunciation => "[pronunciation with tone marks only]".to_string(),
                SectionKey::Examples => (1..=3)
                    .map(|n| format!("{n}. [{language} sentence]\n   [{explain_in} translation]"))
                    .collect::<Vec<_>>()
                    .join("\n"),
                SectionKey::IsAdjective => "[YES or NO]".to_string(),
            };
            let _ = write!(prompt, "{}\n{}\n\n", key.header(), body);
        }

        prompt.trim_end().to_string()
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new("Malay")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        let builder = PromptBuilder::default();
        assert_eq!(
            builder.build("好", "Mandarin", None),
            builder.build("好", "Mandarin", None)
        );
    }

    #[test]
    fn test_headers_in_canonical_order() {
        let prompt = PromptBuilder::default().build("好", "Mandarin", None);
        let offsets: Vec<usize> = SectionKey::ALL
            .iter()
            .map(|key| prompt.user_prompt.find(key.header()).expect("header present"))
            .collect();

        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(prompt.user_prompt.ends_with("IS_ADJECTIVE:\n[YES or NO]"));
    }

    #[test]
    fn test_prompt_names_word_and_languages() {
        let prompt = PromptBuilder::new("Malay").build("快", "Mandarin", None);

        assert_eq!(prompt.subject, "快");
        assert!(prompt.user_prompt.contains("the Mandarin word '快'."));
        assert!(prompt.user_prompt.contains("THE EXPLANATION MUST BE IN MALAY, NOT IN MANDARIN."));
        assert!(prompt.system_instruction.contains("both Malay and Mandarin"));
        assert!(prompt.system_instruction.contains("Never use <think> tags"));
    }

    #[test]
    fn test_hint_is_appended_only_when_present() {
        let builder = PromptBuilder::default();
        let plain = builder.build("makan", "Mandarin", None);
        let hinted = builder.build("makan", "Mandarin", Some("Note that 'makan' means 'to eat'."));
        let blank = builder.build("makan", "Mandarin", Some("  "));

        assert!(hinted.user_prompt.contains("word 'makan'. Note that 'makan' means 'to eat'.\n"));
        assert!(!plain.user_prompt.contains("Note that"));
        assert_eq!(plain, blank);
        assert_eq!(plain.system_instruction, hinted.system_instruction);
    }
}
