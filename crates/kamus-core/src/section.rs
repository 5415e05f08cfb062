use std::collections::HashMap;

/// Named sections a model answer is asked to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Explanation,
    Pronunciation,
    Examples,
    IsAdjective,
}

impl SectionKey {
    /// Canonical output order
    pub const ALL: [SectionKey; 4] = [
        SectionKey::Explanation,
        SectionKey::Pronunciation,
        SectionKey::Examples,
        SectionKey::IsAdjective,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SectionKey::Explanation => "EXPLANATION",
            SectionKey::Pronunciation => "PRONUNCIATION",
            SectionKey::Examples => "EXAMPLES",
            SectionKey::IsAdjective => "IS_ADJECTIVE",
        }
    }

    /// Literal header token, e.g. `EXPLANATION:`
    pub fn header(&self) -> &'static str {
        match self {
            SectionKey::Explanation => "EXPLANATION:",
            SectionKey::Pronunciation => "PRONUNCIATION:",
            SectionKey::Examples => "EXAMPLES:",
            SectionKey::IsAdjective => "IS_ADJECTIVE:",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            SectionKey::Explanation => 0,
            SectionKey::Pronunciation => 1,
            SectionKey::Examples => 2,
            SectionKey::IsAdjective => 3,
        }
    }
}

/// Raw section text keyed by section. Only discovered sections are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: HashMap<SectionKey, String>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: SectionKey, text: String) {
        self.sections.insert(key, text);
    }

    pub fn get(&self, key: SectionKey) -> Option<&str> {
        self.sections.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: SectionKey) -> bool {
        self.sections.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Keys not discovered, in canonical order
    pub fn missing(&self) -> Vec<SectionKey> {
        SectionKey::ALL
            .into_iter()
            .filter(|key| !self.contains(*key))
            .collect()
    }

    /// Apply `f` to every section value
    pub fn map_values(self, f: impl Fn(&str) -> String) -> Self {
        let sections = self
            .sections
            .into_iter()
            .map(|(key, text)| (key, f(&text)))
            .collect();
        Self { sections }
    }
}
