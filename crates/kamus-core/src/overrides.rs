use std::collections::HashMap;
use std::sync::Arc;

use kamus_types::ExplanationRecord;

/// Post-processing applied to a freshly assembled record
pub type PatchFn = Arc<dyn Fn(ExplanationRecord) -> ExplanationRecord + Send + Sync>;

/// Static per-word knowledge consulted while generating explanations
pub trait Overrides: Send + Sync {
    /// Advisory clause appended to the prompt for `word`
    fn hint(&self, word: &str) -> Option<String>;

    /// Patch to run on the assembled record for `word`
    fn find(&self, word: &str) -> Option<PatchFn>;
}

/// No hints, no patches
pub struct NoOverrides;

impl Overrides for NoOverrides {
    fn hint(&self, _word: &str) -> Option<String> {
        None
    }

    fn find(&self, _word: &str) -> Option<PatchFn> {
        None
    }
}

/// Lookup table of hints and patches keyed by lowercased word
#[derive(Default, Clone)]
pub struct OverrideTable {
    hints: HashMap<String, String>,
    patches: HashMap<String, PatchFn>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hint(mut self, word: &str, hint: impl Into<String>) -> Self {
        self.hints.insert(word.to_lowercase(), hint.into());
        self
    }

    pub fn with_patch(
        mut self,
        word: &str,
        patch: impl Fn(ExplanationRecord) -> ExplanationRecord + Send + Sync + 'static,
    ) -> Self {
        self.patches.insert(word.to_lowercase(), Arc::new(patch));
        self
    }

    pub fn hint_count(&self) -> usize {
        self.hints.len()
    }

    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }
}

impl Overrides for OverrideTable {
    fn hint(&self, word: &str) -> Option<String> {
        self.hints.get(&word.trim().to_lowercase()).cloned()
    }

    fn find(&self, word: &str) -> Option<PatchFn> {
        self.patches.get(&word.trim().to_lowercase()).cloned()
    }
}
