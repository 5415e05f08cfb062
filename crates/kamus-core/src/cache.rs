use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use kamus_types::ExplanationRecord;

/// Cache identity: `language:word`, case-sensitive
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(language: &str, word: &str) -> Self {
        Self(format!("{language}:{word}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// In-memory explanation store shared by all in-flight lookups.
///
/// While disabled the storage is bypassed entirely: reads miss, writes and
/// clears are dropped, and `size` reports 0.
pub struct ExplanationCache {
    enabled: AtomicBool,
    entries: RwLock<HashMap<CacheKey, ExplanationRecord>>,
}

impl ExplanationCache {
    pub fn new(enabled: bool) -> Self {
        tracing::info!("Explanation cache initialized (enabled: {})", enabled);
        Self {
            enabled: AtomicBool::new(enabled),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::AcqRel);
        if previous != enabled {
            tracing::info!("Explanation cache {}", if enabled { "enabled" } else { "disabled" });
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<ExplanationRecord> {
        if !self.is_enabled() {
            return None;
        }
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    /// Store `record` under `key`, replacing any previous entry
    pub fn put(&self, key: CacheKey, record: ExplanationRecord) {
        if !self.is_enabled() {
            return;
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        tracing::info!("Cached explanation for '{}'", key);
        entries.insert(key, record);
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(key)
    }

    pub fn contains_word(&self, word: &str, language: &str) -> bool {
        self.contains(&CacheKey::new(language, word))
    }

    /// Drop every entry, returning how many were removed
    pub fn clear(&self) -> usize {
        if !self.is_enabled() {
            tracing::info!("Cache is disabled, nothing to clear");
            return 0;
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let removed = entries.len();
        entries.clear();
        tracing::info!("Cleared explanation cache, removed {} entries", removed);
        removed
    }

    pub fn size(&self) -> usize {
        if !self.is_enabled() {
            return 0;
        }
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for ExplanationCache {
    fn default() -> Self {
        Self::new(true)
    }
}
