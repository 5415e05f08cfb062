use std::time::{SystemTime, UNIX_EPOCH};

use kamus_core::ExplanationCache;
use kamus_types::{CacheClearReport, CacheStatus};

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

pub fn cache_status(cache: &ExplanationCache) -> CacheStatus {
    CacheStatus {
        size: cache.size(),
        enabled: cache.is_enabled(),
        timestamp_ms: now_ms(),
    }
}

pub fn clear_cache(cache: &ExplanationCache) -> CacheClearReport {
    let cleared_entries = cache.clear();
    CacheClearReport {
        cleared_entries,
        timestamp_ms: now_ms(),
    }
}
