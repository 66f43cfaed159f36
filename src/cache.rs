//! Fingerprint-keyed result cache with TTL expiry.
//!
//! The cache is injectable and best-effort: entries may disappear at any
//! time (TTL, explicit eviction, or the optional size bound) and a miss
//! simply forces recomputation. It is never a source of truth.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::analysis::DeepAnalysis;
use crate::config::EngineConfig;

/// Time source, injectable so TTL behavior is testable with a fake clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Storage abstraction for aggregate analysis results.
///
/// Writes per fingerprint are atomic; the last successful writer wins.
pub trait AnalysisCache: Send + Sync {
    /// Fetch a live (non-expired) entry.
    fn get(&self, fingerprint: &str) -> Option<DeepAnalysis>;
    /// Insert or overwrite the entry for a fingerprint.
    fn put(&self, fingerprint: &str, analysis: DeepAnalysis);
    /// Drop one entry.
    fn evict(&self, fingerprint: &str);
    /// Drop every entry.
    fn clear(&self);
    /// Number of stored entries, expired ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct CacheEntry {
    analysis: DeepAnalysis,
    created_at: DateTime<Utc>,
}

/// In-memory TTL cache with an optional size bound.
///
/// When the bound is exceeded the entry with the oldest creation timestamp
/// is dropped first.
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: chrono::Duration,
    capacity: Option<usize>,
    clock: Arc<dyn Clock>,
}

impl InMemoryCache {
    pub fn new(ttl: Duration, capacity: Option<usize>) -> Self {
        Self::with_clock(ttl, capacity, Arc::new(SystemClock))
    }

    /// Cache sized per the engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.cache_ttl, config.cache_capacity)
    }

    pub fn with_clock(ttl: Duration, capacity: Option<usize>, clock: Arc<dyn Clock>) -> Self {
        InMemoryCache {
            entries: RwLock::new(HashMap::new()),
            ttl: chrono::Duration::seconds(ttl.as_secs() as i64),
            capacity,
            clock,
        }
    }
}

impl AnalysisCache for InMemoryCache {
    fn get(&self, fingerprint: &str) -> Option<DeepAnalysis> {
        let entries = self.entries.read();
        let entry = entries.get(fingerprint)?;
        if self.clock.now() - entry.created_at < self.ttl {
            Some(entry.analysis.clone())
        } else {
            None
        }
    }

    fn put(&self, fingerprint: &str, analysis: DeepAnalysis) {
        let now = self.clock.now();
        let mut entries = self.entries.write();
        entries.insert(
            fingerprint.to_string(),
            CacheEntry {
                analysis,
                created_at: now,
            },
        );

        if let Some(capacity) = self.capacity {
            while entries.len() > capacity {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, e)| e.created_at)
                    .map(|(k, _)| k.clone());
                match oldest {
                    Some(key) => {
                        entries.remove(&key);
                    }
                    None => break,
                }
            }
        }
    }

    fn evict(&self, fingerprint: &str) {
        self.entries.write().remove(fingerprint);
    }

    fn clear(&self) {
        self.entries.write().clear();
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}
