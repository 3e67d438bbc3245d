//! Last-known-good cache for an externally sourced number.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use arc_swap::ArcSwap;

use crate::metric::source::FetchError;

/// Snapshot of the cached metric.
///
/// `value` only ever holds the result of the most recent successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCacheEntry {
    pub value: u64,
    /// When `value` was fetched. `None` until the first success.
    pub fetched_at: Option<SystemTime>,
    pub ttl: Duration,
    /// Error from the latest refresh, cleared by the next success.
    pub last_error: Option<String>,
    pub consecutive_failures: u32,
}

impl MetricCacheEntry {
    fn initial(ttl: Duration) -> Self {
        Self {
            value: 0,
            fetched_at: None,
            ttl,
            last_error: None,
            consecutive_failures: 0,
        }
    }

    /// True once a fetch has succeeded at least once.
    pub fn is_populated(&self) -> bool {
        self.fetched_at.is_some()
    }

    /// Whether the value is older than one TTL at `now`.
    pub fn is_stale(&self, now: SystemTime) -> bool {
        match self.fetched_at {
            Some(at) => now.duration_since(at).unwrap_or_default() > self.ttl,
            None => true,
        }
    }
}

/// Shared handle to the cached metric.
///
/// Cloning is cheap; all clones observe the same entry. Readers never touch
/// the network: [`MetricCache::read`] is a single atomic pointer load. The
/// refresh task is the only writer and swaps in whole entries, so a reader
/// never sees a half-updated one.
#[derive(Clone)]
pub struct MetricCache {
    entry: Arc<ArcSwap<MetricCacheEntry>>,
}

impl MetricCache {
    /// Create a cache holding zero.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: Arc::new(ArcSwap::from_pointee(MetricCacheEntry::initial(ttl))),
        }
    }

    /// Current value. Zero until the first successful fetch.
    pub fn read(&self) -> u64 {
        self.entry.load().value
    }

    /// Full snapshot, for diagnostics.
    pub fn snapshot(&self) -> Arc<MetricCacheEntry> {
        self.entry.load_full()
    }

    /// Record a successful fetch.
    pub(crate) fn record_success(&self, value: u64, at: SystemTime) {
        let ttl = self.entry.load().ttl;
        self.entry.store(Arc::new(MetricCacheEntry {
            value,
            fetched_at: Some(at),
            ttl,
            last_error: None,
            consecutive_failures: 0,
        }));
    }

    /// Record a failed fetch. The value and its timestamp are kept.
    pub(crate) fn record_failure(&self, error: &FetchError) {
        let current = self.entry.load_full();
        self.entry.store(Arc::new(MetricCacheEntry {
            last_error: Some(error.to_string()),
            consecutive_failures: current.consecutive_failures.saturating_add(1),
            ..(*current).clone()
        }));
    }
}

impl std::fmt::Debug for MetricCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricCache")
            .field("entry", &*self.entry.load())
            .finish()
    }
}
