//! Periodic background refresh of a [`MetricCache`].
//!
//! # Responsibilities
//! - Poll the source once per TTL, first tick immediately
//! - Bound every poll with a timeout
//! - Write successes into the cache, record failures without touching the value
//! - Stop when the shutdown signal fires
//!
//! Failures keep the fixed period; there is no backoff.

use std::time::{Duration, SystemTime};

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::metric::cache::MetricCache;
use crate::metric::source::{FetchError, MetricSource};
use crate::observability::metrics;

/// Owns the single writer side of a [`MetricCache`].
pub struct MetricRefresher<S> {
    cache: MetricCache,
    source: S,
    period: Duration,
    timeout: Duration,
}

impl<S: MetricSource> MetricRefresher<S> {
    pub fn new(cache: MetricCache, source: S, period: Duration, timeout: Duration) -> Self {
        Self {
            cache,
            source,
            period,
            timeout,
        }
    }

    /// Start the refresh loop on the runtime.
    pub fn spawn(self, shutdown: broadcast::Receiver<()>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }

    /// Run until shutdown.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            source = self.source.name(),
            period_secs = self.period.as_secs(),
            "Metric refresher starting"
        );

        let mut ticker = time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // A fetch in flight must not hold up shutdown.
                    tokio::select! {
                        _ = self.refresh_once() => {}
                        _ = shutdown.recv() => {
                            tracing::info!(source = self.source.name(), "Metric refresher received shutdown signal during fetch, abandoning it");
                            break;
                        }
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!(source = self.source.name(), "Metric refresher received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// Poll the source once and apply the outcome to the cache.
    pub async fn refresh_once(&self) {
        let outcome = match time::timeout(self.timeout, self.source.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout.as_secs())),
        };

        match outcome {
            Ok(value) => {
                self.cache.record_success(value, SystemTime::now());
                metrics::record_refresh(self.source.name(), true);
                metrics::record_metric_value(self.source.name(), value);
                tracing::debug!(source = self.source.name(), value, "Metric refreshed");
            }
            Err(e) => {
                self.cache.record_failure(&e);
                metrics::record_refresh(self.source.name(), false);
                let entry = self.cache.snapshot();
                tracing::warn!(
                    source = self.source.name(),
                    error = %e,
                    cached_value = entry.value,
                    consecutive_failures = entry.consecutive_failures,
                    stale = entry.is_stale(SystemTime::now()),
                    "Metric refresh failed, keeping last known value"
                );
            }
        }
    }
}
