//! External metric subsystem.
//!
//! # Data Flow
//! ```text
//! Refresh task (refresh.rs), one per process:
//!     Periodic timer (period = TTL)
//!     → source.rs fetch (bounded by timeout)
//!     → cache.rs atomic swap on success / error bookkeeping on failure
//!
//! Request handlers:
//!     → cache.rs read (in-memory, never waits on the source)
//! ```
//!
//! # Design Decisions
//! - The cache is an explicit object injected into the app state, not a global
//! - Single writer, many readers; whole-entry swaps via `arc-swap`
//! - A failed refresh never clears the last good value

pub mod cache;
pub mod refresh;
pub mod source;

pub use cache::{MetricCache, MetricCacheEntry};
pub use refresh::MetricRefresher;
pub use source::{FetchError, GitHubStars, MetricSource};
