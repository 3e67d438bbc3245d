//! templUI documentation server library.
//!
//! Serves server-rendered documentation pages with adaptive delivery: a full
//! document for plain navigation, out-of-band fragments for htmx swaps and
//! Datastar merge events for streaming endpoints. A GitHub star count is kept
//! in an in-process cache refreshed in the background.

pub mod config;
pub mod delivery;
pub mod http;
pub mod lifecycle;
pub mod metric;
pub mod observability;
pub mod render;

pub use config::ServerConfig;
pub use http::DocsServer;
pub use lifecycle::Shutdown;
pub use metric::MetricCache;
