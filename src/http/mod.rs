//! HTTP surface of the docs server.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (router, request id, tracing, timeout, body limit)
//!     → middleware/ (cache policy, path variables)
//!     → handlers.rs (page → delivery::dispatch) | assets.rs (files)
//!     → Send to client
//! ```

pub mod assets;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use middleware::{CachePolicy, PathParams};
pub use server::{AppState, DocsServer};
