//! Request and response middleware.
//!
//! ```text
//! Request → cache_control (response side) → path_params (after routing) → handler
//! ```

pub mod cache_control;
pub mod path_params;

pub use cache_control::CachePolicy;
pub use path_params::{normalize_path_params, PathParams};
