//! Cache-Control policy derived from the runtime mode.
//!
//! # Responsibilities
//! - development → `no-store`
//! - production  → `public, max-age=<N>`
//!
//! # Design Decisions
//! - One policy for every route, chosen once at startup
//! - A handler that set its own Cache-Control (the event stream) keeps it

use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::RuntimeMode;

pub const NO_STORE: &str = "no-store";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    NoStore,
    /// Seconds; always positive.
    MaxAge(u64),
}

impl CachePolicy {
    /// Policy for `mode`. A zero `max_age_secs` is rejected by config
    /// validation; here it is clamped to one second.
    pub fn for_mode(mode: RuntimeMode, max_age_secs: u64) -> Self {
        match mode {
            RuntimeMode::Development => CachePolicy::NoStore,
            RuntimeMode::Production => CachePolicy::MaxAge(max_age_secs.max(1)),
        }
    }

    pub fn header_value(self) -> HeaderValue {
        match self {
            CachePolicy::NoStore => HeaderValue::from_static(NO_STORE),
            CachePolicy::MaxAge(secs) => {
                HeaderValue::from_str(&format!("public, max-age={}", secs))
                    .unwrap_or_else(|_| HeaderValue::from_static(NO_STORE))
            }
        }
    }

    pub fn layer(self) -> SetResponseHeaderLayer<HeaderValue> {
        SetResponseHeaderLayer::if_not_present(CACHE_CONTROL, self.header_value())
    }
}
