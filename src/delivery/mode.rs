//! Request classification.
//!
//! # Responsibilities
//! - Decide, once per request, how the response will be consumed
//! - Streaming endpoints win over the fragment marker
//! - Everything else is a full page (browsers, crawlers)
//!
//! # Design Decisions
//! - Pure function of path and headers; no side effects
//! - Closed enum so every dispatch site matches all three cases

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName};

/// Header set by htmx on every request it issues.
pub const HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");

/// How a response will be consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryMode {
    /// Complete document for a navigation.
    FullPage,
    /// Partial swap requested by the hypermedia client.
    FragmentSwap,
    /// Server-pushed merges over an event stream.
    StreamUpdate,
}

impl DeliveryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryMode::FullPage => "full_page",
            DeliveryMode::FragmentSwap => "fragment_swap",
            DeliveryMode::StreamUpdate => "stream_update",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when the request carries `HX-Request: true`.
pub fn has_fragment_marker(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Classifies requests against the set of streaming endpoints.
#[derive(Debug, Clone, Default)]
pub struct RequestClassifier {
    stream_endpoints: HashSet<String>,
}

impl RequestClassifier {
    pub fn new<I, P>(stream_endpoints: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            stream_endpoints: stream_endpoints.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_stream_endpoint(&self, path: &str) -> bool {
        self.stream_endpoints.contains(path)
    }

    pub fn classify(&self, path: &str, headers: &HeaderMap) -> DeliveryMode {
        if self.is_stream_endpoint(path) {
            DeliveryMode::StreamUpdate
        } else if has_fragment_marker(headers) {
            DeliveryMode::FragmentSwap
        } else {
            DeliveryMode::FullPage
        }
    }
}

impl<S> FromRequestParts<S> for DeliveryMode
where
    S: Send + Sync,
    Arc<RequestClassifier>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let classifier = Arc::<RequestClassifier>::from_ref(state);
        let mode = classifier.classify(parts.uri.path(), &parts.headers);
        tracing::debug!(path = %parts.uri.path(), mode = %mode, "Request classified");
        Ok(mode)
    }
}
