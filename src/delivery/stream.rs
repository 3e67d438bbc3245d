//! Server-pushed fragment merges over an event stream.
//!
//! # Responsibilities
//! - Open a one-way `text/event-stream` response that outlives its handler
//! - Encode merges as Datastar `datastar-merge-fragments` events
//! - Drop pushes silently once the client is gone
//!
//! # Data Flow
//! ```text
//! handler → open() → (FragmentStream, StreamHandle)
//!     FragmentStream → returned as the response body (SSE + keep-alive)
//!     StreamHandle   → push(fragment) → channel → event on the wire
//! ```
//!
//! # Design Decisions
//! - The stream stays open while any handle is alive and ends after the
//!   last handle is dropped and queued events are flushed
//! - No acknowledgements and no retries

use std::convert::Infallible;

use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::observability::metrics;

/// Event name understood by the Datastar client.
pub const MERGE_FRAGMENTS_EVENT: &str = "datastar-merge-fragments";

/// Where a merged fragment lands relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Morph the element with the same id.
    #[default]
    Morph,
    Inner,
    Outer,
    Prepend,
    Append,
    Before,
    After,
    UpsertAttributes,
}

impl MergeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MergeMode::Morph => "morph",
            MergeMode::Inner => "inner",
            MergeMode::Outer => "outer",
            MergeMode::Prepend => "prepend",
            MergeMode::Append => "append",
            MergeMode::Before => "before",
            MergeMode::After => "after",
            MergeMode::UpsertAttributes => "upsertAttributes",
        }
    }
}

/// A rendered fragment plus placement and transition hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeFragment {
    pub html: String,
    /// CSS selector of the target; `None` merges by the fragment's own id.
    pub selector: Option<String>,
    pub merge_mode: MergeMode,
    /// Ask the client to wrap the merge in a view transition.
    pub use_view_transition: bool,
}

impl MergeFragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            selector: None,
            merge_mode: MergeMode::default(),
            use_view_transition: false,
        }
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn merge_mode(mut self, mode: MergeMode) -> Self {
        self.merge_mode = mode;
        self
    }

    pub fn view_transition(mut self, enabled: bool) -> Self {
        self.use_view_transition = enabled;
        self
    }

    /// `data:` payload lines, without the `data: ` prefix.
    ///
    /// Defaults are omitted; every line of the fragment becomes its own
    /// `fragments` line.
    pub fn data_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(selector) = &self.selector {
            lines.push(format!("selector {}", selector));
        }
        if self.merge_mode != MergeMode::Morph {
            lines.push(format!("mergeMode {}", self.merge_mode.as_str()));
        }
        if self.use_view_transition {
            lines.push("useViewTransition true".to_string());
        }
        for line in self.html.lines() {
            lines.push(format!("fragments {}", line.replace('\r', "")));
        }
        lines
    }

    fn to_event(&self) -> Event {
        Event::default()
            .event(MERGE_FRAGMENTS_EVENT)
            .data(self.data_lines().join("\n"))
    }
}

/// Sending side of an open stream.
#[derive(Debug, Clone)]
pub struct StreamHandle {
    id: Uuid,
    tx: mpsc::UnboundedSender<Event>,
}

impl StreamHandle {
    /// Queue a merge. Returns `false` when the client has disconnected; that
    /// is not an error and nothing is retried.
    pub fn push(&self, fragment: &MergeFragment) -> bool {
        let delivered = self.tx.send(fragment.to_event()).is_ok();
        metrics::record_stream_push(delivered);
        if delivered {
            tracing::debug!(stream_id = %self.id, view_transition = fragment.use_view_transition, "Fragment pushed");
        } else {
            tracing::debug!(stream_id = %self.id, "Stream closed, push dropped");
        }
        delivered
    }
}

/// Receiving side of an open stream; the response body.
#[derive(Debug)]
pub struct FragmentStream {
    id: Uuid,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl IntoResponse for FragmentStream {
    fn into_response(self) -> Response {
        tracing::debug!(stream_id = %self.id, "Stream response started");
        let events = futures_util::stream::unfold(self.rx, |mut rx| async move {
            rx.recv().await.map(|event| (Ok::<_, Infallible>(event), rx))
        });

        Sse::new(events)
            .keep_alive(KeepAlive::default())
            .into_response()
    }
}

/// Open a new stream.
pub fn open() -> (FragmentStream, StreamHandle) {
    let id = Uuid::new_v4();
    let (tx, rx) = mpsc::unbounded_channel();
    tracing::debug!(stream_id = %id, "Stream opened");
    (FragmentStream { id, rx }, StreamHandle { id, tx })
}
