//! Fragment dispatch.
//!
//! # Responsibilities
//! - Render the page once, in memory, whatever the mode
//! - Pick the targets and wrapping for the classified mode
//! - Map render failures to a plain 500 before any byte is written
//!
//! # Target selection
//! ```text
//! FullPage     → title, header, sidebar, content, toc, footer (full document)
//! FragmentSwap → content, toc (out-of-band), title (out-of-band)
//! StreamUpdate → merges of content, toc, title
//! ```

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::delivery::mode::DeliveryMode;
use crate::delivery::stream::{self, MergeFragment};
use crate::observability::metrics;
use crate::render::{layout, Document, Page, RenderContext, RenderError, RenderTarget};

/// Marks a fragment for out-of-band placement by htmx.
pub const OOB_ATTR: &str = r#"hx-swap-oob="true""#;

/// Targets of a partial response, in emission order.
pub const SWAP_TARGETS: [RenderTarget; 3] =
    [RenderTarget::Content, RenderTarget::Toc, RenderTarget::Title];

/// Errors surfaced by dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("internal render error: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal render error").into_response()
    }
}

/// Targets produced for `mode`, in emission order.
pub fn targets_for(mode: DeliveryMode) -> &'static [RenderTarget] {
    match mode {
        DeliveryMode::FullPage => &RenderTarget::ALL,
        DeliveryMode::FragmentSwap | DeliveryMode::StreamUpdate => &SWAP_TARGETS,
    }
}

/// Body of a swap response: primary `content`, then `toc` and `title` marked
/// out-of-band.
pub fn fragment_body(doc: &Document) -> Result<String, RenderError> {
    let mut parts = Vec::with_capacity(SWAP_TARGETS.len());
    for target in SWAP_TARGETS {
        let attrs = if target == RenderTarget::Content { "" } else { OOB_ATTR };
        parts.push(target.wrap(doc.require(target)?, attrs));
    }
    Ok(parts.join("\n"))
}

/// Merges for a stream update. Only the primary content asks for a view
/// transition.
pub fn stream_merges(doc: &Document) -> Result<Vec<MergeFragment>, RenderError> {
    SWAP_TARGETS
        .iter()
        .map(|&target| {
            Ok(MergeFragment::new(target.wrap(doc.require(target)?, ""))
                .view_transition(target == RenderTarget::Content))
        })
        .collect()
}

/// Render `page` and deliver it according to `mode` with `status`.
///
/// The page always renders every target; `mode` alone decides what is sent.
pub fn dispatch(
    page: &dyn Page,
    ctx: &RenderContext,
    mode: DeliveryMode,
    status: StatusCode,
) -> Result<Response, DispatchError> {
    let result = render(page, ctx, mode, status);

    match &result {
        Ok(_) => {
            metrics::record_document_request(mode.as_str(), status.as_u16());
            tracing::debug!(path = %ctx.path, mode = %mode, targets = ?targets_for(mode), "Document delivered");
        }
        Err(e) => {
            metrics::record_render_failure(mode.as_str());
            tracing::error!(path = %ctx.path, mode = %mode, error = %e, "Render failed");
        }
    }
    result
}

fn render(
    page: &dyn Page,
    ctx: &RenderContext,
    mode: DeliveryMode,
    status: StatusCode,
) -> Result<Response, DispatchError> {
    let doc = page.render(ctx)?;

    let response = match mode {
        DeliveryMode::FullPage => html_response(status, layout::full_page(&doc)?),
        DeliveryMode::FragmentSwap => html_response(status, fragment_body(&doc)?),
        DeliveryMode::StreamUpdate => {
            let merges = stream_merges(&doc)?;
            let (stream, handle) = stream::open();
            for merge in &merges {
                handle.push(merge);
            }
            (status, stream).into_response()
        }
    };

    Ok(response)
}

fn html_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [(CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"))],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Complete;

    impl Page for Complete {
        fn render(&self, _ctx: &RenderContext) -> Result<Document, RenderError> {
            Ok(RenderTarget::ALL
                .into_iter()
                .fold(Document::new(), |doc, t| doc.with(t, format!("[{}]", t))))
        }
    }

    struct NoToc;

    impl Page for NoToc {
        fn render(&self, _ctx: &RenderContext) -> Result<Document, RenderError> {
            Ok(RenderTarget::ALL
                .into_iter()
                .filter(|t| *t != RenderTarget::Toc)
                .fold(Document::new(), |doc, t| doc.with(t, "x")))
        }
    }

    struct Failing;

    impl Page for Failing {
        fn render(&self, _ctx: &RenderContext) -> Result<Document, RenderError> {
            Err(RenderError::MissingData("component data"))
        }
    }

    async fn body_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn ids_in(body: &str) -> Vec<String> {
        body.match_indices(" id=\"")
            .map(|(i, m)| {
                let rest = &body[i + m.len()..];
                rest[..rest.find('"').unwrap()].to_string()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_fragment_swap_emits_exactly_three_targets_in_order() {
        let response = dispatch(&Complete, &RenderContext::default(), DeliveryMode::FragmentSwap, StatusCode::OK).unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_of(response).await;
        assert_eq!(ids_in(&body), vec!["content", "toc", "title"]);
        assert!(body.starts_with("<main id=\"content\">[content]</main>"));
        assert!(body.contains("<nav id=\"toc\" hx-swap-oob=\"true\">[toc]</nav>"));
        assert!(body.contains("<title id=\"title\" hx-swap-oob=\"true\">[title]</title>"));
        assert!(!body.contains("<!DOCTYPE"));
    }

    #[tokio::test]
    async fn test_full_page_contains_whole_document() {
        let response = dispatch(&Complete, &RenderContext::default(), DeliveryMode::FullPage, StatusCode::OK).unwrap();
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );

        let body = body_of(response).await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert_eq!(
            ids_in(&body),
            RenderTarget::ALL.iter().map(|t| t.name().to_string()).collect::<Vec<_>>()
        );
        assert!(!body.contains("hx-swap-oob"));
    }

    #[tokio::test]
    async fn test_status_is_preserved() {
        for mode in [DeliveryMode::FullPage, DeliveryMode::FragmentSwap, DeliveryMode::StreamUpdate] {
            let response = dispatch(&Complete, &RenderContext::default(), mode, StatusCode::NOT_FOUND).unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "mode {}", mode);
        }
    }

    #[tokio::test]
    async fn test_stream_update_pushes_merges() {
        let response = dispatch(&Complete, &RenderContext::default(), DeliveryMode::StreamUpdate, StatusCode::OK).unwrap();
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/event-stream");

        let body = body_of(response).await;
        let content = body.find("fragments <main id=\"content\">").unwrap();
        let toc = body.find("fragments <nav id=\"toc\">").unwrap();
        let title = body.find("fragments <title id=\"title\">").unwrap();
        assert!(content < toc && toc < title);
        assert_eq!(body.matches("event: datastar-merge-fragments").count(), 3);
        assert_eq!(body.matches("useViewTransition true").count(), 1);
    }

    #[test]
    fn test_render_failure_is_internal_error() {
        for mode in [DeliveryMode::FullPage, DeliveryMode::FragmentSwap, DeliveryMode::StreamUpdate] {
            let err = dispatch(&Failing, &RenderContext::default(), mode, StatusCode::OK).unwrap_err();
            assert!(matches!(err, DispatchError::Render(RenderError::MissingData(_))));
            assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_missing_target_fails_every_mode() {
        for mode in [DeliveryMode::FullPage, DeliveryMode::FragmentSwap, DeliveryMode::StreamUpdate] {
            let err = dispatch(&NoToc, &RenderContext::default(), mode, StatusCode::OK).unwrap_err();
            assert!(matches!(
                err,
                DispatchError::Render(RenderError::MissingTarget(RenderTarget::Toc))
            ));
        }
    }

    #[test]
    fn test_targets_for_mode() {
        assert_eq!(targets_for(DeliveryMode::FullPage).len(), 6);
        assert_eq!(
            targets_for(DeliveryMode::FragmentSwap),
            &[RenderTarget::Content, RenderTarget::Toc, RenderTarget::Title]
        );
    }
}
