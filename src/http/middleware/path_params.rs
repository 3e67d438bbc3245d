//! Uniform access to captured route variables.
//!
//! The middleware runs after routing, reads whatever the router captured for
//! the matched pattern and attaches a [`PathParams`] to the request. Handlers
//! then extract `PathParams` instead of declaring a `Path<T>` shape per route.

use std::convert::Infallible;

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, MatchedPath, Path, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

/// Route variables plus the request path and matched pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    path: String,
    pattern: Option<String>,
    values: Vec<(String, String)>,
}

impl PathParams {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push((name.into(), value.into()));
        self
    }

    /// Decoded value of a captured variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Request path as received.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Route pattern that matched, e.g. `/docs/components/{slug}`.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }
}

/// Attach [`PathParams`] to the request. Install with `route_layer`.
pub async fn normalize_path_params(
    captured: Result<Path<Vec<(String, String)>>, PathRejection>,
    mut req: Request,
    next: Next,
) -> Response {
    let mut params = PathParams::new(req.uri().path());
    if let Some(matched) = req.extensions().get::<MatchedPath>() {
        params = params.with_pattern(matched.as_str());
    }
    match captured {
        Ok(Path(values)) => params.values = values,
        Err(e) => tracing::debug!(path = %params.path, error = %e, "No path variables captured"),
    }

    req.extensions_mut().insert(params);
    next.run(req).await
}

impl<S> FromRequestParts<S> for PathParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    /// Requests that bypassed the middleware (the fallback) get the path only.
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<PathParams>()
            .cloned()
            .unwrap_or_else(|| PathParams::new(parts.uri.path())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn describe(params: PathParams) -> String {
        let values: Vec<String> = ["slug", "section", "page"]
            .iter()
            .filter_map(|name| params.get(name).map(|v| format!("{}={}", name, v)))
            .collect();
        format!(
            "{}|{}|{}",
            params.path(),
            params.pattern().unwrap_or("-"),
            values.join(",")
        )
    }

    fn app() -> Router {
        Router::new()
            .route("/docs/components/{slug}", get(|p: PathParams| async move { describe(p) }))
            .route("/docs/{section}/{page}", get(|p: PathParams| async move { describe(p) }))
            .route("/plain", get(|p: PathParams| async move { describe(p) }))
            .route_layer(middleware::from_fn(normalize_path_params))
            .fallback(|p: PathParams| async move { describe(p) })
    }

    async fn call(uri: &str) -> String {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_single_variable() {
        assert_eq!(
            call("/docs/components/button").await,
            "/docs/components/button|/docs/components/{slug}|slug=button"
        );
    }

    #[tokio::test]
    async fn test_multiple_variables_keep_order() {
        assert_eq!(
            call("/docs/guides/setup").await,
            "/docs/guides/setup|/docs/{section}/{page}|section=guides,page=setup"
        );
    }

    #[tokio::test]
    async fn test_values_are_decoded() {
        assert_eq!(
            call("/docs/components/date%20picker").await,
            "/docs/components/date%20picker|/docs/components/{slug}|slug=date picker"
        );
    }

    #[tokio::test]
    async fn test_route_without_variables() {
        assert_eq!(call("/plain").await, "/plain|/plain|");
    }

    #[tokio::test]
    async fn test_fallback_gets_path_only() {
        assert_eq!(call("/nowhere/at/all").await, "/nowhere/at/all|-|");
    }

    #[test]
    fn test_get() {
        let params = PathParams::new("/x").with_value("slug", "button");
        assert_eq!(params.get("slug"), Some("button"));
        assert_eq!(params.get("other"), None);
        assert_eq!(PathParams::new("/x").get("slug"), None);
    }
}
