//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with every route
//! - Wire up middleware (request ID, tracing, cache policy, timeout, body limit)
//! - Bind the router to a listener and drain it on shutdown
//!
//! # Layer order (outermost first)
//! ```text
//! SetRequestId → Trace → PropagateRequestId → CacheControl → Timeout → BodyLimit
//!     → router → PathParams (matched routes only) → handler
//! ```

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::FromRef;
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::delivery::{dispatch, DeliveryMode, RequestClassifier};
use crate::http::middleware::{normalize_path_params, CachePolicy, PathParams};
use crate::http::{assets, handlers};
use crate::lifecycle::shutdown;
use crate::metric::MetricCache;
use crate::render::{pages, Page, RenderContext};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<RequestClassifier>,
    pub stars: MetricCache,
    pub site_name: Arc<str>,
    pub repository_url: Arc<str>,
}

impl AppState {
    pub fn new(config: &ServerConfig, stars: MetricCache) -> Self {
        Self {
            classifier: Arc::new(RequestClassifier::new(
                handlers::STREAM_ENDPOINTS.iter().copied(),
            )),
            stars,
            site_name: config.site.name.as_str().into(),
            repository_url: config.stars.repository_url().into(),
        }
    }

    /// Per-request render context. The star count is read from the cache and
    /// never fetched here.
    pub fn render_context(&self, params: &PathParams) -> RenderContext {
        RenderContext {
            site_name: self.site_name.to_string(),
            repository_url: self.repository_url.to_string(),
            stars: self.stars.read(),
            path: params.path().to_string(),
        }
    }

    /// Render `page` and deliver it in `mode` with `status`.
    pub fn respond(
        &self,
        page: &dyn Page,
        mode: DeliveryMode,
        params: &PathParams,
        status: StatusCode,
    ) -> Response {
        let ctx = self.render_context(params);
        dispatch(page, &ctx, mode, status).unwrap_or_else(IntoResponse::into_response)
    }
}

impl FromRef<AppState> for Arc<RequestClassifier> {
    fn from_ref(state: &AppState) -> Self {
        state.classifier.clone()
    }
}

/// HTTP server for the docs site.
pub struct DocsServer {
    router: Router,
    config: ServerConfig,
}

impl DocsServer {
    /// Create a new server reading star counts from `stars`.
    pub fn new(config: ServerConfig, stars: MetricCache) -> Self {
        let state = AppState::new(&config, stars);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let cache_policy = CachePolicy::for_mode(config.runtime, config.cache_control.max_age_secs);

        Router::new()
            .route("/", handlers::document(pages::landing))
            .route("/docs", get(handlers::docs_home))
            .route("/docs/getting-started", get(handlers::docs_home))
            .route("/docs/introduction", handlers::document(pages::introduction))
            .route("/docs/how-to-use", handlers::document(pages::how_to_use))
            .route("/docs/themes", handlers::document(pages::themes))
            .route("/docs/components", handlers::document(pages::components_overview))
            .route("/docs/components/{slug}", get(handlers::component))
            .route("/docs/htmx-example", handlers::document(pages::htmx_example))
            .route("/docs/datastar-example", handlers::document(pages::datastar_example))
            .route("/docs/toast/demo", post(handlers::toast_demo))
            .route(handlers::LOAD_DATEPICKER, get(handlers::load_datepicker))
            .route(handlers::LOAD_MODAL_HTMX, get(handlers::load_modal_htmx))
            .merge(assets::routes(&config.assets))
            .route_layer(middleware::from_fn(normalize_path_params))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::not_found)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(cache_policy.layer())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                let request_id = req
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "request",
                    method = %req.method(),
                    path = %req.uri().path(),
                    request_id = %request_id,
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until `shutdown` fires, then drain
    /// in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            runtime = %self.config.runtime,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
