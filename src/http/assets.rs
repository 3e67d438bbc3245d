//! Static files: the asset directory, root-level favicons, sitemap and robots.
//!
//! Favicons are also served from the site root because some browsers ignore
//! the `<link rel="icon">` tags and ask for `/favicon.ico` directly.

use std::path::{Path, PathBuf};

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::AssetsConfig;
use crate::http::server::AppState;

/// Root path, file under `<asset_dir>/img/favicon/`, content type.
pub const FAVICONS: &[(&str, &str, &str)] = &[
    ("/favicon.ico", "favicon.ico", "image/x-icon"),
    ("/apple-touch-icon.png", "apple-touch-icon.png", "image/png"),
    ("/favicon-32x32.png", "favicon-32x32.png", "image/png"),
    ("/favicon-16x16.png", "favicon-16x16.png", "image/png"),
];

/// Routes for every static file the site serves.
pub fn routes(config: &AssetsConfig) -> Router<AppState> {
    let asset_dir = PathBuf::from(&config.asset_dir);
    let static_dir = Path::new(&config.static_dir);

    let mut router = Router::new().nest_service("/assets", ServeDir::new(&asset_dir));

    let favicon_dir = asset_dir.join("img").join("favicon");
    for (route, file, content_type) in FAVICONS {
        router = router.route(
            route,
            static_file(favicon_dir.join(file), content_type, "Favicon not found"),
        );
    }

    router
        .route(
            "/sitemap.xml",
            static_file(static_dir.join("sitemap.xml"), "application/xml", "Sitemap not found"),
        )
        .route(
            "/robots.txt",
            static_file(static_dir.join("robots.txt"), "text/plain", "Robots.txt not found"),
        )
}

/// GET handler returning the file at `path`, or a plain 404 with `missing`.
fn static_file(
    path: PathBuf,
    content_type: &'static str,
    missing: &'static str,
) -> MethodRouter<AppState> {
    get(move || {
        let path = path.clone();
        async move { read_file(&path, content_type, missing).await }
    })
}

async fn read_file(path: &Path, content_type: &'static str, missing: &'static str) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => ([(CONTENT_TYPE, content_type)], bytes).into_response(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Static file unavailable");
            (StatusCode::NOT_FOUND, missing).into_response()
        }
    }
}
