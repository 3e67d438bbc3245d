//! Route handlers.
//!
//! Document handlers only pick a page and a status; classification happens in
//! the [`DeliveryMode`] extractor and everything after the render lives in
//! [`crate::delivery::dispatch`].

use std::collections::HashMap;

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, MethodRouter};

use crate::delivery::{stream, DeliveryMode, MergeFragment};
use crate::http::middleware::PathParams;
use crate::http::server::AppState;
use crate::render::pages::{self, DocPage};
use crate::render::showcase::{self, HTMX_EXAMPLE, MODAL_DEFAULT};
use crate::render::toast::ToastRequest;

pub const LOAD_DATEPICKER: &str = "/api/load-datepicker";
pub const LOAD_MODAL_HTMX: &str = "/api/load-modal-htmx";

/// Endpoints whose responses are always event streams.
pub const STREAM_ENDPOINTS: &[&str] = &[LOAD_DATEPICKER];

/// Where `/docs` and `/docs/getting-started` point.
pub const DOCS_HOME: &str = "/docs/introduction";

/// GET route rendering a fixed page with 200.
pub fn document(page: fn() -> DocPage) -> MethodRouter<AppState> {
    get(
        move |State(state): State<AppState>, mode: DeliveryMode, params: PathParams| async move {
            state.respond(&page(), mode, &params, StatusCode::OK)
        },
    )
}

pub async fn docs_home() -> Redirect {
    Redirect::to(DOCS_HOME)
}

pub async fn component(
    State(state): State<AppState>,
    mode: DeliveryMode,
    params: PathParams,
) -> Response {
    let slug = params.get("slug").unwrap_or_default();
    match pages::find_component(slug) {
        Some(component) => {
            state.respond(&pages::component_page(component), mode, &params, StatusCode::OK)
        }
        None => {
            tracing::debug!(slug = %slug, pattern = ?params.pattern(), "Unknown component");
            state.respond(&pages::not_found(), mode, &params, StatusCode::NOT_FOUND)
        }
    }
}

/// Fallback for every unmatched request.
pub async fn not_found(
    State(state): State<AppState>,
    mode: DeliveryMode,
    params: PathParams,
) -> Response {
    state.respond(&pages::not_found(), mode, &params, StatusCode::NOT_FOUND)
}

/// Toast fragment built from query-string and body fields; a body field wins
/// over a query field of the same name. Unreadable input leaves the fields
/// it would have supplied defaulted.
pub async fn toast_demo(
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Html<String> {
    let mut fields = match query {
        Ok(Query(fields)) => fields,
        Err(e) => {
            tracing::debug!(error = %e, "Unreadable toast query");
            HashMap::new()
        }
    };
    match form {
        Ok(Form(body)) => fields.extend(body),
        Err(e) => tracing::debug!(error = %e, "Unreadable toast form"),
    }
    Html(ToastRequest::from_form(&fields).render())
}

/// Push the modal showcase into the open page with a view transition.
pub async fn load_datepicker(mode: DeliveryMode) -> Response {
    let fragment = MergeFragment::new(MODAL_DEFAULT.html).view_transition(true);

    match mode {
        DeliveryMode::StreamUpdate => {
            let (body, handle) = stream::open();
            handle.push(&fragment);
            body.into_response()
        }
        DeliveryMode::FullPage | DeliveryMode::FragmentSwap => {
            tracing::warn!(path = LOAD_DATEPICKER, mode = %mode, "Stream endpoint not classified as stream");
            Html(fragment.html).into_response()
        }
    }
}

pub async fn load_modal_htmx() -> Html<String> {
    Html(showcase::render_all(HTMX_EXAMPLE))
}
