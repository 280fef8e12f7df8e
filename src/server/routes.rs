// src/server/routes.rs

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug};

use crate::service::Validator;
use crate::types::ValidationResult;

/// Path suffix that selects the validation endpoint, whatever the prefix
/// (`/pipelines/parse`, `/api/pipelines/parse`, ...).
pub const PARSE_PATH_SUFFIX: &str = "/pipelines/parse";

#[derive(Debug, Clone)]
pub struct AppState {
    validator: Validator,
}

impl AppState {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }
}

/// Build the application router.
///
/// Every request goes through [`dispatch`], which matches on method and
/// path suffix. CORS is unconditionally permissive.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .fallback(dispatch)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(trace_layer)
        .with_state(state)
}

async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let path = uri.path();

    if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else if method == Method::GET && path == "/" {
        Json(json!({ "Ping": "Pong" })).into_response()
    } else if method == Method::POST && path.ends_with(PARSE_PATH_SUFFIX) {
        match body {
            Ok(bytes) => parse_pipeline(&state.validator, &bytes),
            Err(rejection) => {
                debug!(%rejection, "request body could not be read");
                (rejection.status(), Json(ValidationResult::degraded())).into_response()
            }
        }
    } else {
        debug!(%method, path, "no route");
        (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" }))).into_response()
    }
}

fn parse_pipeline(validator: &Validator, body: &[u8]) -> Response {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => Json(validator.validate_json(value)).into_response(),
        Err(err) => {
            debug!(%err, "request body is not JSON");
            (StatusCode::BAD_REQUEST, Json(ValidationResult::degraded())).into_response()
        }
    }
}
