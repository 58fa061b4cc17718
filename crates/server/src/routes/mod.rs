use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use common::types::{ErrorBody, Health};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::auth::{require_bearer_token, BearerAuth};
use crate::errors::JsonApiError;
use crate::state::AppState;

pub mod resource;

pub use resource::resource_router;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not Found")))
}

/// Build the full application router: the four collections, health, the
/// 404 fallback, and the optional bearer-token gate.
pub fn build_router(state: AppState) -> Router {
    let services = &state.services;
    let app = Router::new()
        .route("/health", get(health))
        .merge(resource_router("products", services.products.clone()))
        .merge(resource_router("orders", services.orders.clone()))
        .merge(resource_router("users", services.users.clone()))
        .merge(resource_router("business", services.business.clone()))
        .fallback(not_found);

    let auth = &state.config.auth;
    let app = match auth.secret() {
        Some(secret) if auth.enabled => app.layer(middleware::from_fn_with_state(
            BearerAuth::new(secret),
            require_bearer_token,
        )),
        _ => app,
    };

    with_http_layers(app, Duration::from_secs(state.config.server.request_timeout_secs))
}

/// Give bodiless framework responses (timeout, wrong method) the `{message}` shape.
async fn json_error_body(res: Response) -> Response {
    if res.headers().contains_key(header::CONTENT_TYPE) {
        return res;
    }
    let message = match res.status() {
        StatusCode::REQUEST_TIMEOUT => "Request Timeout",
        StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
        _ => return res,
    };
    let mut out = JsonApiError::new(res.status(), message).into_response();
    if let Some(allow) = res.headers().get(header::ALLOW) {
        out.headers_mut().insert(header::ALLOW, allow.clone());
    }
    out
}

/// Timeout, CORS and request tracing shared by every route.
pub fn with_http_layers(app: Router, timeout: Duration) -> Router {
    app.layer(TimeoutLayer::new(timeout))
        .layer(middleware::map_response(json_error_body))
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
