use std::sync::Arc;

use axum::{Router, http::HeaderName, middleware::from_fn};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

use super::{
    api,
    middleware::{catch_panic_layer, json_error_middleware},
};

pub const API_PREFIX: &str = "/api";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Resource routes only, without the middleware stack.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new().nest(API_PREFIX, api::router(state))
}

/// The complete application: resource routes behind error normalization,
/// panic recovery, request ids, tracing and permissive CORS.
pub fn app(state: Arc<AppState>) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    router(state)
        .layer(from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
