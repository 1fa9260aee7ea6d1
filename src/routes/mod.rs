// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler, method_not_allowed, preflight_handler};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let admin_routes = Router::new().route("/metrics", get(get_metrics_handler));

    Router::new()
        .route(
            "/",
            post(chat_handler)
                .options(preflight_handler)
                .fallback(method_not_allowed),
        )
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}
