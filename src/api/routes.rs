use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/", get(handlers::index))
        // Recommendations
        .route("/recommend", get(handlers::recommend_ui))
        .route("/recommend_books", post(handlers::recommend_books))
        // Contact
        .route("/contact", get(handlers::contact))
        .route("/send_message", post(handlers::send_message))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
