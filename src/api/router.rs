use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use super::faqs;
use super::health;
use super::state::AppState;

/// Create a minimal router without state (for testing/backward compatibility)
/// Note: /ready endpoint is not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // FAQ resource
        .nest("/api", create_faq_router())
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Create the FAQ resource router
pub fn create_faq_router() -> Router<AppState> {
    Router::new()
        .route("/faqs", get(faqs::list_faqs))
        .route("/faqs", post(faqs::create_faq))
        .route("/faqs/{faq_id}", get(faqs::get_faq))
        .route("/faqs/{faq_id}", put(faqs::update_faq))
        .route("/faqs/{faq_id}", delete(faqs::delete_faq))
}
