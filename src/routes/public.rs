use crate::AppState;
use axum::{Router, routing::get};

/// Public Router Module
///
/// The only unauthenticated surface of the service. Everything that reads or
/// writes product data lives behind the token gate in `products`.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Unauthenticated liveness probe for monitoring and load balancers.
        .route("/health", get(|| async { "ok" }))
}
