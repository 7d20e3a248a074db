use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post, put},
};

/// Product Router Module
///
/// The four CRUD operations over the products table. Every route here
/// requires `Authorization: Bearer <token>`; the check itself is applied as
/// a middleware layer in `create_router`, so no handler in this module runs
/// for an unauthenticated request.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        // GET /product/all
        // Lists every product. No pagination or filtering.
        .route("/product/all", get(handlers::list_products))
        // POST /product
        // Creates a product from a fully populated payload.
        .route("/product", post(handlers::create_product))
        // PUT/DELETE /product/{id}
        // Partial update and removal of a single product by numeric id.
        .route(
            "/product/{id}",
            put(handlers::update_product).delete(handlers::delete_product),
        )
}
