use crate::{
    AppState,
    error::{ApiError, MessageResponse},
    models::{CreateProductRequest, Product, UpdateProductRequest},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// Parses an id path segment, rejecting anything that is not an integer
/// before any storage work happens.
fn parse_product_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::invalid_input("Invalid product id"))
}

/// list_products
///
/// Returns every product as a JSON array. Storage failures surface as an
/// opaque 500.
#[utoipa::path(
    get,
    path = "/product/all",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.repo.list_products().await?;
    Ok(Json(products))
}

/// create_product
///
/// Validates the payload and inserts a new row. The database assigns the id;
/// the caller gets a confirmation message only, not the new id.
///
/// The payload arrives as `Result<Json<_>, JsonRejection>` so that malformed
/// or mistyped bodies become 400s in the service's own error shape.
#[utoipa::path(
    post,
    path = "/product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 400, description = "Validation failure", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let new = payload.validate()?;
    state.repo.insert_product(new).await?;
    Ok(Json(MessageResponse::new("Product added")))
}

/// delete_product
///
/// Deletes one product by id. A non-numeric id is a 400 with no storage
/// call; an id matching no row is a 404, distinct from genuine storage
/// failures (500).
#[utoipa::path(
    delete,
    path = "/product/{id}",
    params(("id" = String, Path, description = "Product id, must be numeric")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 404, description = "No such product", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_product_id(&id)?;

    if state.repo.delete_product(id).await? {
        Ok(Json(MessageResponse::new("Product deleted")))
    } else {
        Err(ApiError::NotFound("Product not found".to_string()))
    }
}

/// update_product
///
/// Applies a partial update to one product. Every supplied field is
/// validated before any write, and all field updates run in one
/// transaction, so a failure anywhere means nothing changed.
#[utoipa::path(
    put,
    path = "/product/{id}",
    params(("id" = String, Path, description = "Product id, must be numeric")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 400, description = "Invalid id or validation failure", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 404, description = "No such product", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_product_id(&id)?;
    let Json(payload) = payload?;
    let changes = payload.validate()?;

    if state.repo.update_product(id, changes).await? {
        Ok(Json(MessageResponse::new("Product updated")))
    } else {
        Err(ApiError::NotFound("Product not found".to_string()))
    }
}
