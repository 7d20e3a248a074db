use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Product
///
/// The single persisted entity, one row of the `products` table.
/// `id` is assigned by the database on insert and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, FromRow, Default)]
pub struct Product {
    pub id: i64,
    pub name: String,

    /// Maps the SQL/JSON field "type" to the Rust field "product_type",
    /// since `type` is a reserved keyword in Rust.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub product_type: String,

    pub price: f64,
    pub amount: i64,
}

/// --- Request Payloads (Input Schemas) ---

/// CreateProductRequest
///
/// Input payload for POST /product. Every field is modelled as `Option<T>`
/// so that "key missing" is distinguishable from any legitimate value
/// (including `0`); the validator rejects absent keys with a field-specific
/// message instead of letting deserialization produce a generic failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct CreateProductRequest {
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub product_type: Option<String>,

    /// Accepted as a JSON number; fractional values are valid.
    pub price: Option<f64>,

    /// Accepted as a JSON number but must be integral.
    pub amount: Option<f64>,
}

/// UpdateProductRequest
///
/// Partial update payload for PUT /product/{id}. All fields are optional and
/// omitted from serialization when `None`; at least one must be present.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

/// --- Validated Forms (Output of the Validator) ---

/// NewProduct
///
/// A fully validated create payload: every field present, strings non-empty,
/// numbers non-negative, amount integral. Only this type reaches storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub product_type: String,
    pub price: f64,
    pub amount: i64,
}

/// ProductChanges
///
/// A fully validated partial update: the surviving subset of fields, each
/// already checked. Guaranteed non-empty by the validator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub product_type: Option<String>,
    pub price: Option<f64>,
    pub amount: Option<i64>,
}

impl ProductChanges {
    /// True when no field is set. The validator rejects this case before it
    /// can reach the repository.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.product_type.is_none()
            && self.price.is_none()
            && self.amount.is_none()
    }
}
