//! Field validation for the product endpoints.
//!
//! All checks are pure and synchronous, run before any database call, and
//! short-circuit on the first violation. Presence is an explicit
//! "key provided" check on `Option<T>` fields, so a legitimate value of `0`
//! is never mistaken for an omitted field.

use crate::{
    error::ApiError,
    models::{CreateProductRequest, NewProduct, ProductChanges, UpdateProductRequest},
};

/// Rejects an absent field with a message naming it.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::invalid_input(format!("Missing required field: {field}")))
}

/// Rejects the empty string.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::invalid_input(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

/// Rejects negative and non-finite numbers. JSON itself cannot encode NaN or
/// infinities, but the check keeps the function total.
pub fn require_non_negative(field: &'static str, value: f64) -> Result<(), ApiError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::invalid_input(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

/// Rejects numbers with a fractional part, returning the integer value.
pub fn require_integral(field: &'static str, value: f64) -> Result<i64, ApiError> {
    if value.fract() != 0.0 {
        return Err(ApiError::invalid_input(format!(
            "{field} must be an integer"
        )));
    }
    Ok(value as i64)
}

impl CreateProductRequest {
    /// Validates a create payload into a `NewProduct`.
    ///
    /// Check order, first failure wins: all four fields present, then
    /// name/type non-empty, then price/amount non-negative, then amount
    /// integral. Numeric *type* mismatches never reach this point; typed
    /// deserialization rejects them at the body-parsing boundary.
    pub fn validate(self) -> Result<NewProduct, ApiError> {
        let name = require("name", self.name)?;
        let product_type = require("type", self.product_type)?;
        let price = require("price", self.price)?;
        let amount = require("amount", self.amount)?;

        require_non_empty("name", &name)?;
        require_non_empty("type", &product_type)?;

        require_non_negative("price", price)?;
        require_non_negative("amount", amount)?;
        let amount = require_integral("amount", amount)?;

        Ok(NewProduct {
            name,
            product_type,
            price,
            amount,
        })
    }
}

impl UpdateProductRequest {
    /// Validates a partial update into `ProductChanges`.
    ///
    /// At least one field must be supplied. Every supplied field is checked
    /// here, before any storage call, so a validation failure on any field
    /// means nothing is written at all.
    pub fn validate(self) -> Result<ProductChanges, ApiError> {
        let mut changes = ProductChanges::default();

        if let Some(name) = self.name {
            require_non_empty("name", &name)?;
            changes.name = Some(name);
        }
        if let Some(product_type) = self.product_type {
            require_non_empty("type", &product_type)?;
            changes.product_type = Some(product_type);
        }
        if let Some(price) = self.price {
            require_non_negative("price", price)?;
            changes.price = Some(price);
        }
        if let Some(amount) = self.amount {
            require_non_negative("amount", amount)?;
            changes.amount = Some(require_integral("amount", amount)?);
        }

        if changes.is_empty() {
            return Err(ApiError::invalid_input(
                "At least one field must be provided",
            ));
        }

        Ok(changes)
    }
}
