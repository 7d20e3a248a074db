use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::auth::AuthError;

/// MessageResponse
///
/// The single JSON body shape used for every error response and for the
/// plain confirmation responses of the mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// ApiError
///
/// The full error taxonomy of the service. Every handler returns
/// `Result<_, ApiError>`; the IntoResponse impl below is the single place
/// where errors are translated to HTTP statuses and JSON bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed the bearer-token gate. Carries the specific reason.
    #[error("{0}")]
    Unauthorized(#[from] AuthError),

    /// A request field failed validation. The message names the field.
    #[error("{0}")]
    InvalidInput(String),

    /// The targeted row does not exist (zero rows affected).
    #[error("{0}")]
    NotFound(String),

    /// Anything that went wrong at the database layer. The detail is logged
    /// server-side and never reaches the client.
    #[error("storage error")]
    Storage(#[from] sqlx::Error),
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<JsonRejection> for ApiError {
    /// Malformed or mistyped JSON bodies become 400s with the deserializer's
    /// field-accurate message instead of axum's plain-text rejection.
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Unauthorized(reason) => (StatusCode::UNAUTHORIZED, reason.to_string()),
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Storage(e) => {
                // Full detail for the operator, opaque message for the caller.
                tracing::error!("storage error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}
