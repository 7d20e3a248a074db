use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::{config::AppConfig, error::ApiError};

/// AuthError
///
/// The three distinct ways a request can fail the bearer-token gate. Each
/// variant carries its own client-facing message; all of them map to 401.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Invalid authorization format, expected Bearer token")]
    MalformedHeader,

    #[error("Invalid API token")]
    InvalidToken,
}

/// ApiToken
///
/// Capability extractor for the shared-secret gate. Its presence as a handler
/// or middleware argument proves the request carried
/// `Authorization: Bearer <token>` with a token matching the configured
/// secret. There is no session state and no per-caller identity; one secret
/// gates every operation uniformly.
///
/// The extractor rejects with a distinct 401 message for each failure:
/// missing header, malformed header, and mismatched token. The token
/// comparison is constant-time to avoid leaking the secret through timing.
#[derive(Debug, Clone, Copy)]
pub struct ApiToken;

impl<S> FromRequestParts<S> for ApiToken
where
    S: Send + Sync,
    // Lets the extractor pull the configured secret out of the app state.
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingHeader)?;

        // The header must be exactly two space-separated tokens, the first
        // being the literal "Bearer" and the second non-empty.
        let fields: Vec<&str> = auth_header.split(' ').collect();
        if fields.len() != 2 || fields[0] != "Bearer" || fields[1].is_empty() {
            return Err(AuthError::MalformedHeader.into());
        }
        let token = fields[1];

        if verify_token(token, &config.api_token) {
            Ok(ApiToken)
        } else {
            Err(AuthError::InvalidToken.into())
        }
    }
}

/// Compares the supplied token against the configured secret in constant
/// time. Inputs of different lengths compare unequal.
fn verify_token(supplied: &str, expected: &str) -> bool {
    supplied.as_bytes().ct_eq(expected.as_bytes()).into()
}
