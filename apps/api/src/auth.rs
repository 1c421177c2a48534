//! Request-scoped identity from the managed identity provider's bearer tokens.
//!
//! Tokens are HS256 JWTs signed with the provider's shared secret. The
//! extractor rejects with `Unauthorized` on any missing header, malformed
//! token, bad signature, or expired claim — handlers never see an
//! unauthenticated request.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct Claims {
    /// User id assigned by the identity provider.
    sub: Uuid,
    email: Option<String>,
    #[allow(dead_code)]
    exp: usize,
}

/// The authenticated caller, extracted per request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        decode_token(token, &state.config.jwt_secret)
    }
}

/// Verifies an HS256 session token and returns the caller it identifies.
pub fn decode_token(token: &str, secret: &str) -> Result<AuthUser, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| AppError::Unauthorized)?;

    Ok(AuthUser {
        user_id: data.claims.sub,
        email: data.claims.email,
    })
}
