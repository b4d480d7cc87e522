//! Authentication extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tourcraft_core::error::CoreError;
use tourcraft_core::types::DbId;

use crate::auth::jwt::decode_access_token;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated caller, taken from a `Bearer` access token.
///
/// Adding this extractor to a handler makes the route require
/// authentication; requests without a valid token are rejected with 401
/// before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Internal database id of the caller's account.
    pub user_id: DbId,
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing or malformed Authorization header".into(),
            ))
        })?;

        let claims = decode_access_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

/// Best-effort identity for routes that also serve anonymous traffic.
///
/// The public tour path works without credentials, but when a valid token
/// is present the viewer is attributed in the recorded view fact. A bad
/// or absent token never rejects the request here.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await.ok();
        Ok(OptionalAuthUser(user))
    }
}
