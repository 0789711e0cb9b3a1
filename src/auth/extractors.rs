use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use super::claims::TokenKind;
use super::jwt::JwtKeys;
use super::repo::User;
use crate::error::ApiError;
use crate::state::AppState;

/// Extracts and validates the access JWT, returning the caller's user ID.
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or(ApiError::Unauthorized)?;

        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::Unauthorized
        })?;

        if claims.kind != TokenKind::Access {
            return Err(ApiError::Unauthorized);
        }

        Ok(AuthUser(claims.sub))
    }
}

/// Resolves the caller to a full user record. Every operation goes through
/// this (directly or via [`Staff`]) before any data is read or written.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user_id) = AuthUser::from_request_parts(parts, state).await?;
        let user = User::find_by_id(&state.db, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "token subject has no user record");
                ApiError::Unauthorized
            })?;
        Ok(CurrentUser(user))
    }
}

/// [`CurrentUser`] plus the role gate: the caller must be staff or admin.
pub struct Staff(pub User);

#[async_trait]
impl FromRequestParts<AppState> for Staff {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if !user.role.is_staff() {
            warn!(user_id = %user.id, role = ?user.role, "staff-only operation denied");
            return Err(ApiError::Unauthorized);
        }
        Ok(Staff(user))
    }
}
