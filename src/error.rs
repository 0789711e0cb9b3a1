use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every operation either succeeds or fails with one of these; none are retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Vehicle with this license plate already registered")]
    DuplicatePlate,

    #[error("Vehicle not registered in system")]
    VehicleNotRegistered,

    #[error("Vehicle is blocked from parking")]
    VehicleBlocked,

    #[error("Vehicle already has an active parking session")]
    SessionAlreadyActive,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::DuplicateEmail => StatusCode::CONFLICT,
            ApiError::DuplicatePlate => StatusCode::CONFLICT,
            ApiError::VehicleNotRegistered => StatusCode::NOT_FOUND,
            ApiError::VehicleBlocked => StatusCode::FORBIDDEN,
            ApiError::SessionAlreadyActive => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::DuplicatePlate.status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::VehicleNotRegistered.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::VehicleBlocked.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::SessionAlreadyActive.status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::NotFound("session").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::BadRequest("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ApiError::DuplicatePlate.to_string(),
            "Vehicle with this license plate already registered"
        );
        assert_eq!(
            ApiError::SessionAlreadyActive.to_string(),
            "Vehicle already has an active parking session"
        );
        assert_eq!(ApiError::NotFound("session").to_string(), "session not found");
    }
}
