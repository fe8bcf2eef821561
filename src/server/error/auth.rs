use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no bearer token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Admin request without bearer token")]
    MissingToken,

    /// Bearer token does not grant admin access.
    ///
    /// Also returned when no admin token is configured, so that admin endpoints stay
    /// closed by default. Results in a 403 Forbidden response.
    #[error("Admin request with invalid bearer token")]
    InvalidToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants are logged at debug level while the client-facing messages stay
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For `MissingToken`
/// - 403 Forbidden - For `InvalidToken`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Authentication required")),
            )
                .into_response(),
            Self::InvalidToken => {
                (StatusCode::FORBIDDEN, Json(ErrorDto::new("Access denied"))).into_response()
            }
        }
    }
}
