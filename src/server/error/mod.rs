//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;
pub mod reservation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError,
        reservation::ReservationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` and
/// `ReservationError` handle their own response mapping, while generic variants provide
/// standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Admin capability check failed.
    ///
    /// Delegates to `AuthError::into_response()` (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Reservation conflict or missing bookable resource.
    ///
    /// Delegates to `ReservationError::into_response()` (400, 404 or 409).
    #[error(transparent)]
    ReservationErr(#[from] ReservationError),

    /// Unexpected internal state, such as an unknown status value in the store.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Request body could not be read as the expected JSON shape.
    ///
    /// Malformed or mistyped bodies are reported like validation failures; a missing
    /// content type or an unreadable body keeps axum's own status.
    #[error(transparent)]
    JsonErr(#[from] JsonRejection),

    /// Listener or socket failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// One or more request fields failed validation.
    ///
    /// Results in 400 Bad Request listing every violated rule.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Auth and reservation errors delegate to their own response handling, while other
/// errors use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `BadRequest` and malformed JSON bodies
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, etc.)
/// - Variable - For `AuthErr` and `ReservationErr`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ReservationErr(err) => err.into_response(),
            Self::JsonErr(rejection) => match rejection {
                JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                    Self::Validation(vec![rejection.body_text()]).into_response()
                }
                other => (other.status(), Json(ErrorDto::new(other.body_text()))).into_response(),
            },
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Validation failed".to_string(),
                    errors,
                }),
            )
                .into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that validation failures report every message with a 400.
    ///
    /// Expected: 400 Bad Request
    #[test]
    fn validation_maps_to_bad_request() {
        let response = AppError::Validation(vec![
            "Valid email address is required".to_string(),
            "Valid phone number is required".to_string(),
        ])
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Tests that database failures are hidden behind a generic 500.
    ///
    /// Expected: 500 Internal Server Error
    #[test]
    fn database_error_maps_to_internal_server_error() {
        let response =
            AppError::DbErr(sea_orm::DbErr::Custom("disk I/O error".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// Tests that duplicate stays are reported as conflicts.
    ///
    /// Expected: 409 Conflict
    #[test]
    fn duplicate_stay_maps_to_conflict() {
        let response = AppError::from(ReservationError::DuplicateStay).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    /// Tests that a missing or maintenance room is reported as not found.
    ///
    /// Expected: 404 Not Found
    #[test]
    fn room_not_found_maps_to_not_found() {
        let response = AppError::from(ReservationError::RoomNotFound(5)).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
