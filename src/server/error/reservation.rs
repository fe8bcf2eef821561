use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Conflicts and missing resources detected while reserving rooms or spa slots.
///
/// These are client-correctable: the client should retry with different parameters,
/// never verbatim.
#[derive(Error, Debug, PartialEq)]
pub enum ReservationError {
    /// The same guest already holds an active reservation for the identical stay.
    #[error("Duplicate booking for guest and stay dates")]
    DuplicateStay,

    /// Room does not exist or is under maintenance.
    #[error("Room {0} not found or under maintenance")]
    RoomNotFound(i32),

    /// An active reservation overlaps the requested stay.
    #[error("Room {0} is not available for the selected dates")]
    RoomUnavailable(i32),

    /// Spa service does not exist or is not offered.
    #[error("Spa service {0} not available")]
    ServiceUnavailable(i32),

    /// A scheduled appointment already occupies the service slot.
    #[error("Spa service {0} already booked for the selected slot")]
    SlotTaken(i32),
}

/// Converts reservation errors into HTTP responses.
///
/// # Returns
/// - 409 Conflict - For `DuplicateStay`
/// - 404 Not Found - For `RoomNotFound`
/// - 400 Bad Request - For `RoomUnavailable`, `ServiceUnavailable` and `SlotTaken`
impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::DuplicateStay => (
                StatusCode::CONFLICT,
                "Duplicate booking detected for this guest and stay dates. Please review existing reservations.",
            ),
            Self::RoomNotFound(_) => (StatusCode::NOT_FOUND, "Room not found or unavailable"),
            Self::RoomUnavailable(_) => (
                StatusCode::BAD_REQUEST,
                "Room is not available for the selected dates",
            ),
            Self::ServiceUnavailable(_) => (StatusCode::BAD_REQUEST, "Spa service not available"),
            Self::SlotTaken(_) => (StatusCode::BAD_REQUEST, "Time slot not available"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
