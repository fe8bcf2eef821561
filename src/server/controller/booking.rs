use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingConfirmationDto, BookingDto, BookingSearchQuery, CreateBookingDto},
    },
    server::{
        controller::{extract::JsonBody, run_detached},
        error::AppError,
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Create a booking.
///
/// Validates the request, then locks the room and re-checks duplicates and
/// availability inside one transaction before writing. The stay is priced from the
/// room rate, or from a supplied quote, less any discount.
///
/// # Arguments
/// - `state` - Application state containing the database connection and discount policy
/// - `payload` - Guest details, stay dates and payment choice
///
/// # Returns
/// - `201 Created` - Booking confirmed with its reference and total
/// - `400 Bad Request` - Validation failed or the room is taken for those dates
/// - `404 Not Found` - Room does not exist or is under maintenance
/// - `409 Conflict` - The same guest already holds this stay
/// - `500 Internal Server Error` - Database error; nothing was written
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingConfirmationDto),
        (status = 400, description = "Invalid booking data or dates unavailable", body = ErrorDto),
        (status = 404, description = "Room not found or unavailable", body = ErrorDto),
        (status = 409, description = "Duplicate booking for this guest and stay", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let confirmation = run_detached(async move {
        let service = BookingService::new(&state.db, state.discount_policy.as_ref());
        service.create(payload).await
    })
    .await?;

    Ok((StatusCode::CREATED, Json(confirmation.into_dto())))
}

/// Get a booking with its room.
///
/// # Returns
/// - `200 OK` - The booking
/// - `404 Not Found` - No booking with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = BookingDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, state.discount_policy.as_ref());

    let booking = service
        .get_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Search bookings.
///
/// Filters combine; results are newest first and capped at 100.
///
/// # Returns
/// - `200 OK` - Matching bookings
/// - `400 Bad Request` - Unknown status filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(BookingSearchQuery),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = Vec<BookingDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, state.discount_policy.as_ref());

    let bookings = service.search(query).await?;

    Ok((
        StatusCode::OK,
        Json(
            bookings
                .into_iter()
                .map(|booking| booking.into_dto())
                .collect::<Vec<BookingDto>>(),
        ),
    ))
}

/// List reservations whose stay covers today.
///
/// # Returns
/// - `200 OK` - Active bookings, latest check-in first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/active",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Successfully retrieved active bookings", body = Vec<BookingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_bookings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, state.discount_policy.as_ref());

    let bookings = service.get_active().await?;

    Ok((
        StatusCode::OK,
        Json(
            bookings
                .into_iter()
                .map(|booking| booking.into_dto())
                .collect::<Vec<BookingDto>>(),
        ),
    ))
}
