use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        room::{AvailabilityQuery, RoomDto, RoomOverviewDto},
    },
    server::{error::AppError, service::room::RoomService, state::AppState},
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// List every room with its current status.
///
/// Rooms are ordered by room number. A room reads as occupied while an active
/// reservation covers today, regardless of its stored status.
///
/// # Returns
/// - `200 OK` - All rooms
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved rooms", body = Vec<RoomOverviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = RoomService::new(&state.db);

    let rooms = service.overview().await?;

    Ok((
        StatusCode::OK,
        Json(
            rooms
                .into_iter()
                .map(|room| room.into_dto())
                .collect::<Vec<RoomOverviewDto>>(),
        ),
    ))
}

/// Search rooms free for a stay.
///
/// # Returns
/// - `200 OK` - Bookable rooms ordered by price
/// - `400 Bad Request` - Missing or inverted dates
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rooms/availability",
    tag = ROOM_TAG,
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Successfully retrieved available rooms", body = Vec<RoomDto>),
        (status = 400, description = "Missing or invalid dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_rooms(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = RoomService::new(&state.db);

    let rooms = service.availability(query).await?;

    Ok((
        StatusCode::OK,
        Json(
            rooms
                .into_iter()
                .map(|room| room.into_dto())
                .collect::<Vec<RoomDto>>(),
        ),
    ))
}
