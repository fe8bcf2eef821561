use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        spa::{AppointmentConfirmationDto, CreateAppointmentDto},
    },
    server::{
        controller::{extract::JsonBody, run_detached},
        error::AppError,
        service::spa::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping spa endpoints in OpenAPI documentation
pub static SPA_TAG: &str = "spa";

/// Schedule a spa appointment.
///
/// A slot is one service at one date and time. Only one scheduled appointment may
/// hold a slot; cancelled appointments release it.
///
/// # Returns
/// - `201 Created` - Appointment scheduled
/// - `400 Bad Request` - Missing fields, service unavailable, or slot taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/spa/appointments",
    tag = SPA_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Successfully scheduled appointment", body = AppointmentConfirmationDto),
        (status = 400, description = "Invalid data, service unavailable or slot taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let appointment_id = run_detached(async move {
        let service = AppointmentService::new(&state.db);
        service.create(payload).await
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(AppointmentConfirmationDto { appointment_id }),
    ))
}
