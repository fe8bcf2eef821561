use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        error::AppError, middleware::auth::AdminGuard, service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get operational counts for the front desk.
///
/// # Access Control
/// - Bearer token matching the configured admin token
///
/// # Returns
/// - `200 OK` - Room, booking, order and appointment counts
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Wrong token, or admin access not configured
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Successfully retrieved dashboard counts", body = DashboardDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AdminToken" = [])),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(state.admin_token.as_deref(), &headers).require()?;

    let service = DashboardService::new(&state.db);

    let counts = service.counts().await?;

    Ok((StatusCode::OK, Json(counts.into_dto())))
}
