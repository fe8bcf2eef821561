use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        order::MealDto,
        spa::{SpaHoursDto, SpaServiceDto},
    },
    server::{error::AppError, service::catalog::CatalogService, state::AppState},
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

#[derive(Deserialize, IntoParams)]
pub struct MealQuery {
    /// Meal category; `all` or absent lists every category.
    pub category: Option<String>,
}

/// List meals that can be ordered.
///
/// # Returns
/// - `200 OK` - Available meals ordered by category then price
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/meals",
    tag = CATALOG_TAG,
    params(MealQuery),
    responses(
        (status = 200, description = "Successfully retrieved meals", body = Vec<MealDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meals(
    State(state): State<AppState>,
    Query(query): Query<MealQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);

    let meals = service.list_meals(query.category).await?;

    Ok((
        StatusCode::OK,
        Json(
            meals
                .into_iter()
                .map(|meal| meal.into_dto())
                .collect::<Vec<MealDto>>(),
        ),
    ))
}

/// List spa services that can be booked.
///
/// # Returns
/// - `200 OK` - Available services ordered by category then price
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/spa/services",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved spa services", body = Vec<SpaServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_spa_services(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);

    let services = service.list_spa_services().await?;

    Ok((
        StatusCode::OK,
        Json(
            services
                .into_iter()
                .map(|service| service.into_dto())
                .collect::<Vec<SpaServiceDto>>(),
        ),
    ))
}

/// List the spa's weekly opening hours.
///
/// # Returns
/// - `200 OK` - One entry per configured day, Monday first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/spa/hours",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved spa hours", body = Vec<SpaHoursDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_spa_hours(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);

    let hours = service.list_spa_hours().await?;

    Ok((
        StatusCode::OK,
        Json(
            hours
                .into_iter()
                .map(|day| day.into_dto())
                .collect::<Vec<SpaHoursDto>>(),
        ),
    ))
}
