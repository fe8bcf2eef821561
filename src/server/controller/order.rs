use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{
            CreateOrderDto, OrderConfirmationDto, OrderDto, OrderSearchQuery, OrderSummaryDto,
        },
    },
    server::{
        controller::{extract::JsonBody, run_detached},
        error::AppError,
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place a restaurant or room service order.
///
/// Catalog items are priced from the menu; items outside the catalog must carry
/// their own positive price. The order and all of its lines are written together or
/// not at all.
///
/// # Returns
/// - `201 Created` - Order placed with status `pending`
/// - `400 Bad Request` - Validation failed, listing every problem
/// - `500 Internal Server Error` - Database error; nothing was written
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully placed order", body = OrderConfirmationDto),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let confirmation = run_detached(async move {
        let service = OrderService::new(&state.db);
        service.create(payload).await
    })
    .await?;

    Ok((StatusCode::CREATED, Json(confirmation.into_dto())))
}

/// Get an order with its lines.
///
/// # Returns
/// - `200 OK` - The order
/// - `404 Not Found` - No order with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved order", body = OrderDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let order = service
        .get_by_id(order_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Search orders.
///
/// Filters combine; the customer name matches anywhere in the stored name. Results
/// are newest first, capped at 100, and summarise their lines in one string.
///
/// # Returns
/// - `200 OK` - Matching orders
/// - `400 Bad Request` - Unknown order type filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(OrderSearchQuery),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = Vec<OrderSummaryDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let orders = service.search(query).await?;

    Ok((
        StatusCode::OK,
        Json(
            orders
                .into_iter()
                .map(|order| order.into_summary_dto())
                .collect::<Vec<OrderSummaryDto>>(),
        ),
    ))
}
