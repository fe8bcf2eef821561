use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::get_dashboard,
        booking::{create_booking, get_active_bookings, get_booking_by_id, search_bookings},
        catalog::{get_meals, get_spa_hours, get_spa_services},
        order::{create_order, get_order_by_id, search_orders},
        room::{get_available_rooms, get_rooms},
        spa::create_appointment,
    },
    doc::ApiDoc,
    state::AppState,
};

pub fn router(request_timeout: Duration) -> Router<AppState> {
    Router::new()
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/availability", get(get_available_rooms))
        .route("/api/meals", get(get_meals))
        .route("/api/spa/services", get(get_spa_services))
        .route("/api/spa/hours", get(get_spa_hours))
        .route("/api/bookings", post(create_booking).get(search_bookings))
        .route("/api/bookings/active", get(get_active_bookings))
        .route("/api/bookings/{booking_id}", get(get_booking_by_id))
        .route("/api/orders", post(create_order).get(search_orders))
        .route("/api/orders/{order_id}", get(get_order_by_id))
        .route("/api/spa/appointments", post(create_appointment))
        .route("/api/admin/dashboard", get(get_dashboard))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
