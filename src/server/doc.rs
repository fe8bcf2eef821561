//! OpenAPI documentation for the REST API.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingConfirmationDto, BookingDto, CreateBookingDto},
        dashboard::DashboardDto,
        order::{
            CreateOrderDto, MealDto, MealRefDto, OrderConfirmationDto, OrderDto, OrderItemDto,
            OrderItemRequestDto, OrderSummaryDto,
        },
        room::{RoomDto, RoomOverviewDto},
        spa::{AppointmentConfirmationDto, CreateAppointmentDto, SpaHoursDto, SpaServiceDto},
    },
    server::controller::{admin, booking, catalog, order, room, spa},
};

/// Registers the bearer scheme used by admin endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "AdminToken",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Frontdesk API",
        description = "Room bookings, meal orders and spa appointments for a single hotel."
    ),
    paths(
        room::get_rooms,
        room::get_available_rooms,
        booking::create_booking,
        booking::get_booking_by_id,
        booking::search_bookings,
        booking::get_active_bookings,
        order::create_order,
        order::get_order_by_id,
        order::search_orders,
        spa::create_appointment,
        catalog::get_meals,
        catalog::get_spa_services,
        catalog::get_spa_hours,
        admin::get_dashboard,
    ),
    components(schemas(
        ErrorDto,
        RoomDto,
        RoomOverviewDto,
        CreateBookingDto,
        BookingConfirmationDto,
        BookingDto,
        CreateOrderDto,
        OrderItemRequestDto,
        MealRefDto,
        OrderConfirmationDto,
        OrderDto,
        OrderItemDto,
        OrderSummaryDto,
        MealDto,
        CreateAppointmentDto,
        AppointmentConfirmationDto,
        SpaServiceDto,
        SpaHoursDto,
        DashboardDto,
    )),
    tags(
        (name = "room", description = "Rooms and availability"),
        (name = "booking", description = "Room reservations"),
        (name = "order", description = "Restaurant and room service orders"),
        (name = "spa", description = "Spa appointments"),
        (name = "catalog", description = "Meal and spa service catalogs, spa opening hours"),
        (name = "admin", description = "Front desk administration")
    )
)]
pub struct ApiDoc;
