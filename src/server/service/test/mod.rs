use crate::{
    model::{
        booking::CreateBookingDto,
        order::{CreateOrderDto, MealRefDto, OrderItemRequestDto},
        spa::CreateAppointmentDto,
    },
    server::{
        error::{reservation::ReservationError, AppError},
        service::pricing::FlatRateDiscount,
    },
};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::date},
};

mod spa;
