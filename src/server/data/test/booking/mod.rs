use crate::server::{
    data::booking::BookingRepository,
    model::booking::{
        BookingFilter, BookingStatus, CreateBookingParams, NewBooking, PaymentMethod, StayDates,
    },
};
use rust_decimal::Decimal;
use sea_orm::{DbErr, SqlErr};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::date},
};

mod count_overlapping;
mod has_duplicate;
mod insert;
mod search;

fn stay(check_in: &str, check_out: &str) -> StayDates {
    StayDates::new(date(check_in), date(check_out)).unwrap()
}

fn params(room_id: i32, stay: StayDates) -> CreateBookingParams {
    CreateBookingParams {
        room_id,
        customer_name: "Jane Doe".to_string(),
        customer_email: "jane@example.com".to_string(),
        customer_phone: "+254 712 345 678".to_string(),
        id_number: "A1234567".to_string(),
        stay,
        guests: 2,
        payment_method: PaymentMethod::Card,
        discount_code: Some("SUMMER".to_string()),
        quoted_total: None,
    }
}
