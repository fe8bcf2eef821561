use crate::server::{
    data::room::RoomRepository,
    model::{booking::StayDates, room::RoomStatus},
};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::date, room::RoomFactory},
};

mod find_available;
mod lock;

fn stay(check_in: &str, check_out: &str) -> StayDates {
    StayDates::new(date(check_in), date(check_out)).unwrap()
}
