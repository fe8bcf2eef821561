use crate::server::{
    data::meal_order::{MealOrderRepository, SEARCH_LIMIT},
    model::order::{CreateOrderParams, NewOrder, OrderFilter, OrderLine, OrderStatus, OrderType},
};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, meal_order::MealOrderFactory},
};

mod insert_with_items;
mod search;

fn params() -> CreateOrderParams {
    CreateOrderParams {
        booking_id: None,
        customer_name: "Jane Doe".to_string(),
        room_number: "101".to_string(),
        order_type: OrderType::RoomService,
        special_instructions: Some("No onions".to_string()),
        lines: Vec::new(),
    }
}
