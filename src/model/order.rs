use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::null_as_default;

/// Reference to the item being ordered.
///
/// Catalog meals are referenced by numeric id; bar and café specials that are not in
/// the catalog arrive with a free-form label instead.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum MealRefDto {
    Id(i64),
    Label(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct OrderItemRequestDto {
    pub meal_id: Option<MealRefDto>,
    pub quantity: Option<i64>,
    /// Caller price, only used for items that are not in the catalog.
    pub price: Option<f64>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateOrderDto {
    pub booking_id: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    /// Room number or other delivery location label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItemRequestDto>,
    pub special_instructions: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderConfirmationDto {
    pub order_id: i32,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub items_count: usize,
    pub order_type: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    pub meal_id: Option<i32>,
    pub meal_name: String,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub booking_id: Option<i32>,
    pub customer_name: String,
    pub room_number: String,
    pub order_type: String,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub special_instructions: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemDto>,
}

/// Order as listed by a search, its lines condensed into one line of text.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderSummaryDto {
    pub id: i32,
    pub booking_id: Option<i32>,
    pub customer_name: String,
    pub room_number: String,
    pub order_type: String,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub special_instructions: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    /// Lines as `2x Espresso ($3.50)`, separated by `, `.
    pub items_summary: String,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct OrderSearchQuery {
    pub status: Option<String>,
    /// Matches anywhere in the customer name.
    pub customer_name: Option<String>,
    /// `restaurant` or `room_service`
    pub order_type: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MealDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub is_available: bool,
}
