//! Domain & parameter models for dining and bar orders
//!
//! Order lines are either catalog lines, priced from the meal catalog, or ad-hoc lines
//! for bar and café specials that carry the caller's name and price.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    model::order::{MealDto, OrderConfirmationDto, OrderDto, OrderItemDto, OrderSummaryDto},
    server::{error::internal::InternalError, util::money},
};

/// Display name stored for ad-hoc lines submitted without a name.
pub const CUSTOM_ITEM_NAME: &str = "Custom Item";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Restaurant,
    RoomService,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::RoomService => "room_service",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "restaurant" => Some(Self::Restaurant),
            "room_service" => Some(Self::RoomService),
            _ => None,
        }
    }
}

/// Order status. Orders are created pending; kitchen and bar move them on out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

/// A requested line before its price is resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineRequest {
    /// Catalog id when the reference parsed as one.
    pub catalog_id: Option<i32>,
    /// Raw reference as sent, used in error messages.
    pub reference: Option<String>,
    pub quantity: i32,
    pub caller_price: Option<Decimal>,
    pub name: Option<String>,
}

impl OrderLineRequest {
    /// Label identifying the line in error messages.
    pub fn label(&self) -> &str {
        self.reference
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("unknown")
    }
}

/// Validated parameters for creating an order
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub booking_id: Option<i32>,
    pub customer_name: String,
    pub room_number: String,
    pub order_type: OrderType,
    pub special_instructions: Option<String>,
    pub lines: Vec<OrderLineRequest>,
}

/// An order line with its price resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderLine {
    /// Priced from the catalog; the caller's price is ignored.
    Catalog {
        meal_id: i32,
        name: String,
        unit_price: Decimal,
        quantity: i32,
    },
    /// Not in the catalog; priced by the caller.
    AdHoc {
        name: String,
        unit_price: Decimal,
        quantity: i32,
    },
}

impl OrderLine {
    pub fn meal_id(&self) -> Option<i32> {
        match self {
            Self::Catalog { meal_id, .. } => Some(*meal_id),
            Self::AdHoc { .. } => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Catalog { name, .. } | Self::AdHoc { name, .. } => name,
        }
    }

    pub fn unit_price(&self) -> Decimal {
        match self {
            Self::Catalog { unit_price, .. } | Self::AdHoc { unit_price, .. } => *unit_price,
        }
    }

    pub fn quantity(&self) -> i32 {
        match self {
            Self::Catalog { quantity, .. } | Self::AdHoc { quantity, .. } => *quantity,
        }
    }

    /// `unit_price x quantity`, or `None` when the product does not fit a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price().checked_mul(Decimal::from(self.quantity()))
    }
}

/// Validated order search filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub status: Option<String>,
    /// Substring of the customer name
    pub customer_name: Option<String>,
    pub order_type: Option<OrderType>,
}

/// Order row to insert together with its resolved lines.
#[derive(Debug, Clone)]
pub struct NewOrder<'a> {
    pub params: &'a CreateOrderParams,
    pub total_amount: Decimal,
    pub lines: &'a [OrderLine],
}

/// Outcome of a committed order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order_id: i32,
    pub total_amount: Decimal,
    pub items_count: usize,
    pub order_type: OrderType,
    pub status: OrderStatus,
}

impl OrderConfirmation {
    pub fn into_dto(self) -> OrderConfirmationDto {
        OrderConfirmationDto {
            order_id: self.order_id,
            total_amount: self.total_amount,
            items_count: self.items_count,
            order_type: self.order_type.as_str().to_string(),
            status: self.status.as_str().to_string(),
        }
    }
}

/// A stored order line
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: i32,
    pub meal_id: Option<i32>,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Result<Self, InternalError> {
        let name = if entity.item_name.trim().is_empty() {
            CUSTOM_ITEM_NAME.to_string()
        } else {
            entity.item_name
        };

        Ok(Self {
            id: entity.id,
            meal_id: entity.meal_id,
            name,
            quantity: entity.quantity,
            price: money::to_decimal(entity.price)?,
        })
    }
}

/// The order domain model with its lines
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i32,
    pub booking_id: Option<i32>,
    pub customer_name: String,
    pub room_number: String,
    pub order_type: String,
    pub total_amount: Decimal,
    pub special_instructions: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Converts an order entity and its line entities to the order domain model
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order with lines in insertion order
    /// - `Err(InternalError::InvalidAmount)` - A stored amount is not a finite number
    pub fn from_entities(
        order: entity::meal_order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, InternalError> {
        let items = items
            .into_iter()
            .map(OrderItem::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            total_amount: money::to_decimal(order.total_amount)?,
            id: order.id,
            booking_id: order.booking_id,
            customer_name: order.customer_name,
            room_number: order.room_number,
            order_type: order.order_type,
            special_instructions: order.special_instructions,
            status: order.status,
            created_at: order.created_at,
            items,
        })
    }

    /// Condenses the lines into `{quantity}x {name} (${price})` entries joined by `, `.
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}x {} (${:.2})", item.quantity, item.name, item.price))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn into_summary_dto(self) -> OrderSummaryDto {
        OrderSummaryDto {
            items_summary: self.items_summary(),
            id: self.id,
            booking_id: self.booking_id,
            customer_name: self.customer_name,
            room_number: self.room_number,
            order_type: self.order_type,
            total_amount: self.total_amount,
            special_instructions: self.special_instructions,
            status: self.status,
            created_at: self.created_at,
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            booking_id: self.booking_id,
            customer_name: self.customer_name,
            room_number: self.room_number,
            order_type: self.order_type,
            total_amount: self.total_amount,
            special_instructions: self.special_instructions,
            status: self.status,
            created_at: self.created_at,
            items: self
                .items
                .into_iter()
                .map(|item| OrderItemDto {
                    id: item.id,
                    meal_id: item.meal_id,
                    meal_name: item.name,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
        }
    }
}

/// The meal catalog domain model
#[derive(Debug, Clone)]
pub struct Meal {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
    pub is_available: bool,
}

impl Meal {
    pub fn from_entity(entity: entity::meal::Model) -> Result<Self, InternalError> {
        Ok(Self {
            price: money::to_decimal(entity.price)?,
            id: entity.id,
            name: entity.name,
            description: entity.description,
            category: entity.category,
            is_available: entity.is_available,
        })
    }

    pub fn into_dto(self) -> MealDto {
        MealDto {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            price: self.price,
            is_available: self.is_available,
        }
    }
}
