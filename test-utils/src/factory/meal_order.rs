use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating orders together with their lines.
///
/// # Example
///
/// ```rust,ignore
/// let order = MealOrderFactory::new(&db)
///     .customer_name("Jane Doe")
///     .item("Espresso", 2, 3.5)
///     .build()
///     .await?;
/// ```
pub struct MealOrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_name: String,
    room_number: String,
    order_type: String,
    status: String,
    created_at: DateTime<Utc>,
    items: Vec<(String, i32, f64)>,
}

impl<'a> MealOrderFactory<'a> {
    /// Creates a new MealOrderFactory with default values.
    ///
    /// Defaults:
    /// - customer_name: `"Guest {id}"`
    /// - room_number: `"101"`
    /// - order_type: `"restaurant"`
    /// - status: `"pending"`
    /// - created_at: now
    /// - no lines; the total is the sum of the lines added with `item()`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            customer_name: format!("Guest {}", id),
            room_number: "101".to_string(),
            order_type: "restaurant".to_string(),
            status: "pending".to_string(),
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    pub fn customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = customer_name.into();
        self
    }

    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    pub fn order_type(mut self, order_type: impl Into<String>) -> Self {
        self.order_type = order_type.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Adds an ad-hoc line.
    pub fn item(mut self, name: impl Into<String>, quantity: i32, price: f64) -> Self {
        self.items.push((name.into(), quantity, price));
        self
    }

    pub async fn build(self) -> Result<entity::meal_order::Model, DbErr> {
        let total_amount = self
            .items
            .iter()
            .map(|(_, quantity, price)| *quantity as f64 * price)
            .sum();

        let order = entity::meal_order::ActiveModel {
            id: ActiveValue::NotSet,
            booking_id: ActiveValue::Set(None),
            customer_name: ActiveValue::Set(self.customer_name),
            room_number: ActiveValue::Set(self.room_number),
            order_type: ActiveValue::Set(self.order_type),
            total_amount: ActiveValue::Set(total_amount),
            special_instructions: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await?;

        for (name, quantity, price) in self.items {
            entity::order_item::ActiveModel {
                id: ActiveValue::NotSet,
                order_id: ActiveValue::Set(order.id),
                meal_id: ActiveValue::Set(None),
                item_name: ActiveValue::Set(name),
                quantity: ActiveValue::Set(quantity),
                price: ActiveValue::Set(price),
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates a pending restaurant order with a single line.
pub async fn create_meal_order(
    db: &DatabaseConnection,
) -> Result<entity::meal_order::Model, DbErr> {
    MealOrderFactory::new(db).item("Espresso", 1, 3.5).build().await
}
