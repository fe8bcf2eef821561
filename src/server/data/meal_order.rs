//! Order data repository for database operations.
//!
//! Orders are written together with their lines and read back with the lines in
//! insertion order.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::order::{NewOrder, OrderFilter, OrderStatus},
    util::money,
};

/// Maximum number of orders returned by a search.
pub const SEARCH_LIMIT: u64 = 100;

/// An order row with its line rows.
pub type OrderRow = (entity::meal_order::Model, Vec<entity::order_item::Model>);

pub struct MealOrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MealOrderRepository<'a, C> {
    /// Creates a new MealOrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `MealOrderRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending order followed by one row per line.
    ///
    /// Must run inside a transaction for the order and its lines to commit together.
    ///
    /// # Arguments
    /// - `order` - Validated order parameters with the resolved lines and total
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted order row
    /// - `Err(DbErr)` - Database error on the order or any line insert
    pub async fn insert_with_items(
        &self,
        order: NewOrder<'_>,
    ) -> Result<entity::meal_order::Model, DbErr> {
        let params = order.params;

        let inserted = entity::meal_order::ActiveModel {
            booking_id: ActiveValue::Set(params.booking_id),
            customer_name: ActiveValue::Set(params.customer_name.clone()),
            room_number: ActiveValue::Set(params.room_number.clone()),
            order_type: ActiveValue::Set(params.order_type.as_str().to_string()),
            total_amount: ActiveValue::Set(money::to_f64(order.total_amount)),
            special_instructions: ActiveValue::Set(params.special_instructions.clone()),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for line in order.lines {
            entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(inserted.id),
                meal_id: ActiveValue::Set(line.meal_id()),
                item_name: ActiveValue::Set(line.name().to_string()),
                quantity: ActiveValue::Set(line.quantity()),
                price: ActiveValue::Set(money::to_f64(line.unit_price())),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(inserted)
    }

    /// Gets an order by ID together with its lines.
    pub async fn find_with_items(&self, order_id: i32) -> Result<Option<OrderRow>, DbErr> {
        let Some(order) = entity::prelude::MealOrder::find_by_id(order_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order.id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((order, items)))
    }

    /// Searches orders, newest first, capped at `SEARCH_LIMIT` rows.
    ///
    /// The customer name matches anywhere in the stored name. Lines of every returned
    /// order are loaded with one further query.
    pub async fn search(&self, filter: &OrderFilter) -> Result<Vec<OrderRow>, DbErr> {
        let mut query = entity::prelude::MealOrder::find();

        if let Some(status) = &filter.status {
            query = query.filter(entity::meal_order::Column::Status.eq(status.as_str()));
        }
        if let Some(name) = &filter.customer_name {
            query = query.filter(entity::meal_order::Column::CustomerName.contains(name.as_str()));
        }
        if let Some(order_type) = filter.order_type {
            query = query.filter(entity::meal_order::Column::OrderType.eq(order_type.as_str()));
        }

        let orders = query
            .order_by_desc(entity::meal_order::Column::CreatedAt)
            .order_by_desc(entity::meal_order::Column::Id)
            .limit(SEARCH_LIMIT)
            .all(self.db)
            .await?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let mut items: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(orders.iter().map(|order| order.id)))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?
        {
            items.entry(item.order_id).or_default().push(item);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let lines = items.remove(&order.id).unwrap_or_default();
                (order, lines)
            })
            .collect())
    }

    /// Counts orders with the given status.
    pub async fn count_by_status(&self, status: OrderStatus) -> Result<u64, DbErr> {
        entity::prelude::MealOrder::find()
            .filter(entity::meal_order::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
