//! Dining and bar order creation.
//!
//! Line prices are resolved inside the transaction: a catalog reference to an available
//! meal is priced from the catalog, anything else must carry its own positive price. The
//! order row and every line row are committed together or not at all.

use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::order::{CreateOrderDto, OrderSearchQuery},
    server::{
        data::{meal::MealRepository, meal_order::MealOrderRepository},
        error::AppError,
        model::order::{
            CreateOrderParams, NewOrder, Order, OrderConfirmation, OrderLine, OrderLineRequest,
            OrderStatus, CUSTOM_ITEM_NAME,
        },
        service::{pricing, validation},
        util::money,
    },
};

/// Resolves each requested line to a priced line.
///
/// A line is rejected when it has no positive unit price or when its total, or the
/// running order total, does not fit a `Decimal`.
///
/// # Returns
/// - `Ok(Vec<OrderLine>)` - One resolved line per request, in order
/// - `Err(AppError::Validation)` - Every line that ended up without a usable price
/// - `Err(AppError::DbErr)` - Catalog lookup failed
pub async fn resolve_lines<C: ConnectionTrait>(
    db: &C,
    requests: &[OrderLineRequest],
) -> Result<Vec<OrderLine>, AppError> {
    let meals = MealRepository::new(db);
    let mut lines = Vec::with_capacity(requests.len());
    let mut errors = Vec::new();
    let mut running_total = Decimal::ZERO;

    for request in requests {
        let meal = match request.catalog_id {
            Some(meal_id) => meals.find_available(meal_id).await?,
            None => None,
        };

        let line = match (meal, request.caller_price) {
            (Some(meal), _) => OrderLine::Catalog {
                meal_id: meal.id,
                unit_price: money::to_decimal(meal.price)?,
                name: meal.name,
                quantity: request.quantity,
            },
            (None, Some(unit_price)) => OrderLine::AdHoc {
                name: request
                    .name
                    .clone()
                    .unwrap_or_else(|| CUSTOM_ITEM_NAME.to_string()),
                unit_price,
                quantity: request.quantity,
            },
            (None, None) => {
                errors.push(format!("Invalid price for item {}", request.label()));
                continue;
            }
        };

        // Catalog meals priced at zero are not orderable.
        let total = if line.unit_price() > Decimal::ZERO {
            line.line_total().and_then(|amount| running_total.checked_add(amount))
        } else {
            None
        };

        match total {
            Some(total) => {
                running_total = total;
                lines.push(line);
            }
            None => errors.push(format!("Invalid price for item {}", line.name())),
        }
    }

    if errors.is_empty() {
        Ok(lines)
    } else {
        Err(AppError::Validation(errors))
    }
}

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending order with all of its lines.
    ///
    /// # Arguments
    /// - `dto` - The order request as submitted
    ///
    /// # Returns
    /// - `Ok(OrderConfirmation)` - Order and lines committed
    /// - `Err(AppError::Validation)` - Malformed request or a line without a usable price
    /// - `Err(AppError::DbErr)` - Store failure; nothing was written
    pub async fn create(&self, dto: CreateOrderDto) -> Result<OrderConfirmation, AppError> {
        let params = validation::validate_order(dto)?;

        let txn = self.db.begin().await?;

        match Self::persist_in(&txn, &params).await {
            Ok(confirmation) => {
                txn.commit().await?;

                tracing::info!(
                    "Order {} placed with {} items for {}",
                    confirmation.order_id,
                    confirmation.items_count,
                    params.room_number
                );

                Ok(confirmation)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back order: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    async fn persist_in(
        txn: &DatabaseTransaction,
        params: &CreateOrderParams,
    ) -> Result<OrderConfirmation, AppError> {
        let lines = resolve_lines(txn, &params.lines).await?;
        let total_amount = pricing::order_total(&lines).ok_or_else(|| {
            AppError::Validation(vec!["Order total is out of range".to_string()])
        })?;

        let order = MealOrderRepository::new(txn)
            .insert_with_items(NewOrder {
                params,
                total_amount,
                lines: &lines,
            })
            .await?;

        Ok(OrderConfirmation {
            order_id: order.id,
            total_amount,
            items_count: lines.len(),
            order_type: params.order_type,
            status: OrderStatus::Pending,
        })
    }

    /// Gets an order with its lines.
    pub async fn get_by_id(&self, order_id: i32) -> Result<Option<Order>, AppError> {
        let Some((order, items)) = MealOrderRepository::new(self.db)
            .find_with_items(order_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(Order::from_entities(order, items)?))
    }

    /// Searches orders, newest first, at most `SEARCH_LIMIT` of them.
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - Matching orders with their lines
    /// - `Err(AppError::BadRequest)` - Unknown order type
    /// - `Err(AppError::DbErr)` - Store failure
    pub async fn search(&self, query: OrderSearchQuery) -> Result<Vec<Order>, AppError> {
        let filter = validation::validate_order_filter(query)?;

        MealOrderRepository::new(self.db)
            .search(&filter)
            .await?
            .into_iter()
            .map(|(order, items)| Order::from_entities(order, items).map_err(AppError::from))
            .collect()
    }
}
