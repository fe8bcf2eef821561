use super::*;

/// Tests inserting an order with a catalog line and an ad-hoc line.
///
/// Verifies that one order row and one line row per resolved line are written, with
/// the catalog line keeping its meal reference and the ad-hoc line none.
///
/// Expected: Ok(order with 2 lines)
#[tokio::test]
async fn inserts_order_and_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let meal = factory::create_meal(db).await?;
    let params = params();
    let lines = vec![
        OrderLine::Catalog {
            meal_id: meal.id,
            name: meal.name.clone(),
            unit_price: Decimal::new(1250, 2),
            quantity: 3,
        },
        OrderLine::AdHoc {
            name: "Espresso".to_string(),
            unit_price: Decimal::new(350, 2),
            quantity: 1,
        },
    ];

    let repo = MealOrderRepository::new(db);
    let order = repo
        .insert_with_items(NewOrder {
            params: &params,
            total_amount: Decimal::new(4100, 2),
            lines: &lines,
        })
        .await?;

    assert_eq!(order.status, OrderStatus::Pending.as_str());
    assert_eq!(order.order_type, "room_service");
    assert_eq!(order.total_amount, 41.0);

    let (_, items) = repo.find_with_items(order.id).await?.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].meal_id, Some(meal.id));
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[0].price, 12.5);
    assert_eq!(items[1].meal_id, None);
    assert_eq!(items[1].item_name, "Espresso");

    Ok(())
}

/// Tests that a failing line insert leaves no order behind inside a rolled back transaction.
///
/// Verifies that a line referencing a meal that does not exist fails the insert and
/// rolling back removes the already inserted order row.
///
/// Expected: Err(DbErr) and 0 orders stored
#[tokio::test]
async fn failed_line_leaves_no_order_after_rollback() -> Result<(), DbErr> {
    use sea_orm::TransactionTrait;

    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared("PRAGMA foreign_keys = ON").await?;

    let params = params();
    let lines = vec![OrderLine::Catalog {
        meal_id: 999,
        name: "Ghost".to_string(),
        unit_price: Decimal::new(1000, 2),
        quantity: 1,
    }];

    let txn = db.begin().await?;
    let result = MealOrderRepository::new(&txn)
        .insert_with_items(NewOrder {
            params: &params,
            total_amount: Decimal::new(1000, 2),
            lines: &lines,
        })
        .await;
    assert!(result.is_err());
    txn.rollback().await?;

    let orders = entity::prelude::MealOrder::find().count(db).await?;
    let items = entity::prelude::OrderItem::find().count(db).await?;
    assert_eq!(orders, 0);
    assert_eq!(items, 0);

    Ok(())
}

/// Tests reading an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MealOrderRepository::new(db).find_with_items(42).await?;

    assert!(result.is_none());

    Ok(())
}
