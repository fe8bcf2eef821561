use chrono::{Duration, Utc};

use super::*;

/// Tests searching orders by status, customer name and type.
///
/// Verifies that filters combine, that the name matches anywhere in the stored name,
/// and that each result carries its lines in insertion order.
///
/// Expected: Ok(vec![matching order with its two lines])
#[tokio::test]
async fn filters_by_status_name_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = MealOrderFactory::new(db)
        .customer_name("Jane Doe")
        .order_type("room_service")
        .item("Pilau", 2, 8.0)
        .item("Chai", 1, 2.5)
        .build()
        .await?;
    MealOrderFactory::new(db)
        .customer_name("Jane Doe")
        .order_type("restaurant")
        .build()
        .await?;
    MealOrderFactory::new(db)
        .customer_name("Jane Doe")
        .order_type("room_service")
        .status("delivered")
        .build()
        .await?;
    factory::create_meal_order(db).await?;

    let rows = MealOrderRepository::new(db)
        .search(&OrderFilter {
            status: Some("pending".to_string()),
            customer_name: Some("ane D".to_string()),
            order_type: Some(OrderType::RoomService),
        })
        .await?;

    assert_eq!(rows.len(), 1);
    let (order, items) = &rows[0];
    assert_eq!(order.id, wanted.id);
    assert_eq!(
        items.iter().map(|item| item.item_name.as_str()).collect::<Vec<_>>(),
        vec!["Pilau", "Chai"]
    );

    Ok(())
}

/// Tests that an unfiltered search returns newest orders first.
///
/// Expected: Ok(orders in reverse creation order, an order without lines included)
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = MealOrderFactory::new(db)
        .created_at(Utc::now() - Duration::hours(2))
        .item("Espresso", 1, 3.5)
        .build()
        .await?;
    let newer = MealOrderFactory::new(db).build().await?;

    let rows = MealOrderRepository::new(db)
        .search(&OrderFilter::default())
        .await?;

    let ids: Vec<i32> = rows.iter().map(|(order, _)| order.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(rows[0].1.is_empty());
    assert_eq!(rows[1].1.len(), 1);

    Ok(())
}

/// Tests that a search stops at the result cap.
///
/// Expected: Ok(`SEARCH_LIMIT` orders)
#[tokio::test]
async fn caps_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..SEARCH_LIMIT + 5 {
        MealOrderFactory::new(db).build().await?;
    }

    let rows = MealOrderRepository::new(db)
        .search(&OrderFilter::default())
        .await?;

    assert_eq!(rows.len() as u64, SEARCH_LIMIT);

    Ok(())
}
