use super::*;

/// Tests that rooms with overlapping active reservations are excluded.
///
/// Verifies that a room booked over part of the requested stay is left out while a
/// free room of the same type is returned.
///
/// Expected: Ok(vec![free room])
#[tokio::test]
async fn excludes_rooms_with_overlapping_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booked = factory::create_room(db).await?;
    let free = factory::create_room(db).await?;
    factory::create_booking(db, booked.id, date("2024-07-10"), date("2024-07-12")).await?;

    let repo = RoomRepository::new(db);
    let rooms = repo
        .find_available(&stay("2024-07-11", "2024-07-13"), None)
        .await?;

    let ids: Vec<i32> = rooms.iter().map(|room| room.id).collect();
    assert_eq!(ids, vec![free.id]);

    Ok(())
}

/// Tests that same-day turnover leaves a room available.
///
/// Verifies that a reservation checking out on the requested check-in day does not
/// block the room.
///
/// Expected: Ok(vec![room])
#[tokio::test]
async fn includes_room_on_checkout_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    factory::create_booking(db, room.id, date("2024-07-10"), date("2024-07-12")).await?;

    let repo = RoomRepository::new(db);
    let rooms = repo
        .find_available(&stay("2024-07-12", "2024-07-14"), None)
        .await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, room.id);

    Ok(())
}

/// Tests that cancelled and checked-out reservations do not hold a room.
///
/// Expected: Ok(vec![room])
#[tokio::test]
async fn ignores_inactive_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    BookingFactory::new(db, room.id, date("2024-07-10"), date("2024-07-12"))
        .status("cancelled")
        .build()
        .await?;
    BookingFactory::new(db, room.id, date("2024-07-09"), date("2024-07-11"))
        .status("checked_out")
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let rooms = repo
        .find_available(&stay("2024-07-10", "2024-07-12"), None)
        .await?;

    assert_eq!(rooms.len(), 1);

    Ok(())
}

/// Tests status and type filtering with price ordering.
///
/// Verifies that rooms under maintenance or flagged occupied are excluded, the type
/// filter applies, and results are sorted by ascending price.
///
/// Expected: Ok(deluxe rooms cheapest first)
#[tokio::test]
async fn filters_by_type_and_orders_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expensive = RoomFactory::new(db)
        .room_type("deluxe")
        .price(220.0)
        .build()
        .await?;
    let cheap = RoomFactory::new(db)
        .room_type("deluxe")
        .price(180.0)
        .build()
        .await?;
    RoomFactory::new(db)
        .room_type("deluxe")
        .status("maintenance")
        .build()
        .await?;
    RoomFactory::new(db)
        .room_type("deluxe")
        .status("occupied")
        .build()
        .await?;
    RoomFactory::new(db).room_type("standard").build().await?;

    let repo = RoomRepository::new(db);
    let rooms = repo
        .find_available(&stay("2024-07-10", "2024-07-12"), Some("deluxe"))
        .await?;

    let ids: Vec<i32> = rooms.iter().map(|room| room.id).collect();
    assert_eq!(ids, vec![cheap.id, expensive.id]);

    Ok(())
}
