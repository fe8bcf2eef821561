use super::*;

/// Tests locking an existing room inside a transaction.
///
/// Verifies that the lock reports the room as found and leaves the row unchanged.
///
/// Expected: Ok(true)
#[tokio::test]
async fn locks_existing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;

    let txn = db.begin().await?;
    let locked = RoomRepository::new(&txn).lock(room.id).await?;
    txn.commit().await?;

    assert!(locked);

    let after = RoomRepository::new(db).find_by_id(room.id).await?.unwrap();
    assert_eq!(after, room);

    Ok(())
}

/// Tests locking a room that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let locked = RoomRepository::new(db).lock(999).await?;

    assert!(!locked);

    Ok(())
}

/// Tests overwriting the cached room status.
///
/// Expected: Ok(1 occupied room)
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    factory::create_room(db).await?;

    let repo = RoomRepository::new(db);
    repo.set_status(room.id, RoomStatus::Occupied).await?;

    assert_eq!(repo.count_by_status(RoomStatus::Occupied).await?, 1);
    assert_eq!(repo.count_by_status(RoomStatus::Available).await?, 1);

    Ok(())
}
