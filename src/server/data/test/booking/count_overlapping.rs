use super::*;

/// Tests counting reservations for every overlapping placement.
///
/// Verifies that left overlap, right overlap, containment and being contained all
/// count against an existing 10th-12th stay.
///
/// Expected: Ok(1) for each placement
#[tokio::test]
async fn counts_every_overlapping_placement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    factory::create_booking(db, room.id, date("2024-07-10"), date("2024-07-12")).await?;

    let repo = BookingRepository::new(db);

    for (check_in, check_out) in [
        ("2024-07-09", "2024-07-11"),
        ("2024-07-11", "2024-07-13"),
        ("2024-07-10", "2024-07-12"),
        ("2024-07-08", "2024-07-15"),
        ("2024-07-10", "2024-07-11"),
    ] {
        let count = repo
            .count_overlapping(room.id, &stay(check_in, check_out))
            .await?;
        assert_eq!(count, 1, "{check_in} to {check_out} should overlap");
    }

    Ok(())
}

/// Tests that disjoint and back-to-back stays do not count.
///
/// Expected: Ok(0) for each placement
#[tokio::test]
async fn ignores_disjoint_and_adjacent_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    factory::create_booking(db, room.id, date("2024-07-10"), date("2024-07-12")).await?;

    let repo = BookingRepository::new(db);

    for (check_in, check_out) in [
        ("2024-07-01", "2024-07-05"),
        ("2024-07-08", "2024-07-10"),
        ("2024-07-12", "2024-07-14"),
        ("2024-07-20", "2024-07-22"),
    ] {
        let count = repo
            .count_overlapping(room.id, &stay(check_in, check_out))
            .await?;
        assert_eq!(count, 0, "{check_in} to {check_out} should not overlap");
    }

    Ok(())
}

/// Tests that only the requested room and active statuses are considered.
///
/// Expected: Ok(0)
#[tokio::test]
async fn ignores_other_rooms_and_inactive_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let other = factory::create_room(db).await?;
    factory::create_booking(db, other.id, date("2024-07-10"), date("2024-07-12")).await?;
    BookingFactory::new(db, room.id, date("2024-07-10"), date("2024-07-12"))
        .status("cancelled")
        .build()
        .await?;

    let count = BookingRepository::new(db)
        .count_overlapping(room.id, &stay("2024-07-10", "2024-07-12"))
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
