use super::*;

/// Tests matching a duplicate stay by email.
///
/// Expected: Ok(true)
#[tokio::test]
async fn matches_same_email_and_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    BookingFactory::new(db, room.id, date("2024-07-10"), date("2024-07-12"))
        .customer_email("jane@example.com")
        .build()
        .await?;

    let duplicate = BookingRepository::new(db)
        .has_duplicate("jane@example.com", "OTHER-ID", &stay("2024-07-10", "2024-07-12"))
        .await?;

    assert!(duplicate);

    Ok(())
}

/// Tests matching a duplicate stay by identity document.
///
/// Expected: Ok(true)
#[tokio::test]
async fn matches_same_id_number_and_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    BookingFactory::new(db, room.id, date("2024-07-10"), date("2024-07-12"))
        .id_number("A1234567")
        .build()
        .await?;

    let duplicate = BookingRepository::new(db)
        .has_duplicate("someone@example.com", "A1234567", &stay("2024-07-10", "2024-07-12"))
        .await?;

    assert!(duplicate);

    Ok(())
}

/// Tests that the guard requires identical dates.
///
/// Verifies that an overlapping but different stay for the same guest is not a
/// duplicate; the guard only catches resubmission of the same stay.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_different_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    BookingFactory::new(db, room.id, date("2024-07-10"), date("2024-07-12"))
        .customer_email("jane@example.com")
        .build()
        .await?;

    let duplicate = BookingRepository::new(db)
        .has_duplicate("jane@example.com", "A1234567", &stay("2024-07-10", "2024-07-13"))
        .await?;

    assert!(!duplicate);

    Ok(())
}

/// Tests that cancelled reservations do not count as duplicates.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_cancelled_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    BookingFactory::new(db, room.id, date("2024-07-10"), date("2024-07-12"))
        .customer_email("jane@example.com")
        .status("cancelled")
        .build()
        .await?;

    let duplicate = BookingRepository::new(db)
        .has_duplicate("jane@example.com", "A1234567", &stay("2024-07-10", "2024-07-12"))
        .await?;

    assert!(!duplicate);

    Ok(())
}
