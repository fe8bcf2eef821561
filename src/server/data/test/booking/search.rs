use super::*;

/// Tests searching reservations by status and email.
///
/// Verifies that filters combine and each result carries its room.
///
/// Expected: Ok(vec![matching reservation])
#[tokio::test]
async fn filters_by_status_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let wanted = BookingFactory::new(db, room.id, date("2024-07-10"), date("2024-07-12"))
        .customer_email("jane@example.com")
        .build()
        .await?;
    BookingFactory::new(db, room.id, date("2024-08-10"), date("2024-08-12"))
        .customer_email("jane@example.com")
        .status("cancelled")
        .build()
        .await?;
    factory::create_booking(db, room.id, date("2024-09-10"), date("2024-09-12")).await?;

    let rows = BookingRepository::new(db)
        .search(&BookingFilter {
            status: Some(BookingStatus::Confirmed),
            customer_email: Some("jane@example.com".to_string()),
            booking_reference: None,
        })
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, wanted.id);
    assert_eq!(rows[0].1.id, room.id);

    Ok(())
}

/// Tests that an unfiltered search returns newest reservations first.
///
/// Expected: Ok(reservations in reverse creation order)
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let first = factory::create_booking(db, room.id, date("2024-07-10"), date("2024-07-12")).await?;
    let second =
        factory::create_booking(db, room.id, date("2024-08-10"), date("2024-08-12")).await?;

    let rows = BookingRepository::new(db)
        .search(&BookingFilter::default())
        .await?;

    let ids: Vec<i32> = rows.iter().map(|(booking, _)| booking.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests listing reservations in house on a given day.
///
/// Verifies that the check-out day itself no longer counts as in house.
///
/// Expected: Ok(vec![covering reservation])
#[tokio::test]
async fn finds_active_reservations_on_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let other = factory::create_room(db).await?;
    let in_house = BookingFactory::new(db, room.id, date("2024-07-10"), date("2024-07-12"))
        .status("checked_in")
        .build()
        .await?;
    factory::create_booking(db, other.id, date("2024-07-08"), date("2024-07-11")).await?;

    let repo = BookingRepository::new(db);
    let rows = repo.find_active_on(date("2024-07-11")).await?;

    let ids: Vec<i32> = rows.iter().map(|(booking, _)| booking.id).collect();
    assert_eq!(ids, vec![in_house.id]);
    assert_eq!(repo.occupied_room_ids(date("2024-07-11")).await?, vec![room.id]);

    Ok(())
}
