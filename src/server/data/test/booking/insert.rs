use super::*;

/// Tests inserting a reservation from validated parameters.
///
/// Verifies that the stored row carries the confirmed status, the rounded total and
/// the payment and discount note.
///
/// Expected: Ok(Model)
#[tokio::test]
async fn inserts_confirmed_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let params = params(room.id, stay("2024-07-10", "2024-07-12"));

    let booking = BookingRepository::new(db)
        .insert(NewBooking {
            params: &params,
            total_amount: Decimal::new(27000, 2),
            booking_reference: "BK12345678001".to_string(),
        })
        .await?;

    assert_eq!(booking.status, "confirmed");
    assert_eq!(booking.total_amount, 270.0);
    assert_eq!(booking.booking_reference, "BK12345678001");
    assert_eq!(booking.payment_method, "card");
    assert_eq!(
        booking.special_requests.as_deref(),
        Some("Payment: card | Discount: SUMMER")
    );

    Ok(())
}

/// Tests that reference codes are unique at the store level.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    BookingFactory::new(db, room.id, date("2024-08-01"), date("2024-08-03"))
        .booking_reference("BK12345678001")
        .build()
        .await?;

    let params = params(room.id, stay("2024-07-10", "2024-07-12"));
    let result = BookingRepository::new(db)
        .insert(NewBooking {
            params: &params,
            total_amount: Decimal::new(20000, 2),
            booking_reference: "BK12345678001".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
