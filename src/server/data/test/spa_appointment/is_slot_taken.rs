use super::*;

/// Tests that a scheduled appointment occupies its slot.
///
/// Verifies that the exact service, date and time are taken while a different time on
/// the same day is free.
///
/// Expected: Ok(true) for the same slot, Ok(false) for another time
#[tokio::test]
async fn scheduled_appointment_takes_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_spa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::create_spa_service(db).await?;
    factory::create_appointment(db, service.id, date("2024-07-10"), time("14:00")).await?;

    let repo = SpaAppointmentRepository::new(db);
    let taken = repo
        .is_slot_taken(&SpaSlot {
            service_id: service.id,
            date: date("2024-07-10"),
            time: time("14:00"),
        })
        .await?;
    let other_time = repo
        .is_slot_taken(&SpaSlot {
            service_id: service.id,
            date: date("2024-07-10"),
            time: time("15:00"),
        })
        .await?;

    assert!(taken);
    assert!(!other_time);

    Ok(())
}

/// Tests that cancelled appointments free their slot.
///
/// Expected: Ok(false)
#[tokio::test]
async fn cancelled_appointment_frees_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_spa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::create_spa_service(db).await?;
    SpaAppointmentFactory::new(db, service.id, date("2024-07-10"), time("14:00"))
        .status("cancelled")
        .build()
        .await?;

    let taken = SpaAppointmentRepository::new(db)
        .is_slot_taken(&SpaSlot {
            service_id: service.id,
            date: date("2024-07-10"),
            time: time("14:00"),
        })
        .await?;

    assert!(!taken);

    Ok(())
}

/// Tests inserting a scheduled appointment.
///
/// Expected: Ok(Model) with status `scheduled`
#[tokio::test]
async fn inserts_scheduled_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_spa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::create_spa_service(db).await?;
    let repo = SpaAppointmentRepository::new(db);

    let appointment = repo
        .insert(&CreateAppointmentParams {
            booking_id: None,
            customer_name: "Jane Doe".to_string(),
            slot: SpaSlot {
                service_id: service.id,
                date: date("2024-07-10"),
                time: time("14:00"),
            },
            notes: Some("Window seat".to_string()),
        })
        .await?;

    assert_eq!(appointment.status, AppointmentStatus::Scheduled.as_str());
    assert_eq!(appointment.appointment_time, time("14:00"));
    assert_eq!(repo.count_by_status(AppointmentStatus::Scheduled).await?, 1);

    Ok(())
}
