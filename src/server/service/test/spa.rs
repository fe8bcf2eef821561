use super::*;
use crate::server::service::{catalog::CatalogService, spa::AppointmentService};
use sea_orm::{ActiveModelTrait, ActiveValue};
use test_utils::factory::{spa_hours::SpaHoursFactory, spa_service::SpaServiceFactory};

fn appointment(service_id: i32, time: &str) -> CreateAppointmentDto {
    CreateAppointmentDto {
        booking_id: None,
        customer_name: "Jane Doe".to_string(),
        service_id: Some(service_id),
        appointment_date: "2024-07-11".to_string(),
        appointment_time: time.to_string(),
        notes: None,
    }
}

/// Tests the slot lifecycle of a spa service.
///
/// Verifies that a free slot can be booked once, that a second request for the same
/// slot is refused, and that cancelling the first appointment frees the slot again.
///
/// Expected: Ok, then SlotTaken, then Ok after cancellation
#[tokio::test]
async fn books_slot_once_until_cancelled() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_spa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let spa = factory::create_spa_service(db).await?;
    let service = AppointmentService::new(db);

    let first = service.create(appointment(spa.id, "14:00")).await.unwrap();

    let second = service.create(appointment(spa.id, "14:00:00")).await;
    assert!(matches!(
        second,
        Err(AppError::ReservationErr(ReservationError::SlotTaken(id))) if id == spa.id
    ));

    entity::spa_appointment::ActiveModel {
        id: ActiveValue::Unchanged(first),
        status: ActiveValue::Set("cancelled".to_string()),
        ..Default::default()
    }
    .update(db)
    .await?;

    let rebooked = service.create(appointment(spa.id, "14:00")).await;
    assert!(rebooked.is_ok());

    let stored = entity::prelude::SpaAppointment::find().count(db).await?;
    assert_eq!(stored, 2);

    Ok(())
}

/// Tests that neighbouring slots of the same service do not conflict.
///
/// Expected: Ok for both appointments
#[tokio::test]
async fn allows_different_times() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_spa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let spa = factory::create_spa_service(db).await?;
    let service = AppointmentService::new(db);

    service.create(appointment(spa.id, "14:00")).await.unwrap();
    let later = service.create(appointment(spa.id, "15:00")).await;

    assert!(later.is_ok());

    Ok(())
}

/// Tests that unknown and withdrawn services cannot be booked.
///
/// Expected: Err(ServiceUnavailable) twice
#[tokio::test]
async fn rejects_unavailable_service() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_spa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let withdrawn = SpaServiceFactory::new(db).is_available(false).build().await?;
    let service = AppointmentService::new(db);

    let missing = service.create(appointment(999, "14:00")).await;
    let closed = service.create(appointment(withdrawn.id, "14:00")).await;

    assert!(matches!(
        missing,
        Err(AppError::ReservationErr(ReservationError::ServiceUnavailable(999)))
    ));
    assert!(matches!(
        closed,
        Err(AppError::ReservationErr(ReservationError::ServiceUnavailable(_)))
    ));
    assert_eq!(entity::prelude::SpaAppointment::find().count(db).await?, 0);

    Ok(())
}

/// Tests guests racing for one slot on separate connections.
///
/// Expected: one Ok, five Err(SlotTaken), one stored appointment
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_take_slot_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_spa_tables()
        .build_file_backed()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let spa = factory::create_spa_service(db).await?;

    let handles: Vec<_> = (0..6)
        .map(|guest| {
            let db = db.clone();
            let dto = CreateAppointmentDto {
                customer_name: format!("Guest {}", guest),
                ..appointment(spa.id, "10:30")
            };

            tokio::spawn(async move { AppointmentService::new(&db).create(dto).await })
        })
        .collect();

    let mut scheduled = 0;
    let mut taken = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => scheduled += 1,
            Err(AppError::ReservationErr(ReservationError::SlotTaken(id))) => {
                assert_eq!(id, spa.id);
                taken += 1;
            }
            Err(other) => panic!("unexpected appointment failure: {:?}", other),
        }
    }

    assert_eq!(scheduled, 1);
    assert_eq!(taken, 5);
    assert_eq!(entity::prelude::SpaAppointment::find().count(db).await?, 1);

    Ok(())
}

/// Tests listing the spa's opening hours.
///
/// Verifies that days stored out of order come back Monday first, that a closed day
/// has no times, and that an unknown day name is kept after Sunday.
///
/// Expected: Ok with Monday, Wednesday, Sunday, then the unknown day
#[tokio::test]
async fn lists_hours_from_monday() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_spa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SpaHoursFactory::new(db, "Sunday").closed().build().await?;
    factory::create_spa_hours(db, "Public Holiday").await?;
    factory::create_spa_hours(db, "Wednesday").await?;
    factory::create_spa_hours(db, "Monday").await?;

    let hours = CatalogService::new(db).list_spa_hours().await.unwrap();

    let days: Vec<&str> = hours.iter().map(|day| day.day_of_week.as_str()).collect();
    assert_eq!(days, vec!["Monday", "Wednesday", "Sunday", "Public Holiday"]);

    let sunday = hours[2].clone().into_dto();
    assert!(!sunday.is_open);
    assert_eq!(sunday.open_time, None);
    assert_eq!(sunday.close_time, None);

    Ok(())
}
