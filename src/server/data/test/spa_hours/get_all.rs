use super::*;

/// Tests reading the configured days back.
///
/// Verifies that rows come back in insertion order with closed days keeping no times.
///
/// Expected: Ok(vec![Sunday closed, Monday 10:00 to 18:00])
#[tokio::test]
async fn returns_days_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_spa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SpaHoursFactory::new(db, "Sunday").closed().build().await?;
    SpaHoursFactory::new(db, "Monday")
        .open_time(time("10:00"))
        .close_time(time("18:00"))
        .build()
        .await?;

    let rows = SpaHoursRepository::new(db).get_all().await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].day_of_week, "Sunday");
    assert!(!rows[0].is_open);
    assert_eq!(rows[0].open_time, None);
    assert_eq!(rows[1].day_of_week, "Monday");
    assert_eq!(rows[1].open_time, Some(time("10:00")));

    Ok(())
}

/// Tests that a day name can only be configured once.
///
/// Expected: Err(DbErr) for the second Monday
#[tokio::test]
async fn rejects_second_row_for_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_spa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_spa_hours(db, "Monday").await?;
    let again = factory::create_spa_hours(db, "Monday").await;

    assert!(again.is_err());
    assert_eq!(SpaHoursRepository::new(db).get_all().await?.len(), 1);

    Ok(())
}
