pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_room_table;
mod m20260301_000002_create_booking_table;
mod m20260301_000003_create_meal_table;
mod m20260301_000004_create_meal_order_table;
mod m20260301_000005_create_order_item_table;
mod m20260301_000006_create_spa_service_table;
mod m20260301_000007_create_spa_appointment_table;
mod m20260302_000008_create_reservation_indexes;
mod m20260303_000009_create_spa_hours_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_room_table::Migration),
            Box::new(m20260301_000002_create_booking_table::Migration),
            Box::new(m20260301_000003_create_meal_table::Migration),
            Box::new(m20260301_000004_create_meal_order_table::Migration),
            Box::new(m20260301_000005_create_order_item_table::Migration),
            Box::new(m20260301_000006_create_spa_service_table::Migration),
            Box::new(m20260301_000007_create_spa_appointment_table::Migration),
            Box::new(m20260302_000008_create_reservation_indexes::Migration),
            Box::new(m20260303_000009_create_spa_hours_table::Migration),
        ]
    }
}
