use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Room, Booking};
///
/// let test = TestBuilder::new()
///     .with_table(Room)
///     .with_table(Booking)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for room availability and booking operations.
    ///
    /// Adds `Room` and `Booking`, in that order.
    pub fn with_booking_tables(self) -> Self {
        self.with_table(Room).with_table(Booking)
    }

    /// Adds the tables required for meal ordering.
    ///
    /// Orders may reference a booking, so this includes the booking tables followed by
    /// `Meal`, `MealOrder` and `OrderItem`.
    pub fn with_order_tables(self) -> Self {
        self.with_booking_tables()
            .with_table(Meal)
            .with_table(MealOrder)
            .with_table(OrderItem)
    }

    /// Adds the tables required for spa appointment scheduling.
    ///
    /// Includes the booking tables followed by `SpaService`, `SpaAppointment` and
    /// `SpaHours`.
    pub fn with_spa_tables(self) -> Self {
        self.with_booking_tables()
            .with_table(SpaService)
            .with_table(SpaAppointment)
            .with_table(SpaHours)
    }

    /// Adds every table in the schema.
    ///
    /// Use this for tests spanning several domains, such as dashboard counts.
    pub fn with_all_tables(self) -> Self {
        self.with_order_tables()
            .with_table(SpaService)
            .with_table(SpaAppointment)
            .with_table(SpaHours)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }

    /// Builds the test context on a temporary database file behind a connection pool.
    ///
    /// Use this when a test runs transactions side by side; the in-memory database of
    /// `build()` serves every caller through one connection. The file is deleted when
    /// the context is dropped.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Pooled test context with tables ready
    /// - `Err(TestError::Database)`- Failed to open the database file or create tables
    pub async fn build_file_backed(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::file_backed();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
