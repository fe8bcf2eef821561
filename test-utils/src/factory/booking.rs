use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Guest identity fields default to values derived from a unique counter so that two
/// factory bookings never trip the duplicate-stay guard unless a test asks for it.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, room.id, check_in, check_out)
///     .customer_email("guest@example.com")
///     .status("checked_in")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    id_number: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: i32,
    total_amount: f64,
    payment_method: String,
    discount_code: Option<String>,
    booking_reference: String,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - customer_name: `"Guest {id}"`
    /// - customer_email: `"guest{id}@example.com"`
    /// - id_number: `"ID{id}"`
    /// - guests: `2`
    /// - total_amount: `200.0`
    /// - payment_method: `"card"`
    /// - booking_reference: `"BKTEST{id}"`
    /// - status: `"confirmed"`
    pub fn new(
        db: &'a DatabaseConnection,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            room_id,
            customer_name: format!("Guest {}", id),
            customer_email: format!("guest{}@example.com", id),
            customer_phone: "+254 712 345 678".to_string(),
            id_number: format!("ID{}", id),
            check_in,
            check_out,
            guests: 2,
            total_amount: 200.0,
            payment_method: "card".to_string(),
            discount_code: None,
            booking_reference: format!("BKTEST{:08}", id),
            status: "confirmed".to_string(),
        }
    }

    pub fn customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = customer_name.into();
        self
    }

    pub fn customer_email(mut self, customer_email: impl Into<String>) -> Self {
        self.customer_email = customer_email.into();
        self
    }

    pub fn id_number(mut self, id_number: impl Into<String>) -> Self {
        self.id_number = id_number.into();
        self
    }

    pub fn total_amount(mut self, total_amount: f64) -> Self {
        self.total_amount = total_amount;
        self
    }

    pub fn booking_reference(mut self, booking_reference: impl Into<String>) -> Self {
        self.booking_reference = booking_reference.into();
        self
    }

    /// Sets the booking status (`confirmed`, `checked_in`, `checked_out` or `cancelled`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown room)
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            room_id: ActiveValue::Set(self.room_id),
            customer_name: ActiveValue::Set(self.customer_name),
            customer_email: ActiveValue::Set(self.customer_email),
            customer_phone: ActiveValue::Set(self.customer_phone),
            id_number: ActiveValue::Set(self.id_number),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            guests: ActiveValue::Set(self.guests),
            total_amount: ActiveValue::Set(self.total_amount),
            payment_method: ActiveValue::Set(self.payment_method),
            discount_code: ActiveValue::Set(self.discount_code),
            booking_reference: ActiveValue::Set(self.booking_reference),
            special_requests: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed booking for the room and stay with default guest details.
///
/// Shorthand for `BookingFactory::new(db, room_id, check_in, check_out).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, room_id, check_in, check_out)
        .build()
        .await
}
