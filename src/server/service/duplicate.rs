use sea_orm::ConnectionTrait;

use crate::server::{
    data::booking::BookingRepository, error::AppError, model::booking::StayDates,
};

/// Guards against the same guest submitting the same stay twice.
///
/// A guest matches on email or identity document, and the stay must match exactly. A
/// guest holding several different stays is not a duplicate.
pub struct DuplicateGuard<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DuplicateGuard<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns true when an active reservation already holds this guest's stay.
    ///
    /// # Arguments
    /// - `customer_email` - Lower-cased guest email
    /// - `id_number` - Trimmed identity document number
    /// - `stay` - Requested stay
    pub async fn has_duplicate(
        &self,
        customer_email: &str,
        id_number: &str,
        stay: &StayDates,
    ) -> Result<bool, AppError> {
        Ok(BookingRepository::new(self.db)
            .has_duplicate(customer_email, id_number, stay)
            .await?)
    }
}
