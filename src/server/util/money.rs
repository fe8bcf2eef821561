//! Conversions between stored `f64` amounts and `Decimal` arithmetic.
//!
//! Amounts are stored as `double` columns but every calculation runs on `Decimal` and is
//! rounded to cents half away from zero before it leaves the service layer.

use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal, RoundingStrategy,
};

use crate::server::error::internal::InternalError;

/// Number of fractional digits kept for monetary values.
pub const CENT_SCALE: u32 = 2;

/// Rounds an amount to cents, half away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a stored amount into a decimal.
///
/// # Returns
/// - `Ok(Decimal)` - The amount rounded to cents
/// - `Err(InternalError::InvalidAmount)` - The stored value is NaN or infinite
pub fn to_decimal(amount: f64) -> Result<Decimal, InternalError> {
    Decimal::from_f64(amount)
        .map(round_cents)
        .ok_or(InternalError::InvalidAmount(amount))
}

/// Converts a caller-supplied amount, treating non-finite values as absent.
pub fn from_input(amount: f64) -> Option<Decimal> {
    Decimal::from_f64(amount)
}

/// Converts a computed amount into its storage representation.
pub fn to_f64(amount: Decimal) -> f64 {
    round_cents(amount).to_f64().unwrap_or_default()
}
