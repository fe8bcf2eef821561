//! Stay and order pricing.
//!
//! All arithmetic runs on `Decimal`; results are rounded to cents half away from zero.
//! Discounts are looked up through `DiscountPolicy` so that a real code registry can
//! replace the flat rate without touching the calculations.

use rust_decimal::Decimal;

use crate::server::{
    model::{booking::StayDates, order::OrderLine},
    util::money::round_cents,
};

/// Decides the discount a code grants.
pub trait DiscountPolicy: Send + Sync {
    /// Fraction of the total taken off for `code`, e.g. `0.10` for ten percent.
    ///
    /// `None` means the code grants nothing.
    fn discount_for(&self, code: &str) -> Option<Decimal>;
}

/// Grants the same rate for any non-blank code. No registry is consulted.
#[derive(Debug, Clone)]
pub struct FlatRateDiscount {
    rate: Decimal,
}

impl FlatRateDiscount {
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }
}

impl Default for FlatRateDiscount {
    fn default() -> Self {
        Self::new(Decimal::new(10, 2))
    }
}

impl DiscountPolicy for FlatRateDiscount {
    fn discount_for(&self, code: &str) -> Option<Decimal> {
        (!code.trim().is_empty()).then_some(self.rate)
    }
}

/// Computes the amount charged for a stay.
///
/// The base is `nightly_rate x nights` unless a pre-computed quote is supplied, in which
/// case the quote is the base. A discount granted by `policy` is then applied.
///
/// # Arguments
/// - `nightly_rate` - Room price per night
/// - `stay` - The stay being priced
/// - `quoted_total` - Optional pre-computed quote replacing the base
/// - `discount_code` - Optional discount code
/// - `policy` - Policy deciding what the code is worth
///
/// # Returns
/// - `Some(Decimal)` - Final total rounded to cents
/// - `None` - The base amount does not fit a `Decimal`
pub fn quote_stay(
    nightly_rate: Decimal,
    stay: &StayDates,
    quoted_total: Option<Decimal>,
    discount_code: Option<&str>,
    policy: &dyn DiscountPolicy,
) -> Option<Decimal> {
    let base = match quoted_total {
        Some(quote) => quote,
        None => nightly_rate.checked_mul(Decimal::from(stay.nights()))?,
    };

    let discount = discount_code
        .and_then(|code| policy.discount_for(code))
        .unwrap_or(Decimal::ZERO);

    base.checked_mul(Decimal::ONE - discount).map(round_cents)
}

/// Sums `unit_price x quantity` across all lines, rounded to cents.
///
/// Returns `None` when a line total or the running sum overflows.
pub fn order_total(lines: &[OrderLine]) -> Option<Decimal> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| {
            line.line_total().and_then(|amount| total.checked_add(amount))
        })
        .map(round_cents)
}
