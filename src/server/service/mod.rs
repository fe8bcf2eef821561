//! Business logic orchestrating validation, conflict checks and persistence.
//!
//! Services own the units of work: conflict re-checks and the writes they guard run in
//! one transaction that is committed or rolled back as a whole.

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod dashboard;
pub mod duplicate;
pub mod order;
pub mod pricing;
pub mod room;
pub mod spa;
pub mod validation;

#[cfg(test)]
mod test;
