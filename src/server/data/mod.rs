//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories are generic over `ConnectionTrait` so the same
//! queries run against the connection pool for reads and inside a transaction for the
//! conflict re-checks and writes of a unit of work.

pub mod booking;
pub mod meal;
pub mod meal_order;
pub mod room;
pub mod spa_appointment;
pub mod spa_hours;
pub mod spa_service;

#[cfg(test)]
mod test;
