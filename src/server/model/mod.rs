//! Domain models and operation parameter types.
//!
//! Domain models are converted from SeaORM entities in the data layer and into wire DTOs
//! in the controller layer. Parameter models carry already validated and normalised input
//! into the service layer.

pub mod booking;
pub mod dashboard;
pub mod order;
pub mod room;
pub mod spa;
