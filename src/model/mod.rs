//! Wire-level data transfer objects.
//!
//! These types describe the JSON bodies exchanged with the browser client. They carry
//! no behaviour; the server converts them into domain parameters before doing any work.

pub mod api;
pub mod booking;
pub mod dashboard;
pub mod order;
pub mod room;
pub mod spa;
