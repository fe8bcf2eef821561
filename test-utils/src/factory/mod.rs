//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let room = factory::create_room(&db).await?;
//! let booking = factory::create_booking(
//!     &db,
//!     room.id,
//!     factory::helpers::date("2024-07-10"),
//!     factory::helpers::date("2024-07-12"),
//! )
//! .await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let suite = factory::room::RoomFactory::new(&db)
//!     .room_type("suite")
//!     .price(250.0)
//!     .status("maintenance")
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod helpers;
pub mod meal;
pub mod meal_order;
pub mod room;
pub mod spa_appointment;
pub mod spa_hours;
pub mod spa_service;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use meal::create_meal;
pub use meal_order::create_meal_order;
pub use room::create_room;
pub use spa_appointment::create_appointment;
pub use spa_hours::create_spa_hours;
pub use spa_service::create_spa_service;
