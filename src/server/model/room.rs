//! Domain & parameter models for room inventory
//!
//! Defines the room domain model with its cached status, the overview model carrying
//! the occupancy derived for a given day, and the availability search parameters.

use rust_decimal::Decimal;

use crate::{
    model::room::{RoomDto, RoomOverviewDto},
    server::{
        error::{internal::InternalError, AppError},
        model::booking::StayDates,
        util::money,
    },
};

/// Cached room status.
///
/// Only `Maintenance` is authoritative; occupancy for a given day is derived from active
/// reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(InternalError::UnknownEnumValue {
                kind: "room status",
                value: other.to_string(),
            }),
        }
    }
}

/// The room domain model
#[derive(Debug, Clone)]
pub struct Room {
    pub id: i32,
    pub room_number: String,
    pub room_type: String,
    pub price: Decimal,
    pub max_occupancy: i32,
    pub status: RoomStatus,
    pub features: Vec<String>,
    pub image_url: Option<String>,
}

impl Room {
    /// Converts an entity model to the room domain model
    ///
    /// The feature list is stored as a JSON array; a malformed value is logged and read
    /// as an empty list rather than failing the whole listing.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Room)` - The converted room domain model
    /// - `Err(AppError::InternalErr)` - Unknown status or non-finite price in the store
    pub fn from_entity(entity: entity::room::Model) -> Result<Self, AppError> {
        let features = serde_json::from_str::<Vec<String>>(&entity.features).unwrap_or_else(|e| {
            tracing::warn!("Room {} has malformed features: {}", entity.id, e);
            Vec::new()
        });

        Ok(Self {
            id: entity.id,
            status: RoomStatus::parse(&entity.status)?,
            price: money::to_decimal(entity.price)?,
            room_number: entity.room_number,
            room_type: entity.room_type,
            max_occupancy: entity.max_occupancy,
            features,
            image_url: entity.image_url,
        })
    }

    pub fn is_bookable(&self) -> bool {
        self.status != RoomStatus::Maintenance
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            room_number: self.room_number,
            room_type: self.room_type,
            price: self.price,
            max_occupancy: self.max_occupancy,
            status: self.status.as_str().to_string(),
            features: self.features,
            image_url: self.image_url,
        }
    }
}

/// Room together with its occupancy on a given day.
#[derive(Debug, Clone)]
pub struct RoomOverview {
    pub room: Room,
    pub current_status: RoomStatus,
}

impl RoomOverview {
    /// Derives the current status from whether an active reservation covers the day.
    ///
    /// Maintenance always wins since it is set out of band.
    pub fn new(room: Room, occupied_today: bool) -> Self {
        let current_status = match room.status {
            RoomStatus::Maintenance => RoomStatus::Maintenance,
            _ if occupied_today => RoomStatus::Occupied,
            status => status,
        };

        Self {
            room,
            current_status,
        }
    }

    pub fn into_dto(self) -> RoomOverviewDto {
        RoomOverviewDto {
            current_status: self.current_status.as_str().to_string(),
            room: self.room.into_dto(),
        }
    }
}

/// Parameters for listing rooms free over a stay
#[derive(Debug, Clone)]
pub struct AvailabilityParams {
    pub stay: StayDates,
    /// `None` lists every room type.
    pub room_type: Option<String>,
}
