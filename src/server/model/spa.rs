//! Domain & parameter models for spa scheduling

use chrono::{NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;

use crate::{
    model::spa::{SpaHoursDto, SpaServiceDto},
    server::{error::internal::InternalError, util::money},
};

/// Appointment status. Only scheduled appointments hold their slot; completion and
/// cancellation happen out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
        }
    }
}

/// A bookable service slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaSlot {
    pub service_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Validated parameters for scheduling an appointment
#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub booking_id: Option<i32>,
    pub customer_name: String,
    pub slot: SpaSlot,
    pub notes: Option<String>,
}

/// The spa service catalog domain model
#[derive(Debug, Clone)]
pub struct SpaService {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub duration_minutes: i32,
    pub price: Decimal,
}

impl SpaService {
    pub fn from_entity(entity: entity::spa_service::Model) -> Result<Self, InternalError> {
        Ok(Self {
            price: money::to_decimal(entity.price)?,
            id: entity.id,
            name: entity.name,
            description: entity.description,
            category: entity.category,
            duration_minutes: entity.duration_minutes,
        })
    }

    pub fn into_dto(self) -> SpaServiceDto {
        SpaServiceDto {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            duration_minutes: self.duration_minutes,
            price: self.price,
        }
    }
}

/// Opening hours of the spa on one day of the week
#[derive(Debug, Clone, PartialEq)]
pub struct SpaHours {
    pub day_of_week: String,
    /// `None` when the stored day name is not a weekday.
    pub weekday: Option<Weekday>,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub is_open: bool,
}

impl SpaHours {
    pub fn from_entity(entity: entity::spa_hours::Model) -> Self {
        Self {
            weekday: entity.day_of_week.trim().parse().ok(),
            day_of_week: entity.day_of_week,
            open_time: entity.open_time,
            close_time: entity.close_time,
            is_open: entity.is_open,
        }
    }

    /// Position in a Monday-first week; unknown day names sort last.
    pub fn week_position(&self) -> u32 {
        self.weekday.map_or(7, |weekday| weekday.num_days_from_monday())
    }

    pub fn into_dto(self) -> SpaHoursDto {
        SpaHoursDto {
            day_of_week: self.day_of_week,
            open_time: self.open_time,
            close_time: self.close_time,
            is_open: self.is_open,
        }
    }
}
