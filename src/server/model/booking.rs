//! Domain & parameter models for room reservations
//!
//! Defines the stay interval and its overlap predicate, the reservation domain model,
//! the validated booking parameters and the confirmation returned once a reservation
//! is committed.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    model::booking::{BookingConfirmationDto, BookingDto},
    server::{
        error::{internal::InternalError, AppError},
        util::money,
    },
};

/// Reservation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    /// Statuses that hold the room and count toward conflict checks.
    pub const ACTIVE: [BookingStatus; 2] = [BookingStatus::Confirmed, BookingStatus::CheckedIn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "confirmed" => Some(Self::Confirmed),
            "checked_in" => Some(Self::CheckedIn),
            "checked_out" => Some(Self::CheckedOut),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// String forms of the active statuses, for use in store filters.
    pub fn active_values() -> Vec<&'static str> {
        Self::ACTIVE.iter().map(BookingStatus::as_str).collect()
    }
}

/// Payment method recorded on a reservation. Nothing is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Card,
    Mpesa,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Mpesa => "mpesa",
        }
    }

    /// Parses an already lower-cased payment method.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cash" => Some(Self::Cash),
            "card" => Some(Self::Card),
            "mpesa" => Some(Self::Mpesa),
            _ => None,
        }
    }
}

/// Half-open stay interval `[check_in, check_out)`.
///
/// Construction guarantees `check_out > check_in`, so a stay always spans at least one
/// night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// Returns `None` unless check-out falls after check-in.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Option<Self> {
        (check_out > check_in).then_some(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights in the stay.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Whether two stays share at least one night.
    ///
    /// Mirrors the three-clause predicate the store evaluates: the existing stay spans the
    /// new check-in, spans the new check-out, or sits inside the new stay. Back-to-back
    /// stays, where one checks out on the day the other checks in, do not overlap.
    #[allow(dead_code)]
    pub fn overlaps(&self, other: &StayDates) -> bool {
        (self.check_in <= other.check_in && self.check_out > other.check_in)
            || (self.check_in < other.check_out && self.check_out >= other.check_out)
            || (self.check_in >= other.check_in && self.check_out <= other.check_out)
    }
}

/// Validated parameters for creating a reservation
///
/// Guest fields are trimmed, the email is lower-cased and the discount code is dropped
/// when blank.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub room_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub id_number: String,
    pub stay: StayDates,
    pub guests: i32,
    pub payment_method: PaymentMethod,
    pub discount_code: Option<String>,
    /// Pre-computed quote that replaces `price x nights` as the pre-discount base.
    pub quoted_total: Option<Decimal>,
}

impl CreateBookingParams {
    /// Free-text note recorded with the reservation.
    pub fn special_requests(&self) -> String {
        match &self.discount_code {
            Some(code) => format!(
                "Payment: {} | Discount: {}",
                self.payment_method.as_str(),
                code
            ),
            None => format!("Payment: {}", self.payment_method.as_str()),
        }
    }
}

/// Row to insert for a reservation, once the price and reference are known.
#[derive(Debug, Clone)]
pub struct NewBooking<'a> {
    pub params: &'a CreateBookingParams,
    pub total_amount: Decimal,
    pub booking_reference: String,
}

/// The reservation domain model
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: i32,
    pub room_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub id_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub total_amount: Decimal,
    pub payment_method: String,
    pub discount_code: Option<String>,
    pub booking_reference: String,
    pub special_requests: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to the reservation domain model
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted domain model
    /// - `Err(InternalError::InvalidAmount)` - Stored total is not a finite number
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, InternalError> {
        Ok(Self {
            total_amount: money::to_decimal(entity.total_amount)?,
            id: entity.id,
            room_id: entity.room_id,
            customer_name: entity.customer_name,
            customer_email: entity.customer_email,
            customer_phone: entity.customer_phone,
            id_number: entity.id_number,
            check_in: entity.check_in,
            check_out: entity.check_out,
            guests: entity.guests,
            payment_method: entity.payment_method,
            discount_code: entity.discount_code,
            booking_reference: entity.booking_reference,
            special_requests: entity.special_requests,
            status: entity.status,
            created_at: entity.created_at,
        })
    }
}

/// Reservation joined with the room it holds.
#[derive(Debug, Clone)]
pub struct BookingWithRoom {
    pub booking: Booking,
    pub room_number: String,
    pub room_type: String,
    pub room_price: Decimal,
}

impl BookingWithRoom {
    /// Converts a reservation and its room entity into the joined domain model
    ///
    /// # Returns
    /// - `Ok(BookingWithRoom)` - The joined model
    /// - `Err(AppError::InternalErr)` - Non-finite amount in the store
    pub fn from_entities(
        booking: entity::booking::Model,
        room: entity::room::Model,
    ) -> Result<Self, AppError> {
        Ok(Self {
            booking: Booking::from_entity(booking)?,
            room_price: money::to_decimal(room.price)?,
            room_number: room.room_number,
            room_type: room.room_type,
        })
    }

    pub fn into_dto(self) -> BookingDto {
        let booking = self.booking;

        BookingDto {
            id: booking.id,
            room_id: booking.room_id,
            customer_name: booking.customer_name,
            customer_email: booking.customer_email,
            customer_phone: booking.customer_phone,
            id_number: booking.id_number,
            check_in: booking.check_in,
            check_out: booking.check_out,
            guests: booking.guests,
            total_amount: booking.total_amount,
            payment_method: booking.payment_method,
            discount_code: booking.discount_code,
            booking_reference: booking.booking_reference,
            special_requests: booking.special_requests,
            status: booking.status,
            created_at: booking.created_at,
            room_number: self.room_number,
            room_type: self.room_type,
            room_price: self.room_price,
        }
    }
}

/// Filters for searching reservations; absent filters match everything.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub customer_email: Option<String>,
    pub booking_reference: Option<String>,
}

/// Outcome of a committed reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub booking_id: i32,
    pub booking_reference: String,
    pub total_amount: Decimal,
    pub nights: i64,
    pub stay: StayDates,
}

impl BookingConfirmation {
    pub fn into_dto(self) -> BookingConfirmationDto {
        BookingConfirmationDto {
            booking_id: self.booking_id,
            booking_reference: self.booking_reference,
            total_amount: self.total_amount,
            nights: self.nights,
            check_in: self.stay.check_in(),
            check_out: self.stay.check_out(),
        }
    }
}
