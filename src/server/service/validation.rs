//! Field validation for guest-submitted requests.
//!
//! Every check is pure. Booking and order validation collect all violated rules into a
//! single `AppError::Validation` instead of stopping at the first one, and return the
//! normalised parameters on success.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

use crate::{
    model::{
        booking::{BookingSearchQuery, CreateBookingDto},
        order::{CreateOrderDto, MealRefDto, OrderItemRequestDto, OrderSearchQuery},
        room::AvailabilityQuery,
        spa::CreateAppointmentDto,
    },
    server::{
        error::AppError,
        model::{
            booking::{BookingFilter, BookingStatus, CreateBookingParams, PaymentMethod, StayDates},
            order::{CreateOrderParams, OrderFilter, OrderLineRequest, OrderType},
            room::AvailabilityParams,
            spa::{CreateAppointmentParams, SpaSlot},
        },
        util::{
            money,
            parse::{parse_catalog_id, parse_date, parse_time},
        },
    },
};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_ID_NUMBER_LEN: usize = 3;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MIN_GUESTS: i64 = 1;
pub const MAX_GUESTS: i64 = 8;

/// Returns true for a `local@domain.tld` shaped address.
pub fn is_valid_email(email: &str) -> bool {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
    RE.is_match(email)
}

/// Returns true when the phone uses only digits, spaces, `-`, `+` and parentheses and
/// holds at least ten digits.
pub fn is_valid_phone(phone: &str) -> bool {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[0-9\s\-\+\(\)]+$").expect("valid regex"));
    RE.is_match(phone) && phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

fn has_min_len(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Trims an optional free-text field, dropping it when blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Validates and normalises a booking request.
///
/// Guest fields are trimmed, the email and payment method lower-cased. Date ordering and
/// the past check-in rule are only evaluated once both dates parse.
///
/// # Arguments
/// - `dto` - The request as submitted
/// - `today` - Current date, check-in may not fall before it
///
/// # Returns
/// - `Ok(CreateBookingParams)` - Normalised parameters
/// - `Err(AppError::Validation)` - Every rule the request violates
pub fn validate_booking(
    dto: CreateBookingDto,
    today: NaiveDate,
) -> Result<CreateBookingParams, AppError> {
    let mut errors = Vec::new();

    let customer_name = dto.customer_name.trim().to_string();
    let customer_email = dto.customer_email.trim().to_lowercase();
    let customer_phone = dto.customer_phone.trim().to_string();
    let id_number = dto.id_number.trim().to_string();
    let payment_method = dto.payment_method.trim().to_lowercase();

    let room_id = dto.room_id.filter(|id| *id > 0);
    if room_id.is_none() {
        errors.push("Room ID is required".to_string());
    }
    if !has_min_len(&customer_name, MIN_NAME_LEN) {
        errors.push("Valid customer name is required (minimum 2 characters)".to_string());
    }
    if !is_valid_email(&customer_email) {
        errors.push("Valid email address is required".to_string());
    }
    if !is_valid_phone(&customer_phone) {
        errors.push("Valid phone number is required".to_string());
    }
    if !has_min_len(&id_number, MIN_ID_NUMBER_LEN) {
        errors.push("Valid ID/Passport number is required".to_string());
    }

    let check_in = parse_date(&dto.check_in);
    if check_in.is_none() {
        errors.push("Valid check-in date is required".to_string());
    }
    let check_out = parse_date(&dto.check_out);
    if check_out.is_none() {
        errors.push("Valid check-out date is required".to_string());
    }

    let guests = dto
        .guests
        .filter(|guests| (MIN_GUESTS..=MAX_GUESTS).contains(guests));
    if guests.is_none() {
        errors.push("Number of guests must be between 1 and 8".to_string());
    }

    let payment_method = PaymentMethod::parse(&payment_method);
    if payment_method.is_none() {
        errors.push("Valid payment method is required (cash, card, or mpesa)".to_string());
    }

    let mut stay = None;
    if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
        if check_in < today {
            errors.push("Check-in date cannot be in the past".to_string());
        }
        stay = StayDates::new(check_in, check_out);
        if stay.is_none() {
            errors.push("Check-out date must be after check-in date".to_string());
        }
    }

    let quoted_total = match dto.total_amount {
        None => None,
        Some(amount) => match money::from_input(amount) {
            Some(amount) if amount > Decimal::ZERO => Some(amount),
            Some(amount) if amount.is_zero() => None,
            _ => {
                errors.push("Total amount must be a positive number".to_string());
                None
            }
        },
    };

    match (room_id, stay, guests, payment_method) {
        (Some(room_id), Some(stay), Some(guests), Some(payment_method)) if errors.is_empty() => {
            Ok(CreateBookingParams {
                room_id,
                customer_name,
                customer_email,
                customer_phone,
                id_number,
                stay,
                // bounded by MAX_GUESTS
                guests: guests as i32,
                payment_method,
                discount_code: non_blank(dto.discount_code),
                quoted_total,
            })
        }
        _ => Err(AppError::Validation(errors)),
    }
}

/// Splits an item reference into a catalog id, if it is one, and its display form.
fn item_reference(meal_ref: Option<MealRefDto>) -> (Option<i32>, Option<String>) {
    match meal_ref {
        Some(MealRefDto::Id(id)) => (
            i32::try_from(id).ok().filter(|id| *id > 0),
            Some(id.to_string()),
        ),
        Some(MealRefDto::Label(label)) => {
            let label = label.trim().to_string();
            if label.is_empty() {
                (None, None)
            } else {
                (parse_catalog_id(&label), Some(label))
            }
        }
        None => (None, None),
    }
}

fn validate_order_line(
    position: usize,
    item: OrderItemRequestDto,
    errors: &mut Vec<String>,
) -> Option<OrderLineRequest> {
    let quantity = item
        .quantity
        .filter(|quantity| *quantity >= 1)
        .and_then(|quantity| i32::try_from(quantity).ok());
    if quantity.is_none() {
        errors.push(format!("Item {}: Invalid quantity", position));
    }

    let caller_price = match item.price {
        None => None,
        Some(price) => match money::from_input(price) {
            Some(price) if price > Decimal::ZERO => Some(price),
            _ => {
                errors.push(format!("Item {}: Invalid price", position));
                None
            }
        },
    };

    let (catalog_id, reference) = item_reference(item.meal_id);

    Some(OrderLineRequest {
        catalog_id,
        reference,
        quantity: quantity?,
        caller_price,
        name: non_blank(item.name),
    })
}

/// Validates and normalises an order request.
///
/// Prices are only checked for shape here; whether a line needs a caller price depends
/// on the catalog and is decided when lines are resolved.
///
/// # Returns
/// - `Ok(CreateOrderParams)` - Normalised parameters
/// - `Err(AppError::Validation)` - Every rule the request violates, per-item rules
///   prefixed with the 1-based item position
pub fn validate_order(dto: CreateOrderDto) -> Result<CreateOrderParams, AppError> {
    let mut errors = Vec::new();

    let customer_name = dto.customer_name.trim().to_string();
    if !has_min_len(&customer_name, MIN_NAME_LEN) {
        errors.push("Valid customer name is required".to_string());
    }

    let room_number = dto.room_number.trim().to_string();
    if room_number.is_empty() {
        errors.push("Room number is required".to_string());
    }

    let order_type = OrderType::parse(dto.order_type.trim());
    if order_type.is_none() {
        errors.push("Valid order type is required (restaurant or room_service)".to_string());
    }

    if dto.items.is_empty() {
        errors.push("At least one item is required".to_string());
    }

    let lines: Vec<Option<OrderLineRequest>> = dto
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| validate_order_line(index + 1, item, &mut errors))
        .collect();

    match order_type {
        Some(order_type) if errors.is_empty() => Ok(CreateOrderParams {
            booking_id: dto.booking_id,
            customer_name,
            room_number,
            order_type,
            special_instructions: non_blank(dto.special_instructions),
            lines: lines.into_iter().flatten().collect(),
        }),
        _ => Err(AppError::Validation(errors)),
    }
}

/// Validates an appointment request.
///
/// # Returns
/// - `Ok(CreateAppointmentParams)` - Normalised parameters
/// - `Err(AppError::Validation)` - Missing guest name or service, or an unparseable
///   date or time
pub fn validate_appointment(
    dto: CreateAppointmentDto,
) -> Result<CreateAppointmentParams, AppError> {
    let mut errors = Vec::new();

    let customer_name = dto.customer_name.trim().to_string();
    if customer_name.is_empty() {
        errors.push("Customer name is required".to_string());
    }

    let service_id = dto.service_id.filter(|id| *id > 0);
    if service_id.is_none() {
        errors.push("Spa service is required".to_string());
    }

    let date = parse_date(&dto.appointment_date);
    if date.is_none() {
        errors.push("Valid appointment date is required".to_string());
    }

    let time = parse_time(&dto.appointment_time);
    if time.is_none() {
        errors.push("Valid appointment time is required".to_string());
    }

    match (service_id, date, time) {
        (Some(service_id), Some(date), Some(time)) if errors.is_empty() => {
            Ok(CreateAppointmentParams {
                booking_id: dto.booking_id,
                customer_name,
                slot: SpaSlot {
                    service_id,
                    date,
                    time,
                },
                notes: non_blank(dto.notes),
            })
        }
        _ => Err(AppError::Validation(errors)),
    }
}

/// Validates an availability search.
///
/// # Returns
/// - `Ok(AvailabilityParams)` - The stay and the type filter, `all` meaning none
/// - `Err(AppError::BadRequest)` - Missing dates or a check-out not after check-in
pub fn validate_availability(query: AvailabilityQuery) -> Result<AvailabilityParams, AppError> {
    let (Some(check_in), Some(check_out)) = (
        query.check_in.as_deref().and_then(parse_date),
        query.check_out.as_deref().and_then(parse_date),
    ) else {
        return Err(AppError::BadRequest(
            "Check-in and check-out dates are required".to_string(),
        ));
    };

    let stay = StayDates::new(check_in, check_out).ok_or_else(|| {
        AppError::BadRequest("Check-out date must be after check-in date".to_string())
    })?;

    Ok(AvailabilityParams {
        stay,
        room_type: non_blank(query.room_type).filter(|room_type| room_type != "all"),
    })
}

/// Validates reservation search filters.
///
/// # Returns
/// - `Ok(BookingFilter)` - Filters with blank values dropped
/// - `Err(AppError::BadRequest)` - Unknown status
pub fn validate_booking_filter(query: BookingSearchQuery) -> Result<BookingFilter, AppError> {
    let status = match non_blank(query.status) {
        None => None,
        Some(status) => Some(
            BookingStatus::parse(&status)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown booking status '{}'", status)))?,
        ),
    };

    Ok(BookingFilter {
        status,
        customer_email: non_blank(query.customer_email).map(|email| email.to_lowercase()),
        booking_reference: non_blank(query.booking_reference),
    })
}

/// Validates order search filters.
///
/// # Returns
/// - `Ok(OrderFilter)` - Filters with blank values dropped and the status lower-cased
/// - `Err(AppError::BadRequest)` - Unknown order type
pub fn validate_order_filter(query: OrderSearchQuery) -> Result<OrderFilter, AppError> {
    let order_type = match non_blank(query.order_type) {
        None => None,
        Some(order_type) => Some(
            OrderType::parse(&order_type)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown order type '{}'", order_type)))?,
        ),
    };

    Ok(OrderFilter {
        status: non_blank(query.status).map(|status| status.to_lowercase()),
        customer_name: non_blank(query.customer_name),
        order_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn booking_dto() -> CreateBookingDto {
        CreateBookingDto {
            room_id: Some(5),
            customer_name: "  Jane Doe ".to_string(),
            customer_email: " Jane@Example.COM ".to_string(),
            customer_phone: "+254 (712) 345-678".to_string(),
            id_number: " A1234567 ".to_string(),
            check_in: "2024-07-10".to_string(),
            check_out: "2024-07-12".to_string(),
            guests: Some(2),
            room_type: Some("deluxe".to_string()),
            payment_method: " MPesa ".to_string(),
            discount_code: Some("  ".to_string()),
            total_amount: None,
        }
    }

    fn validation_errors(result: Result<impl std::fmt::Debug, AppError>) -> Vec<String> {
        match result {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn accepts_well_formed_emails() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.ke"));
        assert!(!is_valid_email("guest@example"));
        assert!(!is_valid_email("guest example@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_needs_ten_digits_and_allowed_characters() {
        assert!(is_valid_phone("+254 712 345 678"));
        assert!(is_valid_phone("(020) 123-4567"));
        assert!(!is_valid_phone("712 345 67"));
        assert!(!is_valid_phone("0712345678 ext"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn phone_digits_must_be_ascii() {
        // Arabic-Indic and full-width digits
        assert!(!is_valid_phone("٠١٢٣٤٥٦٧٨٩"));
        assert!(!is_valid_phone("０７１２３４５６７８"));
        assert!(!is_valid_phone("0712345678 ٩"));
    }

    #[test]
    fn normalises_booking_fields() {
        let params = validate_booking(booking_dto(), today()).unwrap();

        assert_eq!(params.room_id, 5);
        assert_eq!(params.customer_name, "Jane Doe");
        assert_eq!(params.customer_email, "jane@example.com");
        assert_eq!(params.id_number, "A1234567");
        assert_eq!(params.payment_method, PaymentMethod::Mpesa);
        assert_eq!(params.discount_code, None);
        assert_eq!(params.stay.nights(), 2);
    }

    #[test]
    fn collects_every_booking_error() {
        let dto = CreateBookingDto {
            room_id: None,
            customer_name: "J".to_string(),
            customer_email: "not-an-email".to_string(),
            customer_phone: "123".to_string(),
            id_number: "A1".to_string(),
            check_in: "2024-13-01".to_string(),
            check_out: "".to_string(),
            guests: Some(9),
            payment_method: "cheque".to_string(),
            ..Default::default()
        };

        let errors = validation_errors(validate_booking(dto, today()));

        assert_eq!(
            errors,
            vec![
                "Room ID is required",
                "Valid customer name is required (minimum 2 characters)",
                "Valid email address is required",
                "Valid phone number is required",
                "Valid ID/Passport number is required",
                "Valid check-in date is required",
                "Valid check-out date is required",
                "Number of guests must be between 1 and 8",
                "Valid payment method is required (cash, card, or mpesa)",
            ]
        );
    }

    #[test]
    fn rejects_past_check_in_and_inverted_stay() {
        let dto = CreateBookingDto {
            check_in: "2024-05-30".to_string(),
            check_out: "2024-05-30".to_string(),
            ..booking_dto()
        };

        let errors = validation_errors(validate_booking(dto, today()));

        assert_eq!(
            errors,
            vec![
                "Check-in date cannot be in the past",
                "Check-out date must be after check-in date",
            ]
        );
    }

    #[test]
    fn check_in_today_is_allowed() {
        let dto = CreateBookingDto {
            check_in: "2024-06-01".to_string(),
            check_out: "2024-06-02".to_string(),
            ..booking_dto()
        };

        assert!(validate_booking(dto, today()).is_ok());
    }

    #[test]
    fn quoted_total_must_not_be_negative() {
        let zero = CreateBookingDto {
            total_amount: Some(0.0),
            ..booking_dto()
        };
        assert_eq!(validate_booking(zero, today()).unwrap().quoted_total, None);

        let negative = CreateBookingDto {
            total_amount: Some(-10.0),
            ..booking_dto()
        };
        assert_eq!(
            validation_errors(validate_booking(negative, today())),
            vec!["Total amount must be a positive number"]
        );
    }

    #[test]
    fn collects_order_and_item_errors() {
        let dto = CreateOrderDto {
            customer_name: " ".to_string(),
            room_number: "".to_string(),
            order_type: "takeaway".to_string(),
            items: vec![
                OrderItemRequestDto {
                    meal_id: Some(MealRefDto::Id(1)),
                    quantity: Some(0),
                    ..Default::default()
                },
                OrderItemRequestDto {
                    meal_id: Some(MealRefDto::Label("Espresso".to_string())),
                    quantity: Some(1),
                    price: Some(-2.0),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let errors = validation_errors(validate_order(dto));

        assert_eq!(
            errors,
            vec![
                "Valid customer name is required",
                "Room number is required",
                "Valid order type is required (restaurant or room_service)",
                "Item 1: Invalid quantity",
                "Item 2: Invalid price",
            ]
        );
    }

    #[test]
    fn empty_order_is_rejected() {
        let dto = CreateOrderDto {
            customer_name: "Jane".to_string(),
            room_number: "101".to_string(),
            order_type: "restaurant".to_string(),
            ..Default::default()
        };

        assert_eq!(
            validation_errors(validate_order(dto)),
            vec!["At least one item is required"]
        );
    }

    #[test]
    fn numeric_strings_are_catalog_references() {
        let dto = CreateOrderDto {
            customer_name: "Jane".to_string(),
            room_number: "Bar".to_string(),
            order_type: "restaurant".to_string(),
            items: vec![
                OrderItemRequestDto {
                    meal_id: Some(MealRefDto::Label("12".to_string())),
                    quantity: Some(2),
                    ..Default::default()
                },
                OrderItemRequestDto {
                    meal_id: Some(MealRefDto::Label("mojito".to_string())),
                    quantity: Some(1),
                    price: Some(8.0),
                    name: Some("Mojito".to_string()),
                },
            ],
            ..Default::default()
        };

        let params = validate_order(dto).unwrap();

        assert_eq!(params.lines[0].catalog_id, Some(12));
        assert_eq!(params.lines[1].catalog_id, None);
        assert_eq!(params.lines[1].label(), "mojito");
        assert_eq!(params.lines[1].caller_price, Some(Decimal::new(8, 0)));
    }

    #[test]
    fn appointment_accepts_time_with_seconds() {
        let dto = CreateAppointmentDto {
            customer_name: "Jane".to_string(),
            service_id: Some(2),
            appointment_date: "2024-07-10".to_string(),
            appointment_time: "14:00:00".to_string(),
            ..Default::default()
        };

        let params = validate_appointment(dto).unwrap();

        assert_eq!(params.slot.time, chrono::NaiveTime::from_hms_opt(14, 0, 0).unwrap());
    }

    #[test]
    fn appointment_reports_missing_fields() {
        let errors = validation_errors(validate_appointment(CreateAppointmentDto::default()));

        assert_eq!(
            errors,
            vec![
                "Customer name is required",
                "Spa service is required",
                "Valid appointment date is required",
                "Valid appointment time is required",
            ]
        );
    }

    #[test]
    fn availability_requires_both_dates() {
        let result = validate_availability(AvailabilityQuery {
            check_in: Some("2024-07-10".to_string()),
            check_out: None,
            room_type: None,
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn availability_treats_all_as_no_filter() {
        let params = validate_availability(AvailabilityQuery {
            check_in: Some("2024-07-10".to_string()),
            check_out: Some("2024-07-12".to_string()),
            room_type: Some("all".to_string()),
        })
        .unwrap();

        assert_eq!(params.room_type, None);
        assert_eq!(params.stay.nights(), 2);
    }

    #[test]
    fn booking_filter_rejects_unknown_status() {
        let result = validate_booking_filter(BookingSearchQuery {
            status: Some("archived".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn order_filter_drops_blanks_and_rejects_unknown_type() {
        let filter = validate_order_filter(OrderSearchQuery {
            status: Some(" Pending ".to_string()),
            customer_name: Some("  ".to_string()),
            order_type: Some("room_service".to_string()),
        })
        .unwrap();

        assert_eq!(
            filter,
            OrderFilter {
                status: Some("pending".to_string()),
                customer_name: None,
                order_type: Some(OrderType::RoomService),
            }
        );

        let unknown = validate_order_filter(OrderSearchQuery {
            order_type: Some("takeaway".to_string()),
            ..Default::default()
        });
        assert!(matches!(unknown, Err(AppError::BadRequest(_))));
    }
}
