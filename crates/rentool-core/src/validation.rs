//! # Validation Module
//!
//! Input validation for rental requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Validation Layers                            │
//! │                                                                     │
//! │  Layer 1: Terminal interface                                        │
//! │  ├── Line reading and integer parsing                               │
//! │  └── Immediate "invalid value" feedback                             │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE: business rule validation                     │
//! │  ├── Rental period length                                           │
//! │  ├── Discount percentage range                                      │
//! │  └── Checkout date format                                           │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Catalog lookup (tool code resolution)                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rentool_core::validation::{validate_rental_days, validate_discount_percent};
//!
//! validate_rental_days(5).unwrap();
//! validate_discount_percent(25).unwrap();
//! ```

use chrono::NaiveDate;

use crate::error::{RentalError, RentalResult};
use crate::{DATE_FORMAT, MAX_DISCOUNT_PERCENT, MIN_RENTAL_DAYS};

/// Validates the length of a rental period.
///
/// ## Rules
/// - Must be at least MIN_RENTAL_DAYS (1)
///
/// ## Example
/// ```rust
/// use rentool_core::validation::validate_rental_days;
///
/// assert!(validate_rental_days(1).is_ok());
/// assert!(validate_rental_days(0).is_err());
/// assert!(validate_rental_days(-4).is_err());
/// ```
pub fn validate_rental_days(days: i32) -> RentalResult<()> {
    if days < MIN_RENTAL_DAYS {
        return Err(RentalError::InvalidRentalDuration { days });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and MAX_DISCOUNT_PERCENT (100), inclusive
/// - Below zero and above one-hundred fail with distinct errors so the
///   user is told which bound was crossed
pub fn validate_discount_percent(percent: i32) -> RentalResult<()> {
    if percent < 0 {
        return Err(RentalError::DiscountTooLow { percent });
    }

    if percent > MAX_DISCOUNT_PERCENT {
        return Err(RentalError::DiscountTooHigh { percent });
    }

    Ok(())
}

/// Parses a checkout date string in the fixed mm/dd/yy pattern.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rentool_core::validation::parse_checkout_date;
///
/// let date = parse_checkout_date("07/02/20").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2020, 7, 2).unwrap());
/// assert!(parse_checkout_date("010101").is_err());
/// ```
pub fn parse_checkout_date(input: &str) -> RentalResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| RentalError::InvalidDateFormat {
        input: input.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
