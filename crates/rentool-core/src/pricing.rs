//! # Pricing Engine
//!
//! Turns a resolved tool, a checkout date, and a rental period into a
//! fully priced rental agreement.
//!
//! ## How a Rental Is Priced
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  checkout 07/01/21, 31 days, Ladder ($1.99, weekday+weekend)        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  due date = checkout + 31 days = 08/01/21                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  window 07/02 ..= 08/01 splits into three disjoint buckets:         │
//! │    weekend days   (calendar)      = 10                              │
//! │    holiday days   (calendar)      = 1   (observed July 4th)         │
//! │    weekday days   (the rest)      = 20                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  charge days = buckets whose charge flag is set on the tool type    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  pre-discount charge = daily charge × charge days   (exact cents)   │
//! │  discount amount     = percentage, rounded half up                  │
//! │  final charge        = pre-discount − discount      (exact cents)   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Preconditions (rental days >= 1, discount within 0-100) are enforced
//! by [`validation`](crate::validation) before this module runs and are
//! not re-checked here.

use chrono::{Days, NaiveDate};

use crate::calendar::RentalCalendar;
use crate::error::RentalResult;
use crate::types::{RentalAgreement, ToolInformation};

/// Prices a rental and assembles the agreement record.
///
/// A calendar day inside the window lands in exactly one bucket: observed
/// holidays are counted independently and subtracted along with weekend
/// days, so a holiday observed on a weekday is never also billed as a
/// weekday. Observance shifting keeps holidays off weekends entirely.
pub fn price_rental(
    tool: &ToolInformation,
    calendar: &RentalCalendar,
    checkout_date: NaiveDate,
    rental_days: i32,
    discount_percent: i32,
) -> RentalResult<RentalAgreement> {
    // Due date is checkout date plus rental period
    let due_date = checkout_date + Days::new(rental_days as u64);

    let weekend_days = calendar.weekend_days_between(checkout_date, due_date);
    let holiday_days = calendar.observed_holidays_between(checkout_date, due_date)?;
    let weekday_days = rental_days - weekend_days - holiday_days;

    let billing = &tool.tool_type;
    let mut charge_days = 0;
    if billing.charge_on_weekday {
        charge_days += weekday_days;
    }
    if billing.charge_on_weekend {
        charge_days += weekend_days;
    }
    if billing.charge_on_holiday {
        charge_days += holiday_days;
    }

    let daily_charge = billing.daily_charge();
    // Cents times whole days is already exact, nothing to round yet
    let pre_discount_charge = daily_charge.multiply_days(charge_days as i64);
    let discount_amount = pre_discount_charge.percentage_of(discount_percent);
    // Post-rounding subtraction of two exact cent values, not rounded again
    let final_charge = pre_discount_charge - discount_amount;

    Ok(RentalAgreement {
        tool_code: tool.code.clone(),
        tool_type: billing.type_name.clone(),
        tool_brand: tool.brand.clone(),
        rental_days,
        checkout_date,
        due_date,
        charge_days,
        daily_charge,
        pre_discount_charge,
        discount_percent,
        discount_amount,
        final_charge,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
