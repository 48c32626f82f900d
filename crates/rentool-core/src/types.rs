//! # Domain Types
//!
//! Core domain types used throughout Rentool.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           Domain Types                              │
//! │                                                                     │
//! │  ┌─────────────────┐  ┌──────────────────┐  ┌──────────────────┐   │
//! │  │      Tool       │  │     ToolType     │  │   HolidayRule    │   │
//! │  │  ─────────────  │  │  ──────────────  │  │  ──────────────  │   │
//! │  │  code (id)      │  │  type_name (id)  │  │  observance      │   │
//! │  │  type_name (FK) │  │  daily_charge    │  │  month           │   │
//! │  │  brand          │  │  3 charge flags  │  │  day             │   │
//! │  └─────────────────┘  └──────────────────┘  └──────────────────┘   │
//! │                                                                     │
//! │  ┌──────────────────────┐  ┌──────────────────────────────────┐    │
//! │  │   ToolInformation    │  │         RentalAgreement          │    │
//! │  │  ──────────────────  │  │  ──────────────────────────────  │    │
//! │  │  code, brand         │  │  tool + dates + day counts +     │    │
//! │  │  tool_type (joined)  │  │  charges, fully priced           │    │
//! │  └──────────────────────┘  └──────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog types (Tool, ToolType, HolidayRule) are loaded once at
//! startup and never mutated. ToolInformation and RentalAgreement are
//! created fresh per rental request and owned by the calling flow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tool
// =============================================================================

/// A tool available for customers to rent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique identifying code for the tool (matched case-insensitively).
    pub code: String,

    /// Type of the tool, matches a unique tool type.
    pub type_name: String,

    /// The brand of the tool.
    pub brand: String,
}

// =============================================================================
// Tool Type
// =============================================================================

/// Billing attributes shared by every tool of a given type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolType {
    /// Unique type identifier (matched case-insensitively).
    pub type_name: String,

    /// Rate to charge per day, in cents (smallest currency unit).
    pub daily_charge_cents: i64,

    /// Whether customers are charged for weekdays in the rental window.
    pub charge_on_weekday: bool,

    /// Whether customers are charged for weekend days in the rental window.
    pub charge_on_weekend: bool,

    /// Whether customers are charged for observed holidays in the window.
    pub charge_on_holiday: bool,
}

impl ToolType {
    /// Returns the daily charge as a Money type.
    #[inline]
    pub fn daily_charge(&self) -> Money {
        Money::from_cents(self.daily_charge_cents)
    }
}

// =============================================================================
// Holiday Rule
// =============================================================================

/// How a holiday's nominal date shifts to the date it is observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HolidayObservance {
    /// Observed on the closest weekday: Saturday shifts back to Friday,
    /// Sunday shifts forward to Monday, weekdays are unchanged.
    ClosestWeekday,

    /// Observed on the next Monday on or after the nominal date.
    NextMonday,

    /// Catch-all for observance kinds this version does not understand.
    /// Loading succeeds; evaluating the rule fails with
    /// [`RentalError::InvalidHolidayRule`](crate::error::RentalError).
    #[serde(other)]
    Unknown,
}

/// A holiday, abstract over the calendar year.
///
/// A rule only becomes a concrete date once combined with a year; the
/// calendar engine expands rules per year on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRule {
    /// How the observed date is derived from the nominal date.
    pub observance: HolidayObservance,

    /// Month value of the holiday (1-12).
    pub month: u32,

    /// Day value of the holiday (1-31).
    pub day: u32,
}

// =============================================================================
// Tool Information
// =============================================================================

/// A tool joined with its billing attributes.
///
/// Created per lookup by the catalog, never mutated, discarded after the
/// rental agreement is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInformation {
    /// Unique tool identifier code.
    pub code: String,

    /// Brand of the tool.
    pub brand: String,

    /// Billing attributes for this tool.
    pub tool_type: ToolType,
}

// =============================================================================
// Rental Agreement
// =============================================================================

/// A fully priced rental agreement, produced once per request.
///
/// ## Invariants
/// - `due_date = checkout_date + rental_days`
/// - `0 <= charge_days <= rental_days`
/// - `final_charge = pre_discount_charge - discount_amount` (post-rounding
///   subtraction, not rounded again)
///
/// Dates and charges are kept as typed values; rendering them as
/// `mm/dd/yy` and `$#,##0.00` text happens at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    /// Tool code as entered by the user.
    pub tool_code: String,

    /// Tool type name from the resolved tool information.
    pub tool_type: String,

    /// Tool brand from the resolved tool information.
    pub tool_brand: String,

    /// Amount of days of rental as entered by the user.
    pub rental_days: i32,

    /// The date the rental begins. Excluded from day counting, but the
    /// anchor for the due date.
    pub checkout_date: NaiveDate,

    /// Checkout date plus rental days; last day of the rental window.
    pub due_date: NaiveDate,

    /// Count of chargeable days from the day after checkout through and
    /// including the due date.
    pub charge_days: i32,

    /// Charge amount per day from the tool type.
    pub daily_charge: Money,

    /// Charge before the discount is applied.
    pub pre_discount_charge: Money,

    /// Discount percent as entered by the user.
    pub discount_percent: i32,

    /// Discount amount, rounded half up to the nearest cent.
    pub discount_amount: Money,

    /// Final charge amount.
    pub final_charge: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_type_daily_charge() {
        let ladder = ToolType {
            type_name: "Ladder".to_string(),
            daily_charge_cents: 199,
            charge_on_weekday: true,
            charge_on_weekend: true,
            charge_on_holiday: false,
        };
        assert_eq!(ladder.daily_charge(), Money::from_cents(199));
    }

    #[test]
    fn test_observance_deserializes_kebab_case() {
        let observance: HolidayObservance =
            serde_json::from_str("\"closest-weekday\"").unwrap();
        assert_eq!(observance, HolidayObservance::ClosestWeekday);

        let observance: HolidayObservance = serde_json::from_str("\"next-monday\"").unwrap();
        assert_eq!(observance, HolidayObservance::NextMonday);
    }

    #[test]
    fn test_unrecognized_observance_loads_as_unknown() {
        let observance: HolidayObservance =
            serde_json::from_str("\"every-other-thursday\"").unwrap();
        assert_eq!(observance, HolidayObservance::Unknown);
    }

    #[test]
    fn test_holiday_rule_deserializes() {
        let rule: HolidayRule = serde_json::from_str(
            r#"{ "observance": "next-monday", "month": 9, "day": 1 }"#,
        )
        .unwrap();
        assert_eq!(rule.observance, HolidayObservance::NextMonday);
        assert_eq!(rule.month, 9);
        assert_eq!(rule.day, 1);
    }
}
