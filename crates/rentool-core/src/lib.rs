//! # rentool-core: Pure Business Logic for Rentool
//!
//! This crate is the **heart** of Rentool. It contains all rental pricing
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Rentool Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                  apps/terminal (I/O shell)                  │    │
//! │  │   catalog config ──► four prompts ──► receipt / error       │    │
//! │  └─────────────────────────────┬───────────────────────────────┘    │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐    │
//! │  │              ★ rentool-core (THIS CRATE) ★                  │    │
//! │  │                                                             │    │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌────────────────┐  │    │
//! │  │  │ catalog  │ │ calendar │ │ pricing  │ │   validation   │  │    │
//! │  │  │  lookup  │ │ weekends │ │  charge  │ │ days, percent, │  │    │
//! │  │  │  + join  │ │ holidays │ │  + money │ │  date parsing  │  │    │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └────────────────┘  │    │
//! │  │                                                             │    │
//! │  │  NO I/O • NO CLOCK • NO FILE SYSTEM • PURE FUNCTIONS        │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Tool, ToolType, HolidayRule, RentalAgreement)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Rental input validation
//! - [`catalog`] - Tool code resolution
//! - [`calendar`] - Weekend and observed-holiday counting
//! - [`pricing`] - Charge-day classification and charge arithmetic
//! - [`desk`] - The composed entry point for one rental request
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Terminal, file system, and clock access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rentool_core::calendar::RentalCalendar;
//! use rentool_core::catalog::ToolCatalog;
//! use rentool_core::desk::RentalDesk;
//! use rentool_core::types::{HolidayObservance, HolidayRule, Tool, ToolType};
//!
//! let catalog = ToolCatalog::new(
//!     vec![Tool {
//!         code: "LADW".to_string(),
//!         type_name: "Ladder".to_string(),
//!         brand: "Werner".to_string(),
//!     }],
//!     vec![ToolType {
//!         type_name: "Ladder".to_string(),
//!         daily_charge_cents: 199,
//!         charge_on_weekday: true,
//!         charge_on_weekend: true,
//!         charge_on_holiday: false,
//!     }],
//! );
//! let calendar = RentalCalendar::new(vec![HolidayRule {
//!     observance: HolidayObservance::ClosestWeekday,
//!     month: 7,
//!     day: 4,
//! }]);
//!
//! let desk = RentalDesk::new(catalog, calendar);
//! let agreement = desk.checkout("LADW", "07/02/20", 3, 10).unwrap();
//!
//! // July 4th 2020 is observed Friday the 3rd and ladders skip holidays,
//! // so only the two weekend days are charged
//! assert_eq!(agreement.charge_days, 2);
//! assert_eq!(agreement.final_charge.cents(), 358);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod catalog;
pub mod desk;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rentool_core::Money` instead of
// `use rentool_core::money::Money`

pub use calendar::RentalCalendar;
pub use catalog::ToolCatalog;
pub use desk::RentalDesk;
pub use error::{RentalError, RentalResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The fixed date pattern for checkout dates, mm/dd/yy with a two-digit
/// year, used for both parsing input and rendering receipts.
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Shortest rental period the desk accepts.
///
/// ## Business Reason
/// A rental is billed per day; a zero-day rental has no window to bill.
pub const MIN_RENTAL_DAYS: i32 = 1;

/// Largest discount percentage the desk accepts.
///
/// ## Business Reason
/// A discount above 100% would turn a charge into a payout.
pub const MAX_DISCOUNT_PERCENT: i32 = 100;
