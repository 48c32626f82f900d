//! # Error Types
//!
//! Domain-specific error types for rentool-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           Error Types                               │
//! │                                                                     │
//! │  rentool-core errors (this file)                                    │
//! │  └── RentalError      - Everything that can go wrong with a rental  │
//! │                                                                     │
//! │  apps/terminal errors (separate crate)                              │
//! │  └── ConfigError      - Catalog configuration failures              │
//! │                                                                     │
//! │  Flow: RentalError → terminal error stream → user                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error variants (tool code, month/day, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Rental Error
// =============================================================================

/// Everything that can fail while producing a rental agreement.
///
/// Every failure is raised at the point of detection and propagates
/// unchanged to the caller. The computation is deterministic, so retrying
/// with the same inputs fails identically; the terminal layer presents the
/// message and moves on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RentalError {
    /// The user submitted an empty or all-whitespace tool code.
    #[error("You must enter a tool code.")]
    MissingToolCode,

    /// No tool in the catalog matches the submitted code.
    ///
    /// ## When This Occurs
    /// - The code is misspelled
    /// - The catalog config file is absent (zero tools loaded)
    #[error("Provided tool code [{code}] is not valid.")]
    UnknownToolCode { code: String },

    /// The tool exists but names a tool type with no catalog entry.
    ///
    /// ## When This Occurs
    /// - The catalog config lists a tool whose `type_name` has no matching
    ///   entry in `tool_types` (a data error, not a user error)
    #[error("Tool with code [{code}] does not have a valid type.")]
    UnresolvedToolType { code: String },

    /// Rental period shorter than a single day.
    #[error("Rental periods must be at least 1 day. Please try again with a valid rental period.")]
    InvalidRentalDuration { days: i32 },

    /// Checkout date string does not parse as mm/dd/yy.
    #[error("Rental dates must match the format of mm/dd/yy. Please try again with a date that is formatted correctly.")]
    InvalidDateFormat { input: String },

    /// Discount percentage below zero.
    #[error("Discount rate cannot be less than zero percent.")]
    DiscountTooLow { percent: i32 },

    /// Discount percentage above one-hundred.
    #[error("Discount rate cannot be greater than one-hundred percent.")]
    DiscountTooHigh { percent: i32 },

    /// A holiday rule in the calendar cannot be evaluated.
    ///
    /// ## When This Occurs
    /// - The rule's observance kind was not recognized when the catalog
    ///   config was loaded
    /// - The rule's month/day pair forms no real calendar date
    #[error("Invalid holiday [{month}/{day}].")]
    InvalidHolidayRule { month: u32, day: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RentalError.
pub type RentalResult<T> = Result<T, RentalError>;

// =============================================================================
// Unit Tests
// =============================================================================
