//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In binary floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                        │
//! │                                                                     │
//! │  A rental charge like $1.49 × 3 days must come out to exactly       │
//! │  $4.47, and a 25% discount on it to exactly $1.12 — every time.     │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    149 cents × 3 = 447 cents, (447 × 25 + 50) / 100 = 112 cents     │
//! │    Exact decimal arithmetic, bit-identical on every run             │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rentool_core::money::Money;
//!
//! // Create from cents (preferred)
//! let daily = Money::from_cents(199); // $1.99
//!
//! // Arithmetic operations
//! let charge = daily.multiply_days(2);          // $3.98
//! let discount = charge.percentage_of(10);      // $0.40
//! let total = charge - discount;                // $3.58
//!
//! // NEVER do this:
//! // let bad = Money::from_float(1.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for credits and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support so charges serialize with agreements
///
/// ## Where Money is Used
/// ```text
/// ToolType.daily_charge_cents ──► pre-discount charge ──► discount amount
///                                        │
///                                        └──► final charge ──► receipt
///
/// EVERY monetary value in the system flows through this type
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rentool_core::money::Money;
    ///
    /// let charge = Money::from_cents(299); // Represents $2.99
    /// assert_eq!(charge.cents(), 299);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use rentool_core::money::Money;
    ///
    /// let charge = Money::from_major_minor(2, 99); // $2.99
    /// assert_eq!(charge.cents(), 299);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a number of charge days.
    ///
    /// The product of two exact cent values is exact; no rounding happens
    /// here.
    ///
    /// ## Example
    /// ```rust
    /// use rentool_core::money::Money;
    ///
    /// let daily_charge = Money::from_cents(299); // $2.99
    /// let charge = daily_charge.multiply_days(5);
    /// assert_eq!(charge.cents(), 1495); // $14.95
    /// ```
    #[inline]
    pub const fn multiply_days(&self, days: i64) -> Self {
        Money(self.0 * days)
    }

    /// Returns the given percentage of this amount, rounded half up to the
    /// nearest cent.
    ///
    /// ## Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF UP (away from zero at exactly half a cent)          │
    /// │                                                                 │
    /// │  $4.47 × 25% = $1.1175 → rounds to $1.12                        │
    /// │  $1.98 × 47% = $0.9306 → rounds to $0.93                        │
    /// │                                                                 │
    /// │  Implemented with integer math: (cents × percent + 50) / 100    │
    /// │  The +50 provides the rounding (50/100 = half a cent)           │
    /// └─────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use rentool_core::money::Money;
    ///
    /// let charge = Money::from_cents(447); // $4.47
    /// let discount = charge.percentage_of(25);
    /// assert_eq!(discount.cents(), 112); // $1.12
    /// ```
    pub fn percentage_of(&self, percent: i32) -> Money {
        // Use i128 to prevent overflow on large amounts
        let share = (self.0 as i128 * percent as i128 + 50) / 100;
        Money::from_cents(share as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation renders the `$#,##0.00` currency pattern used on
/// receipts: leading dollar sign, comma thousands separators, exactly two
/// decimal places.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.dollars().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "{}${}.{:02}", sign, grouped, self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for day counts).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, days: i32) -> Self {
        Money(self.0 * days as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, days: i64) -> Self {
        Money(self.0 * days)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
