//! # Rental Desk
//!
//! The single entry point for a rental request: validation, catalog
//! lookup, and pricing composed in order, returning the finished
//! agreement or the first failure encountered.

use crate::calendar::RentalCalendar;
use crate::catalog::ToolCatalog;
use crate::error::RentalResult;
use crate::types::RentalAgreement;
use crate::{pricing, validation};

/// Owns the read-only catalog and calendar and serves rental requests.
///
/// Both are loaded once at startup and passed in by value; the desk
/// never mutates them, so one desk can serve any number of sequential
/// requests and always answer identically for identical inputs.
///
/// ## Example
/// ```rust
/// use rentool_core::calendar::RentalCalendar;
/// use rentool_core::catalog::ToolCatalog;
/// use rentool_core::desk::RentalDesk;
///
/// let desk = RentalDesk::new(ToolCatalog::default(), RentalCalendar::default());
/// // An empty catalog rejects every code as unknown
/// assert!(desk.checkout("LADW", "07/02/20", 3, 10).is_err());
/// ```
pub struct RentalDesk {
    catalog: ToolCatalog,
    calendar: RentalCalendar,
}

impl RentalDesk {
    /// Creates a desk over the loaded catalog and calendar.
    pub fn new(catalog: ToolCatalog, calendar: RentalCalendar) -> Self {
        Self { catalog, calendar }
    }

    /// Serves one rental request.
    ///
    /// Runs validation, date parsing, catalog lookup, and pricing in
    /// order; the first failure propagates unchanged. No partial state
    /// is observable on failure.
    pub fn checkout(
        &self,
        tool_code: &str,
        checkout_date: &str,
        rental_days: i32,
        discount_percent: i32,
    ) -> RentalResult<RentalAgreement> {
        validation::validate_rental_days(rental_days)?;
        validation::validate_discount_percent(discount_percent)?;
        let checkout_date = validation::parse_checkout_date(checkout_date)?;
        let tool = self.catalog.resolve(tool_code)?;

        pricing::price_rental(
            &tool,
            &self.calendar,
            checkout_date,
            rental_days,
            discount_percent,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
