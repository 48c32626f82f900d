//! # Calendar Engine
//!
//! Weekend and observed-holiday counting for rental windows.
//!
//! Every count runs over the same window convention: the checkout day
//! itself is never counted, the due date is. A rental that checks out on
//! Saturday is not charged for that Saturday; one that comes due on
//! Saturday is.

use chrono::{Datelike, NaiveDate, Weekday};
use std::ops::RangeInclusive;

use crate::error::{RentalError, RentalResult};
use crate::types::{HolidayObservance, HolidayRule};

/// Calendar for counting chargeable and non-chargeable days.
///
/// Holds the holiday rules loaded from the catalog config. Rules are
/// abstract over the year; they are expanded into concrete observed dates
/// for every year a rental window touches.
#[derive(Debug, Clone, Default)]
pub struct RentalCalendar {
    holidays: Vec<HolidayRule>,
}

impl RentalCalendar {
    /// Creates a calendar from a list of holiday rules.
    pub fn new(holidays: Vec<HolidayRule>) -> Self {
        Self { holidays }
    }

    /// Counts the weekend days strictly after `start`, up to and including
    /// `end`.
    ///
    /// Returns 0 whenever `end <= start`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use rentool_core::calendar::RentalCalendar;
    ///
    /// let calendar = RentalCalendar::default();
    /// // Thursday 2021-07-01 through Tuesday 2021-07-06 spans one weekend
    /// let start = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2021, 7, 6).unwrap();
    /// assert_eq!(calendar.weekend_days_between(start, end), 2);
    /// ```
    pub fn weekend_days_between(&self, start: NaiveDate, end: NaiveDate) -> i32 {
        let mut weekend_days = 0;
        let mut day = start;
        while day < end {
            let Some(next) = day.succ_opt() else { break };
            day = next;
            if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
                weekend_days += 1;
            }
        }
        weekend_days
    }

    /// Counts the observed holidays strictly after `start`, up to and
    /// including `end`.
    ///
    /// Every rule is expanded for every year the window touches, and each
    /// observed date is counted when it falls inside the window. Fails
    /// with [`RentalError::InvalidHolidayRule`] if any rule cannot be
    /// evaluated.
    pub fn observed_holidays_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RentalResult<i32> {
        // No rules configured means nothing can match, skip the expansion
        if self.holidays.is_empty() {
            return Ok(0);
        }

        let mut total = 0;
        for rule in &self.holidays {
            for year in Self::years_between(start, end) {
                let observed = Self::observed_date(rule, year)?;
                if start < observed && observed <= end {
                    total += 1;
                }
            }
        }
        Ok(total)
    }

    /// The ascending, contiguous range of calendar years touched by the
    /// two dates, inclusive of both endpoints' years.
    pub fn years_between(start: NaiveDate, end: NaiveDate) -> RangeInclusive<i32> {
        start.year()..=end.year()
    }

    /// Computes the date a holiday rule is observed on in the given year.
    ///
    /// - `ClosestWeekday`: a nominal date on Saturday is observed the
    ///   Friday before; on Sunday, the Monday after; weekdays unchanged.
    /// - `NextMonday`: observed the first Monday on or after the nominal
    ///   date.
    pub fn observed_date(rule: &HolidayRule, year: i32) -> RentalResult<NaiveDate> {
        let invalid = RentalError::InvalidHolidayRule {
            month: rule.month,
            day: rule.day,
        };
        let base = NaiveDate::from_ymd_opt(year, rule.month, rule.day).ok_or(invalid.clone())?;

        match rule.observance {
            HolidayObservance::ClosestWeekday => Ok(match base.weekday() {
                Weekday::Sat => base.pred_opt().unwrap_or(base),
                Weekday::Sun => base.succ_opt().unwrap_or(base),
                _ => base,
            }),
            HolidayObservance::NextMonday => {
                let mut date = base;
                while date.weekday() != Weekday::Mon {
                    let Some(next) = date.succ_opt() else { break };
                    date = next;
                }
                Ok(date)
            }
            HolidayObservance::Unknown => Err(invalid),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn standard_rules() -> Vec<HolidayRule> {
        vec![
            HolidayRule {
                observance: HolidayObservance::NextMonday,
                month: 9,
                day: 1,
            },
            HolidayRule {
                observance: HolidayObservance::ClosestWeekday,
                month: 7,
                day: 4,
            },
        ]
    }

    // -------------------------------------------------------------------------
    // Weekend counting
    // -------------------------------------------------------------------------

    #[test]
    fn test_no_weekend_days_between_weekdays_in_same_week() {
        let calendar = RentalCalendar::default();
        // Tuesday through Thursday
        assert_eq!(
            calendar.weekend_days_between(date(2021, 7, 6), date(2021, 7, 8)),
            0
        );
    }

    #[test]
    fn test_weekend_days_between_weekdays_in_different_weeks() {
        let calendar = RentalCalendar::default();
        // Thursday through the following Tuesday
        assert_eq!(
            calendar.weekend_days_between(date(2021, 7, 1), date(2021, 7, 6)),
            2
        );
    }

    #[test]
    fn test_weekend_days_between_weekend_days_in_same_week() {
        let calendar = RentalCalendar::default();
        // Saturday through Sunday: only Sunday is counted
        assert_eq!(
            calendar.weekend_days_between(date(2021, 7, 3), date(2021, 7, 4)),
            1
        );
    }

    #[test]
    fn test_start_date_is_never_counted() {
        let calendar = RentalCalendar::default();
        // Sunday through the following Friday crosses no further weekend
        assert_eq!(
            calendar.weekend_days_between(date(2021, 7, 4), date(2021, 7, 9)),
            0
        );
    }

    #[test]
    fn test_weekend_start_to_one_week_later() {
        let calendar = RentalCalendar::default();
        // Saturday through the following Saturday: Sunday + that Saturday
        assert_eq!(
            calendar.weekend_days_between(date(2021, 7, 3), date(2021, 7, 10)),
            2
        );
    }

    #[test]
    fn test_empty_and_inverted_ranges_count_zero() {
        let calendar = RentalCalendar::default();
        assert_eq!(
            calendar.weekend_days_between(date(2021, 7, 3), date(2021, 7, 3)),
            0
        );
        assert_eq!(
            calendar.weekend_days_between(date(2021, 7, 10), date(2021, 7, 3)),
            0
        );
    }

    // -------------------------------------------------------------------------
    // Observed-date computation
    // -------------------------------------------------------------------------

    #[test]
    fn test_next_monday_holiday_already_on_monday() {
        let rule = HolidayRule {
            observance: HolidayObservance::NextMonday,
            month: 9,
            day: 1,
        };
        // September 1st 2014 is a Monday and stays put
        let observed = RentalCalendar::observed_date(&rule, 2014).unwrap();
        assert_eq!(observed, date(2014, 9, 1));
        assert_eq!(observed.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_next_monday_holiday_on_a_weekday() {
        let rule = HolidayRule {
            observance: HolidayObservance::NextMonday,
            month: 9,
            day: 1,
        };
        // September 1st 2021 is a Wednesday, observed the following Monday
        let observed = RentalCalendar::observed_date(&rule, 2021).unwrap();
        assert_eq!(observed, date(2021, 9, 6));
        assert_eq!(observed.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_next_monday_holiday_on_a_weekend() {
        let rule = HolidayRule {
            observance: HolidayObservance::NextMonday,
            month: 9,
            day: 1,
        };
        // September 1st 2019 is a Sunday, observed the next day
        let observed = RentalCalendar::observed_date(&rule, 2019).unwrap();
        assert_eq!(observed, date(2019, 9, 2));
        assert_eq!(observed.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_closest_weekday_holiday_on_a_weekday() {
        let rule = HolidayRule {
            observance: HolidayObservance::ClosestWeekday,
            month: 7,
            day: 4,
        };
        // July 4th 2019 is a Thursday and stays put
        assert_eq!(
            RentalCalendar::observed_date(&rule, 2019).unwrap(),
            date(2019, 7, 4)
        );
    }

    #[test]
    fn test_closest_weekday_holiday_on_a_saturday() {
        let rule = HolidayRule {
            observance: HolidayObservance::ClosestWeekday,
            month: 7,
            day: 4,
        };
        // July 4th 2020 is a Saturday, observed the Friday before
        let observed = RentalCalendar::observed_date(&rule, 2020).unwrap();
        assert_eq!(observed, date(2020, 7, 3));
        assert_eq!(observed.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_closest_weekday_holiday_on_a_sunday() {
        let rule = HolidayRule {
            observance: HolidayObservance::ClosestWeekday,
            month: 7,
            day: 4,
        };
        // July 4th 2021 is a Sunday, observed the Monday after
        let observed = RentalCalendar::observed_date(&rule, 2021).unwrap();
        assert_eq!(observed, date(2021, 7, 5));
        assert_eq!(observed.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_unknown_observance_fails() {
        let rule = HolidayRule {
            observance: HolidayObservance::Unknown,
            month: 3,
            day: 17,
        };
        assert_eq!(
            RentalCalendar::observed_date(&rule, 2021),
            Err(RentalError::InvalidHolidayRule { month: 3, day: 17 })
        );
    }

    #[test]
    fn test_impossible_month_day_fails() {
        let rule = HolidayRule {
            observance: HolidayObservance::ClosestWeekday,
            month: 2,
            day: 30,
        };
        assert_eq!(
            RentalCalendar::observed_date(&rule, 2021),
            Err(RentalError::InvalidHolidayRule { month: 2, day: 30 })
        );
    }

    // -------------------------------------------------------------------------
    // Holiday counting
    // -------------------------------------------------------------------------

    #[test]
    fn test_no_rules_counts_zero() {
        let calendar = RentalCalendar::default();
        assert_eq!(
            calendar
                .observed_holidays_between(date(2021, 1, 1), date(2021, 12, 31))
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_full_year_counts_both_holidays() {
        let calendar = RentalCalendar::new(standard_rules());
        assert_eq!(
            calendar
                .observed_holidays_between(date(2021, 1, 1), date(2021, 12, 31))
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_window_ending_just_before_labor_day() {
        // September 1st 2015 is a Tuesday, observed Monday September 7th
        let calendar = RentalCalendar::new(standard_rules());
        assert_eq!(
            calendar
                .observed_holidays_between(date(2015, 9, 1), date(2015, 9, 6))
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_window_ending_on_labor_day() {
        let calendar = RentalCalendar::new(standard_rules());
        assert_eq!(
            calendar
                .observed_holidays_between(date(2015, 9, 3), date(2015, 9, 7))
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_window_ending_day_after_labor_day() {
        let calendar = RentalCalendar::new(standard_rules());
        assert_eq!(
            calendar
                .observed_holidays_between(date(2015, 9, 3), date(2015, 9, 8))
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_window_starting_on_labor_day() {
        // Checkout on the observed holiday itself: start is exclusive
        let calendar = RentalCalendar::new(standard_rules());
        assert_eq!(
            calendar
                .observed_holidays_between(date(2015, 9, 7), date(2015, 9, 10))
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_window_spanning_two_years() {
        // 2020-07-01 .. 2021-07-06 contains observed July 4th 2020 (Friday
        // the 3rd), Labor Day 2020 (September 7th), and observed July 4th
        // 2021 (Monday the 5th)
        let calendar = RentalCalendar::new(standard_rules());
        assert_eq!(
            calendar
                .observed_holidays_between(date(2020, 7, 1), date(2021, 7, 6))
                .unwrap(),
            3
        );
    }

    #[test]
    fn test_unknown_rule_fails_the_count() {
        let calendar = RentalCalendar::new(vec![HolidayRule {
            observance: HolidayObservance::Unknown,
            month: 1,
            day: 1,
        }]);
        assert!(calendar
            .observed_holidays_between(date(2021, 1, 1), date(2021, 12, 31))
            .is_err());
    }

    // -------------------------------------------------------------------------
    // Year expansion
    // -------------------------------------------------------------------------

    #[test]
    fn test_years_between_single_year() {
        let years: Vec<i32> =
            RentalCalendar::years_between(date(2021, 3, 1), date(2021, 11, 30)).collect();
        assert_eq!(years, vec![2021]);
    }

    #[test]
    fn test_years_between_multiple_years() {
        let years: Vec<i32> =
            RentalCalendar::years_between(date(2019, 12, 15), date(2022, 1, 10)).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2022]);
    }
}
