//! Calendar arithmetic for the renewal rules.
//!
//! Chrono has no `relativedelta`, so year addition and whole-year age are
//! implemented here on top of `NaiveDate`:
//!   • Feb 29 plus N years lands on Feb 28 when the target year is not leap
//!   • age counts only completed years; a Feb 29 birthday is reached on
//!     Feb 28 in non-leap years, the same day `safe_add_years` lands on
//!   • nothing here panics, results saturate at the chrono date range

use chrono::{Datelike, Days, NaiveDate};

/// Grace period after a threshold birthday.
pub const GRACE_PERIOD_DAYS: u64 = 90;

/// Earliest date accepted by the date pickers (1 January 1900).
pub fn earliest_supported_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Add whole years to a date, clamping Feb 29 to Feb 28 in non-leap years.
pub fn safe_add_years(date: NaiveDate, years: u32) -> NaiveDate {
    let target_year = i32::try_from(years)
        .ok()
        .and_then(|years| date.year().checked_add(years));

    let Some(year) = target_year else {
        return NaiveDate::MAX;
    };

    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(NaiveDate::MAX)
}

/// Completed years between `from` and `to`; zero when `to` is before `from`.
pub fn full_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }

    let mut years = u32::try_from(to.year() - from.year()).unwrap_or(0);
    // Birthday not reached yet this year
    if years > 0 && safe_add_years(from, years) > to {
        years -= 1;
    }

    years
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Last day of the grace period that starts on `date`.
pub fn grace_deadline(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(GRACE_PERIOD_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_safe_add_years_regular_date() {
        assert_eq!(safe_add_years(ymd(1990, 6, 15), 20), ymd(2010, 6, 15));
    }

    #[test]
    fn test_safe_add_years_leap_day_to_non_leap_year() {
        assert_eq!(safe_add_years(ymd(2000, 2, 29), 14), ymd(2014, 2, 28));
        assert_eq!(safe_add_years(ymd(1996, 2, 29), 45), ymd(2041, 2, 28));
    }

    #[test]
    fn test_safe_add_years_leap_day_to_leap_year() {
        assert_eq!(safe_add_years(ymd(2000, 2, 29), 20), ymd(2020, 2, 29));
    }

    #[test]
    fn test_safe_add_years_saturates() {
        assert_eq!(safe_add_years(NaiveDate::MAX, 45), NaiveDate::MAX);
    }

    #[test]
    fn test_full_years_between_before_and_after_birthday() {
        let birth = ymd(1990, 6, 15);
        assert_eq!(full_years_between(birth, ymd(2024, 6, 14)), 33);
        assert_eq!(full_years_between(birth, ymd(2024, 6, 15)), 34);
    }

    #[test]
    fn test_full_years_between_leap_birthday() {
        let birth = ymd(2000, 2, 29);
        assert_eq!(full_years_between(birth, ymd(2014, 2, 27)), 13);
        assert_eq!(full_years_between(birth, ymd(2014, 2, 28)), 14);
        assert_eq!(full_years_between(birth, ymd(2014, 3, 1)), 14);
        assert_eq!(full_years_between(birth, ymd(2020, 2, 28)), 19);
        assert_eq!(full_years_between(birth, ymd(2020, 2, 29)), 20);
    }

    #[test]
    fn test_full_years_between_reversed_is_zero() {
        assert_eq!(full_years_between(ymd(2024, 1, 1), ymd(2020, 1, 1)), 0);
    }

    #[test]
    fn test_grace_deadline() {
        assert_eq!(grace_deadline(ymd(1990, 1, 1)), ymd(1990, 4, 1));
        assert_eq!(days_between(ymd(2035, 1, 1), grace_deadline(ymd(2035, 1, 1))), 90);
    }
}
