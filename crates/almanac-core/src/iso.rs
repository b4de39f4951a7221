//! ISO-8601 week-date conversion.
//!
//! [`to_iso`] and [`from_iso`] form an exact inverse pair over calendar dates.
//! Both are computed with plain day arithmetic: the ISO week containing a
//! date is located through the Thursday of that week, and week 1 of an ISO
//! year is the week containing January 4.

use std::fmt;

use jiff::{civil::Date, Span};

use crate::error::{AlmanacError, Result};

/// A date expressed as (ISO year, ISO week, ISO weekday).
///
/// `iso_day` runs Monday=1 through Sunday=7. `iso_year` can differ from the
/// calendar year for dates in the first or last days of January/December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoWeekDate {
    pub iso_year: i16,
    pub iso_week: i8,
    pub iso_day: i8,
}

impl fmt::Display for IsoWeekDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-W{:02}-{}",
            self.iso_year, self.iso_week, self.iso_day
        )
    }
}

/// Moves `date` by `days` (negative goes backwards).
///
/// # Errors
///
/// Returns `AlmanacError::DateArithmetic` if the result is outside the
/// supported date range.
pub fn shift_days(date: Date, days: i64) -> Result<Date> {
    Ok(date.checked_add(Span::new().days(days))?)
}

/// Monday=1..Sunday=7.
fn iso_weekday(date: Date) -> i8 {
    date.weekday().to_monday_one_offset()
}

/// Converts a calendar date to its ISO week date.
///
/// ```rust
/// use almanac_core::iso::to_iso;
/// use jiff::civil::date;
///
/// // 2024-12-30 is the Monday of ISO week 1 of 2025.
/// let iso = to_iso(date(2024, 12, 30)).unwrap();
/// assert_eq!((iso.iso_year, iso.iso_week, iso.iso_day), (2025, 1, 1));
/// ```
///
/// # Errors
///
/// Returns `AlmanacError::DateArithmetic` when the Thursday of the date's
/// week falls outside the supported range (only possible at the extreme
/// ends of it).
pub fn to_iso(date: Date) -> Result<IsoWeekDate> {
    let iso_day = iso_weekday(date);
    let thursday = shift_days(date, i64::from(4 - iso_day))?;
    let iso_week = (thursday.day_of_year() - 1) / 7 + 1;

    Ok(IsoWeekDate {
        iso_year: thursday.year(),
        // day_of_year <= 366, so the week is at most 53
        iso_week: iso_week as i8,
        iso_day,
    })
}

/// Number of ISO weeks (52 or 53) in `iso_year`.
///
/// A year has 53 weeks when January 1 is a Thursday, or when it is a leap
/// year whose January 1 is a Wednesday.
///
/// # Errors
///
/// Returns `AlmanacError::DateArithmetic` if `iso_year` is not representable.
pub fn weeks_in_iso_year(iso_year: i16) -> Result<i8> {
    let jan1 = Date::new(iso_year, 1, 1)?;
    let long_year = match iso_weekday(jan1) {
        4 => true,
        3 => jan1.in_leap_year(),
        _ => false,
    };
    Ok(if long_year { 53 } else { 52 })
}

/// Converts an ISO week date back to the calendar date it names.
///
/// ```rust
/// use almanac_core::iso::from_iso;
/// use jiff::civil::date;
///
/// assert_eq!(from_iso(2026, 53, 7).unwrap(), date(2027, 1, 3));
/// assert!(from_iso(2025, 53, 1).is_err());
/// ```
///
/// # Errors
///
/// Returns `AlmanacError::InvalidIsoDay` for a weekday outside 1..=7,
/// `AlmanacError::InvalidIsoWeek` for a week the ISO year does not have, and
/// `AlmanacError::DateArithmetic` when the result is not representable.
pub fn from_iso(iso_year: i16, iso_week: i8, iso_day: i8) -> Result<Date> {
    if !(1..=7).contains(&iso_day) {
        return Err(AlmanacError::InvalidIsoDay { iso_day });
    }
    let max_week = weeks_in_iso_year(iso_year)?;
    if !(1..=max_week).contains(&iso_week) {
        return Err(AlmanacError::InvalidIsoWeek {
            iso_year,
            iso_week,
            max_week,
        });
    }

    let jan4 = Date::new(iso_year, 1, 4)?;
    let week1_monday = shift_days(jan4, -i64::from(iso_weekday(jan4) - 1))?;
    let offset = i64::from(iso_week - 1) * 7 + i64::from(iso_day - 1);
    shift_days(week1_monday, offset)
}

/// Returns the Monday that starts the ISO week containing `date`.
///
/// # Errors
///
/// Propagates `AlmanacError::DateArithmetic` from the underlying conversion.
pub fn week_monday(date: Date) -> Result<Date> {
    let iso = to_iso(date)?;
    from_iso(iso.iso_year, iso.iso_week, 1)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn iso(year: i16, month: i8, day: i8) -> (i16, i8, i8) {
        let v = to_iso(date(year, month, day)).unwrap();
        (v.iso_year, v.iso_week, v.iso_day)
    }

    #[test]
    fn test_to_iso_known_dates() {
        assert_eq!(iso(2025, 1, 1), (2025, 1, 3));
        assert_eq!(iso(2025, 6, 15), (2025, 24, 7));
        assert_eq!(iso(2026, 1, 1), (2026, 1, 4));
        assert_eq!(iso(2027, 1, 7), (2027, 1, 4));
    }

    #[test]
    fn test_to_iso_december_dates_in_next_iso_year() {
        assert_eq!(iso(2024, 12, 30), (2025, 1, 1));
        assert_eq!(iso(2025, 12, 31), (2026, 1, 3));
    }

    #[test]
    fn test_to_iso_january_dates_in_previous_iso_year() {
        assert_eq!(iso(2021, 1, 3), (2020, 53, 7));
        assert_eq!(iso(2027, 1, 1), (2026, 53, 5));
        assert_eq!(iso(2023, 1, 1), (2022, 52, 7));
    }

    #[test]
    fn test_weeks_in_iso_year() {
        assert_eq!(weeks_in_iso_year(2015).unwrap(), 53);
        assert_eq!(weeks_in_iso_year(2020).unwrap(), 53);
        assert_eq!(weeks_in_iso_year(2026).unwrap(), 53);
        assert_eq!(weeks_in_iso_year(2024).unwrap(), 52);
        assert_eq!(weeks_in_iso_year(2025).unwrap(), 52);
        assert_eq!(weeks_in_iso_year(2027).unwrap(), 52);
    }

    #[test]
    fn test_from_iso_known_dates() {
        assert_eq!(from_iso(2025, 1, 1).unwrap(), date(2024, 12, 30));
        assert_eq!(from_iso(2025, 1, 3).unwrap(), date(2025, 1, 1));
        assert_eq!(from_iso(2020, 53, 7).unwrap(), date(2021, 1, 3));
    }

    #[test]
    fn test_from_iso_rejects_missing_week_53() {
        let err = from_iso(2025, 53, 1).unwrap_err();
        assert!(matches!(
            err,
            AlmanacError::InvalidIsoWeek {
                iso_year: 2025,
                iso_week: 53,
                max_week: 52
            }
        ));
    }

    #[test]
    fn test_from_iso_rejects_out_of_range_input() {
        assert!(matches!(
            from_iso(2025, 0, 1),
            Err(AlmanacError::InvalidIsoWeek { .. })
        ));
        assert!(matches!(
            from_iso(2025, 1, 0),
            Err(AlmanacError::InvalidIsoDay { iso_day: 0 })
        ));
        assert!(matches!(
            from_iso(2025, 1, 8),
            Err(AlmanacError::InvalidIsoDay { iso_day: 8 })
        ));
    }

    #[test]
    fn test_week_monday() {
        assert_eq!(week_monday(date(2025, 1, 1)).unwrap(), date(2024, 12, 30));
        assert_eq!(week_monday(date(2025, 6, 16)).unwrap(), date(2025, 6, 16));
        assert_eq!(week_monday(date(2025, 6, 15)).unwrap(), date(2025, 6, 9));
    }

    #[test]
    fn test_display_iso_week_date() {
        let v = to_iso(date(2025, 1, 1)).unwrap();
        assert_eq!(v.to_string(), "2025-W01-3");
    }

    #[test]
    fn test_shift_days_out_of_range() {
        assert!(matches!(
            shift_days(date(9999, 12, 31), 1),
            Err(AlmanacError::DateArithmetic { .. })
        ));
    }
}
