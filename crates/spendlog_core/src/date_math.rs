//! Calendar helpers for month-granular bookkeeping.
//!
//! Installment progress and dashboard windows only care about calendar
//! months, so these helpers work on year/month pairs directly instead of
//! going through jiff's `Span` rounding.

use jiff::civil::Date;

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a month without creating a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Whole calendar months from `start` to `as_of`, ignoring the day of month.
///
/// Never negative: an `as_of` before `start` yields 0.
#[inline]
pub fn months_elapsed(start: Date, as_of: Date) -> u32 {
    let months = (i32::from(as_of.year()) - i32::from(start.year())) * 12
        + (i32::from(as_of.month()) - i32::from(start.month()));
    months.max(0) as u32
}

/// First day of the month containing `d`.
#[inline]
pub fn first_of_month(d: Date) -> Date {
    jiff::civil::date(d.year(), d.month(), 1)
}

/// Last day of the month containing `d`.
#[inline]
pub fn last_of_month(d: Date) -> Date {
    jiff::civil::date(d.year(), d.month(), days_in_month(d.year(), d.month()))
}
