//! Proleptic Gregorian calendar calculations.
//!
//! The conversions between epoch days and a year, month, day triple are
//! the Euclidean affine forms of the civil calendar algorithms. Working on
//! 400 year eras keeps every intermediate value non-negative, so the
//! functions are valid for any year that fits in an `i64` day count
//! without a shift constant.

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// The day of the computational calendar (March based) that maps to 1970-01-01.
const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;
const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

/// Returns the amount of days since the Unix epoch for the given
/// Gregorian year, month and day.
///
/// `month` must be in 1..=12. `day` is not checked against the month.
pub const fn epoch_days_from_gregorian_date(year: i64, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let computational_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * computational_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_A_400Y_CYCLE + day_of_era - EPOCH_COMPUTATIONAL_RATA_DIE
}

/// Returns the Gregorian year, month and day for a count of days since
/// the Unix epoch.
pub const fn ymd_from_epoch_days(epoch_days: i64) -> (i64, u8, u8) {
    let rata_die = epoch_days + EPOCH_COMPUTATIONAL_RATA_DIE;
    let era = rata_die.div_euclid(DAYS_IN_A_400Y_CYCLE);
    let day_of_era = rata_die - era * DAYS_IN_A_400Y_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let computational_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * computational_month + 2) / 5 + 1;
    let month = if computational_month < 10 {
        computational_month + 3
    } else {
        computational_month - 9
    };
    let year = year_of_era + era * 400 + (month <= 2) as i64;
    (year, month as u8, day as u8)
}

#[inline]
pub const fn is_leap(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the number of days in `month` for `year`.
pub const fn iso_days_in_month(year: i64, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// The day of the week for an epoch day, where Sunday is 0.
#[inline]
pub const fn day_of_week_for_epoch_days(epoch_days: i64) -> u8 {
    // 1970-01-01 was a Thursday
    (epoch_days + 4).rem_euclid(7) as u8
}

/// The epoch days of January 1st of `year`.
#[inline]
pub const fn epoch_days_for_year(year: i64) -> i64 {
    epoch_days_from_gregorian_date(year, 1, 1)
}
