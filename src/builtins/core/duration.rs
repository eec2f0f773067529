//! This module implements `Duration` along with it's methods and components.

use core::fmt;

use writeable::Writeable;

use crate::{error::ErrorMessage, parsers::FormattableDuration, TemporalError, TemporalResult};

/// A span of months, days, and seconds with nanosecond precision.
///
/// The three components are independent: a month is not a fixed number of
/// days, and a day is not always 86400 seconds. The nanoseconds are a
/// non-negative fraction added to `seconds`, so the span `-0.25` seconds is
/// stored as `-1` seconds and `750_000_000` nanoseconds.
///
/// Equality compares the stored components, so one day and 86400 seconds
/// are different durations.
///
/// ```rust
/// use bolt_temporal::Duration;
///
/// let duration = Duration::try_new(14, 35, 75, 789_012_587).unwrap();
/// assert_eq!(duration.microseconds_of_second(), 789_012);
/// assert_eq!(duration.to_string(), "P14M35DT75.789012587S");
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    months: i64,
    days: i64,
    seconds: i64,
    nanoseconds: i32,
}

// ==== Public Duration API ====

impl Duration {
    /// Creates a new validated `Duration`.
    pub fn try_new(months: i64, days: i64, seconds: i64, nanoseconds: i32) -> TemporalResult<Self> {
        if !(0..1_000_000_000).contains(&nanoseconds) {
            return Err(TemporalError::range().with_enum(ErrorMessage::NanosecondOutOfRange));
        }
        Ok(Self {
            months,
            days,
            seconds,
            nanoseconds,
        })
    }

    /// Returns the months component.
    #[inline]
    #[must_use]
    pub const fn months(&self) -> i64 {
        self.months
    }

    /// Returns the days component.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Returns the whole seconds component.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the nanoseconds added to `seconds`.
    #[inline]
    #[must_use]
    pub const fn nanoseconds(&self) -> i32 {
        self.nanoseconds
    }

    /// Returns the whole milliseconds of the fractional second.
    #[inline]
    #[must_use]
    pub const fn milliseconds_of_second(&self) -> i32 {
        self.nanoseconds / 1_000_000
    }

    /// Returns the whole microseconds of the fractional second.
    #[inline]
    #[must_use]
    pub const fn microseconds_of_second(&self) -> i32 {
        self.nanoseconds / 1_000
    }

    #[inline]
    #[must_use]
    pub const fn nanoseconds_of_second(&self) -> i32 {
        self.nanoseconds
    }

    /// Returns `true` when every component is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.months == 0 && self.days == 0 && self.seconds == 0 && self.nanoseconds == 0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FormattableDuration {
            months: self.months,
            days: self.days,
            seconds: self.seconds,
            nanosecond: self.nanoseconds as u32,
        }
        .write_to(f)
    }
}
