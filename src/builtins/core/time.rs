//! This module implements `LocalTime` and any directly related algorithms.

use core::fmt;

use writeable::Writeable;

use crate::{
    iso::IsoTime,
    parsers::{FormattableTime, Precision},
    TemporalResult,
};

/// A wall-clock time of day with nanosecond precision and no date or time zone.
///
/// ```rust
/// use bolt_temporal::LocalTime;
///
/// let time = LocalTime::try_new(12, 34, 56, 789_012_587).unwrap();
/// assert_eq!(time.millisecond(), 789);
/// assert_eq!(time.to_string(), "12:34:56.789012587");
/// assert!(LocalTime::try_new(24, 0, 0, 0).is_err());
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    pub(crate) iso: IsoTime,
}

// ==== Private API ====

impl LocalTime {
    #[inline]
    pub(crate) const fn new_unchecked(iso: IsoTime) -> Self {
        Self { iso }
    }

    pub(crate) fn to_formattable(self) -> FormattableTime {
        FormattableTime {
            hour: self.iso.hour,
            minute: self.iso.minute,
            second: self.iso.second,
            nanosecond: self.iso.nanosecond,
            precision: Precision::Auto,
        }
    }
}

// ==== Public API ====

impl LocalTime {
    /// Creates a new validated `LocalTime`.
    #[inline]
    pub fn try_new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> TemporalResult<Self> {
        IsoTime::new(hour, minute, second, nanosecond).map(Self::new_unchecked)
    }

    /// Creates a `LocalTime` from the nanoseconds elapsed since midnight.
    #[inline]
    pub fn from_nanosecond_of_day(nanos: i64) -> TemporalResult<Self> {
        IsoTime::from_nanosecond_of_day(nanos).map(Self::new_unchecked)
    }

    /// Returns the nanoseconds elapsed since midnight.
    #[inline]
    #[must_use]
    pub fn to_nanosecond_of_day(&self) -> i64 {
        self.iso.to_nanosecond_of_day()
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.hour
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.minute
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.second
    }

    /// Returns the whole milliseconds of the second.
    #[inline]
    #[must_use]
    pub const fn millisecond(&self) -> u32 {
        self.iso.nanosecond / 1_000_000
    }

    /// Returns the whole microseconds of the second.
    #[inline]
    #[must_use]
    pub const fn microsecond(&self) -> u32 {
        self.iso.nanosecond / 1_000
    }

    /// Returns the nanoseconds of the second.
    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.iso.nanosecond
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_formattable().write_to(f)
    }
}
