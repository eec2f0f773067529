//! This module implements `LocalDateTime` and any directly related algorithms.

use core::fmt;

use writeable::Writeable;

use crate::{
    builtins::core::{Date, LocalTime},
    iso::{IsoDate, IsoDateTime, IsoTime},
    parsers::{FormattableDate, FormattableIxdtf},
    TemporalResult,
};

/// A naive wall-clock date and time.
///
/// A `LocalDateTime` is never resolved against a time zone, so a wall
/// clock that is skipped or repeated by a daylight saving transition is
/// stored as given.
///
/// ```rust
/// use bolt_temporal::LocalDateTime;
///
/// let datetime = LocalDateTime::try_new(1976, 6, 13, 12, 34, 56, 789_012_587).unwrap();
/// assert_eq!(datetime.to_epoch_seconds(), 203_517_296);
/// assert_eq!(datetime.to_string(), "1976-06-13T12:34:56.789012587");
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    pub(crate) iso: IsoDateTime,
}

// ==== Private LocalDateTime API ====

impl LocalDateTime {
    #[inline]
    pub(crate) const fn new_unchecked(iso: IsoDateTime) -> Self {
        Self { iso }
    }

    pub(crate) fn to_formattable<'a>(self) -> FormattableIxdtf<'a> {
        FormattableIxdtf {
            date: Some(FormattableDate(
                self.iso.date.year,
                self.iso.date.month,
                self.iso.date.day,
            )),
            time: Some(self.time().to_formattable()),
            ..Default::default()
        }
    }
}

// ==== Public LocalDateTime API ====

impl LocalDateTime {
    /// Creates a new `LocalDateTime` from a `Date` and a `LocalTime`.
    #[inline]
    #[must_use]
    pub const fn new(date: Date, time: LocalTime) -> Self {
        Self::new_unchecked(IsoDateTime::new(date.iso, time.iso))
    }

    /// Creates a new validated `LocalDateTime`.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> TemporalResult<Self> {
        let date = IsoDate::new(year, month, day)?;
        let time = IsoTime::new(hour, minute, second, nanosecond)?;
        Ok(Self::new_unchecked(IsoDateTime::new(date, time)))
    }

    /// Creates a `LocalDateTime` from seconds since the epoch, with the wall
    /// clock read as if it were UTC.
    #[inline]
    pub fn from_epoch_seconds(seconds: i64, nanosecond: u32) -> TemporalResult<Self> {
        IsoDateTime::from_local_epoch_seconds(seconds, nanosecond).map(Self::new_unchecked)
    }

    /// Returns the wall clock as whole seconds since the epoch, read as if it were UTC.
    #[inline]
    #[must_use]
    pub fn to_epoch_seconds(&self) -> i64 {
        self.iso.to_local_epoch_seconds()
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> Date {
        Date::new_unchecked(self.iso.date)
    }

    #[inline]
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        LocalTime::new_unchecked(self.iso.time)
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.iso.date.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.iso.date.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.iso.date.day
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.time.hour
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.time.minute
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.time.second
    }

    /// Returns the whole milliseconds of the second.
    #[inline]
    #[must_use]
    pub const fn millisecond(&self) -> u32 {
        self.iso.time.nanosecond / 1_000_000
    }

    /// Returns the whole microseconds of the second.
    #[inline]
    #[must_use]
    pub const fn microsecond(&self) -> u32 {
        self.iso.time.nanosecond / 1_000
    }

    /// Returns the nanoseconds of the second.
    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.iso.time.nanosecond
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_formattable().write_to(f)
    }
}
