//! This module implements `Date` and any directly related algorithms.

use core::fmt;

use writeable::Writeable;

use crate::{iso::IsoDate, parsers::FormattableDate, TemporalResult};

/// A proleptic Gregorian calendar date without a time or time zone.
///
/// ```rust
/// use bolt_temporal::Date;
///
/// let date = Date::try_new(1994, 11, 15).unwrap();
/// assert_eq!(date.to_epoch_days(), 9084);
/// assert_eq!(date.to_string(), "1994-11-15");
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub(crate) iso: IsoDate,
}

impl Date {
    #[inline]
    pub(crate) const fn new_unchecked(iso: IsoDate) -> Self {
        Self { iso }
    }

    /// Creates a new validated `Date`.
    #[inline]
    pub fn try_new(year: i32, month: u8, day: u8) -> TemporalResult<Self> {
        IsoDate::new(year, month, day).map(Self::new_unchecked)
    }

    /// Creates a `Date` from the number of days since 1970-01-01.
    #[inline]
    pub fn from_epoch_days(epoch_days: i64) -> TemporalResult<Self> {
        IsoDate::from_epoch_days(epoch_days).map(Self::new_unchecked)
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub fn to_epoch_days(&self) -> i64 {
        self.iso.to_epoch_days()
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.iso.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.iso.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.iso.day
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FormattableDate(self.iso.year, self.iso.month, self.iso.day).write_to(f)
    }
}
