//! This module implements `OffsetDateTime`.

use core::fmt;

use writeable::Writeable;

use crate::{
    builtins::core::{timezone::UtcOffset, Date, LocalDateTime, LocalTime},
    error::ErrorMessage,
    TemporalError, TemporalResult,
};

/// A date and wall-clock time at a fixed offset from UTC.
///
/// An `OffsetDateTime` carries no zone name. It is a different value from a
/// [`ZonedDateTime`][crate::ZonedDateTime] even when the zone's offset
/// matches.
///
/// ```rust
/// use bolt_temporal::{LocalDateTime, OffsetDateTime, UtcOffset};
///
/// let local = LocalDateTime::try_new(1859, 5, 31, 23, 49, 59, 999_999_999).unwrap();
/// let datetime = OffsetDateTime::new(local, UtcOffset::from_seconds(9000).unwrap());
/// assert_eq!(datetime.epoch_seconds(), -3_489_792_001);
/// assert_eq!(datetime.to_string(), "1859-05-31T23:49:59.999999999+02:30");
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetDateTime {
    datetime: LocalDateTime,
    offset: UtcOffset,
}

impl OffsetDateTime {
    #[inline]
    #[must_use]
    pub const fn new(datetime: LocalDateTime, offset: UtcOffset) -> Self {
        Self { datetime, offset }
    }

    /// Creates a new validated `OffsetDateTime`.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        offset_seconds: i32,
    ) -> TemporalResult<Self> {
        let datetime = LocalDateTime::try_new(year, month, day, hour, minute, second, nanosecond)?;
        let offset = UtcOffset::from_seconds(offset_seconds)?;
        Ok(Self::new(datetime, offset))
    }

    /// Creates the `OffsetDateTime` that observes the instant `epoch_seconds`
    /// at `offset`.
    pub fn from_epoch_seconds(
        epoch_seconds: i64,
        nanosecond: u32,
        offset: UtcOffset,
    ) -> TemporalResult<Self> {
        let local = epoch_seconds
            .checked_add(i64::from(offset.seconds()))
            .ok_or(TemporalError::range().with_enum(ErrorMessage::InstantOutOfRange))?;
        let datetime = LocalDateTime::from_epoch_seconds(local, nanosecond)?;
        Ok(Self::new(datetime, offset))
    }

    /// Returns the whole seconds of the instant since 1970-01-01T00:00:00Z.
    #[inline]
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.datetime.to_epoch_seconds() - i64::from(self.offset.seconds())
    }

    #[inline]
    #[must_use]
    pub const fn datetime(&self) -> LocalDateTime {
        self.datetime
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> Date {
        self.datetime.date()
    }

    #[inline]
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        self.datetime.time()
    }

    #[inline]
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.datetime.year()
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.datetime.month()
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.datetime.day()
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.datetime.hour()
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.datetime.minute()
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.datetime.second()
    }

    #[inline]
    #[must_use]
    pub const fn millisecond(&self) -> u32 {
        self.datetime.millisecond()
    }

    #[inline]
    #[must_use]
    pub const fn microsecond(&self) -> u32 {
        self.datetime.microsecond()
    }

    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.datetime.nanosecond()
    }
}

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formattable = self.datetime.to_formattable();
        formattable.offset = Some(self.offset.to_formattable());
        formattable.write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::OffsetDateTime;
    use crate::UtcOffset;

    #[test]
    fn epoch_seconds_are_utc() {
        let datetime = OffsetDateTime::try_new(1976, 6, 13, 12, 34, 56, 0, -5400).unwrap();
        assert_eq!(datetime.epoch_seconds(), 203_517_296 + 5400);
        assert_eq!(datetime.to_string(), "1976-06-13T12:34:56-01:30");
    }

    #[test]
    fn from_epoch_seconds() {
        let offset = UtcOffset::from_seconds(9000).unwrap();
        let datetime = OffsetDateTime::from_epoch_seconds(-3_489_792_001, 999_999_999, offset)
            .unwrap();
        assert_eq!(
            datetime,
            OffsetDateTime::try_new(1859, 5, 31, 23, 49, 59, 999_999_999, 9000).unwrap()
        );
        assert!(OffsetDateTime::from_epoch_seconds(i64::MAX, 0, offset).is_err());
    }
}
