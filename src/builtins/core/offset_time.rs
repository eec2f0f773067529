//! This module implements `OffsetTime`.

use core::fmt;

use writeable::Writeable;

use crate::{
    builtins::core::{timezone::UtcOffset, LocalTime},
    parsers::FormattableIxdtf,
    TemporalResult,
};

/// A wall-clock time of day at a fixed offset from UTC.
///
/// ```rust
/// use bolt_temporal::{LocalTime, OffsetTime, UtcOffset};
///
/// let time = LocalTime::try_new(12, 34, 56, 789_012_587).unwrap();
/// let offset = UtcOffset::from_seconds(5400).unwrap();
/// let offset_time = OffsetTime::new(time, offset);
/// assert_eq!(offset_time.to_string(), "12:34:56.789012587+01:30");
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: LocalTime,
    offset: UtcOffset,
}

impl OffsetTime {
    #[inline]
    #[must_use]
    pub const fn new(time: LocalTime, offset: UtcOffset) -> Self {
        Self { time, offset }
    }

    /// Creates a new validated `OffsetTime`.
    pub fn try_new(
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        offset_seconds: i32,
    ) -> TemporalResult<Self> {
        let time = LocalTime::try_new(hour, minute, second, nanosecond)?;
        let offset = UtcOffset::from_seconds(offset_seconds)?;
        Ok(Self::new(time, offset))
    }

    #[inline]
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        self.time
    }

    #[inline]
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.time.hour()
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.time.minute()
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.time.second()
    }

    #[inline]
    #[must_use]
    pub const fn millisecond(&self) -> u32 {
        self.time.millisecond()
    }

    #[inline]
    #[must_use]
    pub const fn microsecond(&self) -> u32 {
        self.time.microsecond()
    }

    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.time.nanosecond()
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FormattableIxdtf {
            time: Some(self.time.to_formattable()),
            offset: Some(self.offset.to_formattable()),
            ..Default::default()
        }
        .write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::OffsetTime;
    use crate::error::ErrorKind;

    #[test]
    fn offset_boundaries() {
        let time = OffsetTime::try_new(0, 0, 0, 0, 64_800).unwrap();
        assert_eq!(time.offset().seconds(), 64_800);
        let time = OffsetTime::try_new(23, 59, 59, 999_999_999, -64_800).unwrap();
        assert_eq!(time.to_string(), "23:59:59.999999999-18:00");

        let err = OffsetTime::try_new(0, 0, 0, 0, 64_801).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(OffsetTime::try_new(24, 0, 0, 0, 0).is_err());
    }

    #[test]
    fn same_time_different_offset() {
        let a = OffsetTime::try_new(12, 0, 0, 0, 3600).unwrap();
        let b = OffsetTime::try_new(12, 0, 0, 0, 0).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.time(), b.time());
    }
}
