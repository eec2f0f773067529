//! This module implements the internal ISO field records.
//!
//! The three records are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` is a proleptic Gregorian year, month, and day. An `IsoTime`
//! is a wall-clock hour, minute, second, and nanosecond. An `IsoDateTime`
//! is the pair of both.
//!
//! The records are validated on construction and are the shared storage
//! of the public temporal types.

use bolt_tz_provider::{provider, utils};

use crate::{
    error::ErrorMessage, TemporalError, TemporalResult, TemporalUnwrap,
    NS_PER_DAY, NS_PER_SECOND, SECONDS_PER_DAY,
};

/// The smallest supported ISO year.
pub const MIN_YEAR: i32 = -999_999_999;
/// The largest supported ISO year.
pub const MAX_YEAR: i32 = 999_999_999;

/// The epoch days of `MIN_YEAR`-01-01.
pub const MIN_EPOCH_DAYS: i64 = utils::epoch_days_from_gregorian_date(MIN_YEAR as i64, 1, 1);
/// The epoch days of `MAX_YEAR`-12-31.
pub const MAX_EPOCH_DAYS: i64 = utils::epoch_days_from_gregorian_date(MAX_YEAR as i64, 12, 31);

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` from validated records.
    pub const fn new(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Returns the wall clock as seconds since the epoch, read as if it were UTC.
    pub fn to_local_epoch_seconds(&self) -> i64 {
        self.date.to_epoch_days() * SECONDS_PER_DAY + self.time.to_second_of_day()
    }

    /// Creates an `IsoDateTime` from local epoch seconds and a nanosecond of second.
    pub fn from_local_epoch_seconds(seconds: i64, nanosecond: u32) -> TemporalResult<Self> {
        if i64::from(nanosecond) >= NS_PER_SECOND {
            return Err(TemporalError::range().with_enum(ErrorMessage::NanosecondOutOfRange));
        }
        let date = IsoDate::from_epoch_days(seconds.div_euclid(SECONDS_PER_DAY))?;
        let second_of_day = seconds.rem_euclid(SECONDS_PER_DAY);
        let time = IsoTime::from_nanosecond_of_day(
            second_of_day * NS_PER_SECOND + i64::from(nanosecond),
        )?;
        Ok(Self::new(date, time))
    }
}

impl From<IsoDateTime> for provider::IsoDateTime {
    fn from(value: IsoDateTime) -> Self {
        Self {
            year: value.date.year,
            month: value.date.month,
            day: value.date.day,
            hour: value.time.hour,
            minute: value.time.minute,
            second: value.time.second,
            nanosecond: value.time.nanosecond,
        }
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` is a proleptic Gregorian year, month, and day.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self::new_unchecked(1970, 1, 1)
    }
}

impl IsoDate {
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `IsoDate`.
    pub fn new(year: i32, month: u8, day: u8) -> TemporalResult<Self> {
        if !is_valid_date(year, month, day) {
            return Err(TemporalError::range().with_enum(ErrorMessage::DateOutOfRange));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the number of days since 1970-01-01.
    pub fn to_epoch_days(self) -> i64 {
        utils::epoch_days_from_gregorian_date(self.year.into(), self.month, self.day)
    }

    /// Creates an `IsoDate` from a number of days since 1970-01-01.
    pub fn from_epoch_days(epoch_days: i64) -> TemporalResult<Self> {
        if !(MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&epoch_days) {
            return Err(TemporalError::range().with_enum(ErrorMessage::DateOutOfRange));
        }
        let (year, month, day) = utils::ymd_from_epoch_days(epoch_days);
        let year = i32::try_from(year).ok().temporal_unwrap()?;
        Ok(Self::new_unchecked(year, month, day))
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record is a wall-clock time of day with nanosecond precision.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

impl IsoTime {
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Creates a new validated `IsoTime`.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> TemporalResult<Self> {
        if !is_valid_time(hour, minute, second, nanosecond) {
            return Err(TemporalError::range().with_enum(ErrorMessage::TimeOutOfRange));
        }
        Ok(Self::new_unchecked(hour, minute, second, nanosecond))
    }

    /// Returns the whole seconds elapsed since midnight.
    pub fn to_second_of_day(&self) -> i64 {
        i64::from(self.hour) * utils::SECONDS_PER_HOUR
            + i64::from(self.minute) * utils::SECONDS_PER_MINUTE
            + i64::from(self.second)
    }

    /// Returns the nanoseconds elapsed since midnight.
    pub fn to_nanosecond_of_day(&self) -> i64 {
        self.to_second_of_day() * NS_PER_SECOND + i64::from(self.nanosecond)
    }

    /// Creates an `IsoTime` from the nanoseconds elapsed since midnight.
    pub fn from_nanosecond_of_day(nanos: i64) -> TemporalResult<Self> {
        if !(0..NS_PER_DAY).contains(&nanos) {
            return Err(TemporalError::range().with_enum(ErrorMessage::TimeOutOfRange));
        }
        let seconds = nanos / NS_PER_SECOND;
        let nanosecond = (nanos % NS_PER_SECOND) as u32;
        let hour = (seconds / utils::SECONDS_PER_HOUR) as u8;
        let minute = (seconds % utils::SECONDS_PER_HOUR / utils::SECONDS_PER_MINUTE) as u8;
        let second = (seconds % utils::SECONDS_PER_MINUTE) as u8;
        Ok(Self::new_unchecked(hour, minute, second, nanosecond))
    }
}

// ==== `IsoDate` specific utility functions ====

#[inline]
fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
        return false;
    }
    (1..=utils::iso_days_in_month(year.into(), month)).contains(&day)
}

// ==== `IsoTime` specific utilities ====

#[inline]
fn is_valid_time(hour: u8, minute: u8, second: u8, nanosecond: u32) -> bool {
    hour < 24 && minute < 60 && second < 60 && nanosecond < NS_PER_SECOND as u32
}

#[cfg(test)]
mod tests {
    use super::{IsoDate, IsoDateTime, IsoTime, MAX_EPOCH_DAYS, MAX_YEAR, MIN_EPOCH_DAYS, MIN_YEAR};
    use crate::error::ErrorKind;

    #[test]
    fn iso_date_epoch_days() {
        let date = IsoDate::new(1994, 11, 15).unwrap();
        assert_eq!(date.to_epoch_days(), 9084);
        assert_eq!(IsoDate::from_epoch_days(9084).unwrap(), date);

        let date = IsoDate::new(2000, 3, 1).unwrap();
        assert_eq!(date.to_epoch_days(), 11017);

        let date = IsoDate::new(1969, 12, 31).unwrap();
        assert_eq!(date.to_epoch_days(), -1);
        assert_eq!(IsoDate::from_epoch_days(-1).unwrap(), date);
    }

    #[test]
    fn iso_date_limits() {
        let min = IsoDate::from_epoch_days(MIN_EPOCH_DAYS).unwrap();
        assert_eq!((min.year, min.month, min.day), (MIN_YEAR, 1, 1));
        let max = IsoDate::from_epoch_days(MAX_EPOCH_DAYS).unwrap();
        assert_eq!((max.year, max.month, max.day), (MAX_YEAR, 12, 31));

        let err = IsoDate::from_epoch_days(MAX_EPOCH_DAYS + 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(IsoDate::from_epoch_days(MIN_EPOCH_DAYS - 1).is_err());
        assert!(IsoDate::new(MAX_YEAR + 1, 1, 1).is_err());
    }

    #[test]
    fn iso_date_validation() {
        assert!(IsoDate::new(2024, 2, 29).is_ok());
        assert!(IsoDate::new(2023, 2, 29).is_err());
        assert!(IsoDate::new(2000, 13, 1).is_err());
        assert!(IsoDate::new(2000, 0, 1).is_err());
        assert!(IsoDate::new(2000, 4, 31).is_err());
        assert!(IsoDate::new(-44, 3, 15).is_ok());
    }

    #[test]
    fn iso_time_validation() {
        assert!(IsoTime::new(23, 59, 59, 999_999_999).is_ok());
        let err = IsoTime::new(24, 0, 0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(IsoTime::new(0, 60, 0, 0).is_err());
        assert!(IsoTime::new(0, 0, 60, 0).is_err());
        assert!(IsoTime::new(0, 0, 0, 1_000_000_000).is_err());
    }

    #[test]
    fn iso_time_nanosecond_of_day() {
        let time = IsoTime::new(12, 34, 56, 789_012_587).unwrap();
        assert_eq!(time.to_nanosecond_of_day(), 45_296_789_012_587);
        assert_eq!(
            IsoTime::from_nanosecond_of_day(45_296_789_012_587).unwrap(),
            time
        );

        assert!(IsoTime::from_nanosecond_of_day(86_400_000_000_000).is_err());
        assert!(IsoTime::from_nanosecond_of_day(-1).is_err());
        assert_eq!(
            IsoTime::from_nanosecond_of_day(86_399_999_999_999).unwrap(),
            IsoTime::new(23, 59, 59, 999_999_999).unwrap()
        );
    }

    #[test]
    fn iso_datetime_local_epoch_seconds() {
        let datetime = IsoDateTime::new(
            IsoDate::new(1859, 5, 31).unwrap(),
            IsoTime::new(23, 49, 59, 999_999_999).unwrap(),
        );
        assert_eq!(datetime.to_local_epoch_seconds(), -3_489_783_001);
        assert_eq!(
            IsoDateTime::from_local_epoch_seconds(-3_489_783_001, 999_999_999).unwrap(),
            datetime
        );

        let shifted = IsoDateTime::from_local_epoch_seconds(-3_489_783_001 + 611, 999_999_999)
            .unwrap();
        assert_eq!(shifted.date, IsoDate::new(1859, 6, 1).unwrap());
        assert_eq!(shifted.time, IsoTime::new(0, 0, 10, 999_999_999).unwrap());

        assert!(IsoDateTime::from_local_epoch_seconds(0, 1_000_000_000).is_err());
    }
}
