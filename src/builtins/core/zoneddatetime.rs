//! This module contains the core implementation of the `ZonedDateTime`
//! builtin type.

use alloc::string::String;
use core::{fmt, ops::Range};

use writeable::Writeable;

use crate::{
    builtins::core::{
        timezone::{
            offset_from_provider, resolve_named_local, TimeZone, UtcOffset, MAX_OFFSET_SECONDS,
        },
        Date, LocalDateTime, LocalTime,
    },
    error::ErrorMessage,
    iso::{MAX_EPOCH_DAYS, MIN_EPOCH_DAYS},
    parsers::FormattableTimeZone,
    provider::TimeZoneProvider,
    temporal_assert, TemporalError, TemporalResult, SECONDS_PER_DAY,
};

/// The instants whose wall clock is within the supported years at every offset.
const INSTANT_RANGE: Range<i64> = (MIN_EPOCH_DAYS * SECONDS_PER_DAY - MAX_OFFSET_SECONDS as i64)
    ..((MAX_EPOCH_DAYS + 1) * SECONDS_PER_DAY + MAX_OFFSET_SECONDS as i64);

/// A date and wall-clock time in a named time zone.
///
/// The offset of a `ZonedDateTime` is always derived from the rules of its
/// zone and is never supplied by a caller. It is kept alongside the wall
/// clock so that both occurrences of a repeated wall clock are distinct
/// values.
///
/// A wall clock that is skipped by a transition resolves with the offset in
/// effect before the transition, which moves the stored wall clock forward
/// by the length of the gap.
///
/// Construction is feature gated by `compiled_data` for the methods that do
/// not take a [`TimeZoneProvider`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZonedDateTime {
    datetime: LocalDateTime,
    offset: UtcOffset,
    zone_id: String,
}

// ==== Private API ====

impl ZonedDateTime {
    fn from_epoch_seconds_in_zone(
        epoch_seconds: i64,
        nanosecond: u32,
        zone_id: String,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TemporalResult<Self> {
        if !INSTANT_RANGE.contains(&epoch_seconds) {
            return Err(TemporalError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        let offset = offset_from_provider(provider.get_named_tz_offset(&zone_id, epoch_seconds)?)?;
        let local = epoch_seconds
            .checked_add(i64::from(offset.seconds()))
            .ok_or(TemporalError::range().with_enum(ErrorMessage::InstantOutOfRange))?;
        let datetime = LocalDateTime::from_epoch_seconds(local, nanosecond)?;
        temporal_assert!(
            datetime.to_epoch_seconds() - i64::from(offset.seconds()) == epoch_seconds,
            "wall clock of {zone_id} at {epoch_seconds} does not map back to its instant"
        );
        Ok(Self {
            datetime,
            offset,
            zone_id,
        })
    }
}

// ==== Public API ====

impl ZonedDateTime {
    /// Creates a `ZonedDateTime` for the wall clock `datetime` in the zone `zone_id`.
    ///
    /// `zone_id` is matched case-insensitively and stored with its database
    /// spelling. An unknown zone fails with an `UnknownZone` error.
    pub fn try_new_with_provider(
        datetime: LocalDateTime,
        zone_id: &str,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TemporalResult<Self> {
        let zone_id = provider.normalize_identifier(zone_id)?.into_owned();
        let (epoch_seconds, _) = resolve_named_local(&zone_id, datetime.iso, provider)?;
        Self::from_epoch_seconds_in_zone(epoch_seconds, datetime.nanosecond(), zone_id, provider)
    }

    /// Creates the `ZonedDateTime` that observes the instant `epoch_seconds` in the zone `zone_id`.
    pub fn from_epoch_seconds_with_provider(
        epoch_seconds: i64,
        nanosecond: u32,
        zone_id: &str,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TemporalResult<Self> {
        let zone_id = provider.normalize_identifier(zone_id)?.into_owned();
        Self::from_epoch_seconds_in_zone(epoch_seconds, nanosecond, zone_id, provider)
    }

    /// Returns the whole seconds of the instant since 1970-01-01T00:00:00Z.
    #[inline]
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.datetime.to_epoch_seconds() - i64::from(self.offset.seconds())
    }

    /// Returns the database spelling of the zone identifier.
    #[inline]
    #[must_use]
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Returns the zone as a [`TimeZone`] descriptor.
    #[inline]
    #[must_use]
    pub fn time_zone(&self) -> TimeZone {
        TimeZone::IanaIdentifier(self.zone_id.clone())
    }

    /// Returns the offset the zone observes at this instant.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
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

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formattable = self.datetime.to_formattable();
        formattable.offset = Some(self.offset.to_formattable());
        formattable.timezone = Some(FormattableTimeZone(&self.zone_id));
        formattable.write_to(f)
    }
}
