//! This module implements `TimeZone` and `UtcOffset`.

use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

use writeable::Writeable;

use crate::{
    builtins::core::LocalDateTime,
    error::ErrorMessage,
    iso::IsoDateTime,
    parsers::{parse_offset_seconds, FormattableOffset},
    provider::{CandidateEpochSeconds, TimeZoneProvider, UtcOffsetSeconds},
    TemporalError, TemporalResult,
};

/// The largest offset magnitude in seconds, 18 hours.
pub(crate) const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// A fixed offset from UTC in seconds, east of Greenwich.
///
/// Offsets are limited to ±18:00 and render as `±HH:MM`, with `:SS`
/// appended only for offsets with a seconds part.
///
/// ```rust
/// use bolt_temporal::UtcOffset;
///
/// let offset = UtcOffset::from_seconds(-5400).unwrap();
/// assert_eq!(offset.to_string(), "-01:30");
/// assert_eq!("+01:30".parse::<UtcOffset>().unwrap().seconds(), 5400);
/// assert_eq!(UtcOffset::UTC.to_string(), "+00:00");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i32);

impl UtcOffset {
    pub const UTC: Self = Self(0);

    /// Creates a validated `UtcOffset` from seconds east of UTC.
    pub fn from_seconds(seconds: i32) -> TemporalResult<Self> {
        if !(-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&seconds) {
            return Err(TemporalError::range().with_enum(ErrorMessage::OffsetOutOfRange));
        }
        Ok(Self(seconds))
    }

    /// Returns the offset in seconds east of UTC.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.0
    }

    #[inline]
    pub(crate) fn to_formattable(self) -> FormattableOffset {
        FormattableOffset::from_seconds(self.0)
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_formattable().write_to(f)
    }
}

impl FromStr for UtcOffset {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_seconds(parse_offset_seconds(s)?)
    }
}

/// A time zone descriptor: either a named zone of the time zone database
/// or a fixed offset without a name.
///
/// Named zones hold the database spelling of their identifier. Their
/// offsets are looked up through a [`TimeZoneProvider`], which knows the
/// historical rules of the zone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeZone {
    IanaIdentifier(String),
    UtcOffset(UtcOffset),
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::UtcOffset(UtcOffset::UTC)
    }
}

impl From<UtcOffset> for TimeZone {
    fn from(value: UtcOffset) -> Self {
        Self::UtcOffset(value)
    }
}

impl TimeZone {
    /// Creates a fixed offset `TimeZone` without a name.
    #[inline]
    #[must_use]
    pub const fn fixed(offset: UtcOffset) -> Self {
        Self::UtcOffset(offset)
    }

    /// Creates a named `TimeZone`, normalizing `identifier` to its database spelling.
    ///
    /// Identifiers are matched case-insensitively. An identifier the
    /// provider does not know fails with an `UnknownZone` error.
    pub fn try_named_with_provider(
        identifier: &str,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TemporalResult<Self> {
        let normalized = provider.normalize_identifier(identifier)?;
        Ok(Self::IanaIdentifier(normalized.into_owned()))
    }

    /// Returns the identifier of this time zone, which is the zone name
    /// or the `±HH:MM` rendering of a fixed offset.
    pub fn identifier(&self) -> String {
        match self {
            Self::IanaIdentifier(identifier) => identifier.clone(),
            Self::UtcOffset(offset) => offset.to_string(),
        }
    }

    /// Returns the offset in effect at `epoch_seconds`.
    pub fn offset_for_epoch_seconds_with_provider(
        &self,
        epoch_seconds: i64,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TemporalResult<UtcOffset> {
        match self {
            Self::UtcOffset(offset) => Ok(*offset),
            Self::IanaIdentifier(identifier) => {
                offset_from_provider(provider.get_named_tz_offset(identifier, epoch_seconds)?)
            }
        }
    }

    /// Returns the offset in effect for the wall clock `local` in this time zone.
    ///
    /// When the wall clock occurs twice, the offset of the earlier
    /// instant is returned. When it is skipped by a transition, the
    /// offset in effect before the transition is returned.
    pub fn offset_for_local_with_provider(
        &self,
        local: &LocalDateTime,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TemporalResult<UtcOffset> {
        self.resolve_local(local.iso, provider)
            .map(|(_, offset)| offset)
    }

    /// Resolves a wall clock to the epoch seconds of its instant and the offset used.
    pub(crate) fn resolve_local(
        &self,
        local: IsoDateTime,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TemporalResult<(i64, UtcOffset)> {
        match self {
            Self::UtcOffset(offset) => {
                let local_seconds = local.to_local_epoch_seconds();
                Ok((local_seconds - i64::from(offset.0), *offset))
            }
            Self::IanaIdentifier(identifier) => resolve_named_local(identifier, local, provider),
        }
    }
}

/// Resolves a wall clock in the named zone `identifier`.
///
/// Repeated wall clocks take the first candidate, and skipped wall clocks
/// take the offset from before the gap.
pub(crate) fn resolve_named_local(
    identifier: &str,
    local: IsoDateTime,
    provider: &(impl TimeZoneProvider + ?Sized),
) -> TemporalResult<(i64, UtcOffset)> {
    let candidates = provider.get_named_tz_epoch_seconds(identifier, local.into())?;
    let offset = match candidates {
        CandidateEpochSeconds::One(one) | CandidateEpochSeconds::Two([one, _]) => one.offset,
        CandidateEpochSeconds::Zero(gap) => gap.offset_before,
    };
    let offset = offset_from_provider(offset)?;
    Ok((
        local.to_local_epoch_seconds() - i64::from(offset.0),
        offset,
    ))
}

pub(crate) fn offset_from_provider(offset: UtcOffsetSeconds) -> TemporalResult<UtcOffset> {
    i32::try_from(offset.0)
        .map_err(|_| TemporalError::range().with_enum(ErrorMessage::OffsetOutOfRange))
        .and_then(UtcOffset::from_seconds)
}
