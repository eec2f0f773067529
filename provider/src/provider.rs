//! The `TimeZoneProvider` trait.

use alloc::borrow::Cow;

use crate::{utils, TimeZoneProviderError};

pub type TimeZoneProviderResult<T> = Result<T, TimeZoneProviderError>;

/// `UtcOffsetSeconds` represents the amount of seconds we need to add to the UTC to reach the local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct UtcOffsetSeconds(pub i64);

/// A wall-clock date and time without any time zone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

impl IsoDateTime {
    /// The wall-clock value as whole seconds since the epoch, as if it were
    /// observed in UTC. The sub-second part is ignored.
    pub fn as_local_epoch_seconds(&self) -> i64 {
        let days = utils::epoch_days_from_gregorian_date(self.year.into(), self.month, self.day);
        days * utils::SECONDS_PER_DAY
            + i64::from(self.hour) * utils::SECONDS_PER_HOUR
            + i64::from(self.minute) * utils::SECONDS_PER_MINUTE
            + i64::from(self.second)
    }
}

/// An epoch seconds value and the UTC offset in effect at that instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EpochSecondsAndOffset {
    /// The resolved epoch seconds
    pub seconds: i64,
    /// The offset corresponding to `seconds` in the given time zone
    pub offset: UtcOffsetSeconds,
}

/// The offsets surrounding a local time that does not exist in a time zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GapEntryOffsets {
    pub offset_before: UtcOffsetSeconds,
    pub offset_after: UtcOffsetSeconds,
}

/// The potential candidates for a given local datetime, ordered by instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CandidateEpochSeconds {
    Zero(GapEntryOffsets),
    One(EpochSecondsAndOffset),
    Two([EpochSecondsAndOffset; 2]),
}

impl CandidateEpochSeconds {
    pub fn as_slice(&self) -> &[EpochSecondsAndOffset] {
        match *self {
            Self::Zero(..) => &[],
            Self::One(ref one) => core::slice::from_ref(one),
            Self::Two(ref multiple) => &multiple[..],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(*self, Self::Zero(..))
    }

    pub fn len(&self) -> usize {
        match *self {
            Self::Zero(..) => 0,
            Self::One(..) => 1,
            Self::Two(..) => 2,
        }
    }

    pub fn first(&self) -> Option<EpochSecondsAndOffset> {
        match *self {
            Self::Zero(..) => None,
            Self::One(one) | Self::Two([one, _]) => Some(one),
        }
    }

    pub fn last(&self) -> Option<EpochSecondsAndOffset> {
        match *self {
            Self::Zero(..) => None,
            Self::One(last) | Self::Two([_, last]) => Some(last),
        }
    }
}

/// The `TimeZoneProvider` trait provides methods required for a provider
/// to implement in order to source time zone data from that provider.
///
/// Implementations must be safe to share across threads once built; every
/// method takes `&self` and none of them may change the observable data.
pub trait TimeZoneProvider {
    /// Returns the database spelling of `ident`, or
    /// [`TimeZoneProviderError::UnknownIdentifier`].
    fn normalize_identifier<'a>(&'a self, ident: &'a str) -> TimeZoneProviderResult<Cow<'a, str>>;

    /// Returns every instant at which the wall clock of `identifier` reads `local_datetime`.
    fn get_named_tz_epoch_seconds(
        &self,
        identifier: &str,
        local_datetime: IsoDateTime,
    ) -> TimeZoneProviderResult<CandidateEpochSeconds>;

    /// Returns the offset in effect for `identifier` at `epoch_seconds`.
    fn get_named_tz_offset(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> TimeZoneProviderResult<UtcOffsetSeconds>;
}

/// A provider without any time zone data.
///
/// Every named lookup fails, which is useful for callers that only deal
/// with fixed offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverProvider;

impl TimeZoneProvider for NeverProvider {
    fn normalize_identifier<'a>(&'a self, _: &'a str) -> TimeZoneProviderResult<Cow<'a, str>> {
        Err(TimeZoneProviderError::UnknownIdentifier)
    }

    fn get_named_tz_epoch_seconds(
        &self,
        _: &str,
        _: IsoDateTime,
    ) -> TimeZoneProviderResult<CandidateEpochSeconds> {
        Err(TimeZoneProviderError::UnknownIdentifier)
    }

    fn get_named_tz_offset(&self, _: &str, _: i64) -> TimeZoneProviderResult<UtcOffsetSeconds> {
        Err(TimeZoneProviderError::UnknownIdentifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_epoch_seconds() {
        let datetime = IsoDateTime {
            year: 1976,
            month: 6,
            day: 13,
            hour: 12,
            minute: 34,
            second: 56,
            nanosecond: 789_012_587,
        };
        assert_eq!(datetime.as_local_epoch_seconds(), 203_517_296);
    }

    #[test]
    fn candidate_accessors() {
        let first = EpochSecondsAndOffset {
            seconds: 10,
            offset: UtcOffsetSeconds(-14_400),
        };
        let second = EpochSecondsAndOffset {
            seconds: 3610,
            offset: UtcOffsetSeconds(-18_000),
        };
        let two = CandidateEpochSeconds::Two([first, second]);
        assert_eq!(two.len(), 2);
        assert_eq!(two.first(), Some(first));
        assert_eq!(two.last(), Some(second));

        let zero = CandidateEpochSeconds::Zero(GapEntryOffsets::default());
        assert!(zero.is_empty());
        assert!(zero.as_slice().is_empty());
        assert_eq!(zero.first(), None);
    }

    #[test]
    fn never_provider_rejects() {
        assert_eq!(
            NeverProvider.get_named_tz_offset("UTC", 0),
            Err(TimeZoneProviderError::UnknownIdentifier)
        );
    }
}
