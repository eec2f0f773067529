//! TZif lookups.
//!
//! `TZif` stands for Time zone information format is laid out by [RFC 8536][rfc8536] and
//! laid out by the [tzdata manual][tzif-manual]
//!
//! To be specific, this representation of `TZif` is solely to extend functionality
//! of the parsed type from the `tzif` [rust crate][tzif-crate], which has further detail on the
//! layout in Rust.
//!
//! [rfc8536]: https://datatracker.ietf.org/doc/html/rfc8536
//! [tzif-manual]: https://man7.org/linux/man-pages/man5/tzfile.5.html
//! [tzif-crate]: https://docs.rs/tzif/latest/tzif/

// NOTES:
//
// Transitions to DST (in march) + 1. Empty list between 2:00-3:00.
// Transitions to Std (in nov) -1. Two elements 1:00-2:00 is repeated twice.

use combine::Parser;

use tzif::data::{
    posix::PosixTzString,
    tzif::{DataBlock, TzifData},
};

use crate::{
    common::resolve_posix_tz_string_for_epoch_seconds,
    provider::{
        CandidateEpochSeconds, EpochSecondsAndOffset, GapEntryOffsets, TimeZoneProviderResult,
        UtcOffsetSeconds,
    },
    utils, TimeZoneProviderError,
};

/// A parsed TZif file, keeping only the version 2+ data block and footer.
#[derive(Debug, Clone)]
pub struct Tzif {
    pub data_block2: Option<DataBlock>,
    pub footer: Option<PosixTzString>,
}

impl From<TzifData> for Tzif {
    fn from(value: TzifData) -> Self {
        let TzifData {
            data_block2,
            footer,
            ..
        } = value;

        Self {
            data_block2,
            footer,
        }
    }
}

impl Tzif {
    pub fn from_bytes(data: &[u8]) -> TimeZoneProviderResult<Self> {
        let Ok((parse_result, _)) = tzif::parse::tzif::tzif().parse(data) else {
            return Err(TimeZoneProviderError::Data("Illformed Tzif data."));
        };
        Ok(Self::from(parse_result))
    }

    pub fn posix_tz_string(&self) -> Option<&PosixTzString> {
        self.footer.as_ref()
    }

    pub fn get_data_block2(&self) -> TimeZoneProviderResult<&DataBlock> {
        self.data_block2
            .as_ref()
            .ok_or(TimeZoneProviderError::Data("Only Tzif V2+ is supported."))
    }

    /// Returns the offset in effect at `epoch_seconds`.
    pub fn offset_for_epoch_seconds(
        &self,
        epoch_seconds: i64,
    ) -> TimeZoneProviderResult<UtcOffsetSeconds> {
        let db = self.get_data_block2()?;
        // Number of transitions at or before the instant
        let idx = db
            .transition_times
            .partition_point(|transition| transition.0 <= epoch_seconds);

        // <https://datatracker.ietf.org/doc/html/rfc8536#section-3.2>
        // If there are no transitions, local time for all timestamps is specified by the TZ
        // string in the footer if present and nonempty; otherwise, it is
        // specified by time type 0.
        if db.transition_times.is_empty() {
            if let Some(posix_tz_string) = self.posix_tz_string() {
                return Ok(resolve_posix_tz_string_for_epoch_seconds(
                    posix_tz_string,
                    epoch_seconds,
                ));
            }
            return local_time_type_offset(db, 0);
        }

        if idx == 0 {
            // Before the first transition time type 0 applies.
            return local_time_type_offset(db, 0);
        }

        if idx == db.transition_times.len() {
            // The transition time provided is beyond the length of
            // the available transition time, so the time zone is
            // resolved with the POSIX tz string.
            if let Some(posix_tz_string) = self.posix_tz_string() {
                return Ok(resolve_posix_tz_string_for_epoch_seconds(
                    posix_tz_string,
                    epoch_seconds,
                ));
            }
        }

        // NOTE: Transition type can be empty. If no transition_type exists,
        // then use 0 as the default index of local_time_type_records.
        let type_index = db.transition_types.get(idx - 1).copied().unwrap_or(0);
        local_time_type_offset(db, type_index)
    }

    /// This function determines the possible instants for a local epoch
    /// seconds value without an offset.
    ///
    /// Basically, if someone provides a DateTime 2017-11-05T01:30:00,
    /// we have no way of knowing if this value is in DST or STD.
    /// Furthermore, for the above example, this should return 2 instants
    /// due to there being two 2017-11-05T01:30:00. On the other
    /// side of the transition, the DateTime 2017-03-12T02:30:00 could
    /// be provided. This time does NOT exist due to the +1 jump from
    /// 02:00 -> 03:00.
    pub fn candidates_for_local_seconds(
        &self,
        local_seconds: i64,
    ) -> TimeZoneProviderResult<CandidateEpochSeconds> {
        // No offset exceeds a day, so these samples bracket every instant
        // whose wall clock can read `local_seconds`.
        let before =
            self.offset_for_epoch_seconds(local_seconds.saturating_sub(utils::SECONDS_PER_DAY))?;
        let after =
            self.offset_for_epoch_seconds(local_seconds.saturating_add(utils::SECONDS_PER_DAY))?;

        let samples = if before == after {
            [Some(before), None]
        } else {
            [Some(before), Some(after)]
        };

        let mut candidates = [None, None];
        for (slot, offset) in candidates.iter_mut().zip(samples) {
            let Some(offset) = offset else {
                continue;
            };
            let seconds = local_seconds.saturating_sub(offset.0);
            if self.offset_for_epoch_seconds(seconds)? == offset {
                *slot = Some(EpochSecondsAndOffset { seconds, offset });
            }
        }

        let result = match candidates {
            [Some(one), None] | [None, Some(one)] => CandidateEpochSeconds::One(one),
            [Some(a), Some(b)] if a.seconds <= b.seconds => CandidateEpochSeconds::Two([a, b]),
            [Some(a), Some(b)] => CandidateEpochSeconds::Two([b, a]),
            [None, None] => CandidateEpochSeconds::Zero(GapEntryOffsets {
                offset_before: before,
                offset_after: after,
            }),
        };
        Ok(result)
    }
}

#[inline]
fn local_time_type_offset(db: &DataBlock, idx: usize) -> TimeZoneProviderResult<UtcOffsetSeconds> {
    db.local_time_type_records
        .get(idx)
        .map(|record| UtcOffsetSeconds(record.utoff.0))
        .ok_or(TimeZoneProviderError::Data("Missing local time type record."))
}
