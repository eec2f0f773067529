//! POSIX TZ string evaluation for instants past a TZif transition table.

use core::ops::Range;

use tzif::data::posix::{PosixTzString, TransitionDay};

use crate::{provider::UtcOffsetSeconds, utils};

/// Stores the information about DST transitions for a given year
pub(crate) struct DstTransitionInfoForYear {
    pub(crate) dst_start_seconds: i64,
    pub(crate) dst_end_seconds: i64,
    pub(crate) std_offset: UtcOffsetSeconds,
    pub(crate) dst_offset: UtcOffsetSeconds,
}

impl DstTransitionInfoForYear {
    /// Returns `None` when the TZ string has no DST rule.
    pub(crate) fn compute(posix_tz_string: &PosixTzString, year: i64) -> Option<Self> {
        let dst = posix_tz_string.dst_info.as_ref()?;
        // POSIX offsets count west of Greenwich, so they are negated
        let std_offset = UtcOffsetSeconds(-posix_tz_string.std_info.offset.0);
        let dst_offset = UtcOffsetSeconds(-dst.variant_info.offset.0);
        // The start rule is written in standard time and the end rule in DST.
        let dst_start_seconds = calculate_transition_seconds_for_year(
            year,
            &dst.start_date.day,
            dst.start_date.time.0,
            std_offset,
        );
        let dst_end_seconds = calculate_transition_seconds_for_year(
            year,
            &dst.end_date.day,
            dst.end_date.time.0,
            dst_offset,
        );
        Some(Self {
            dst_start_seconds,
            dst_end_seconds,
            std_offset,
            dst_offset,
        })
    }

    // Returns the range between offsets in this year
    // This may cover DST or standard time, whichever starts first
    pub(crate) fn transition_range(&self) -> Range<i64> {
        if self.dst_start_seconds > self.dst_end_seconds {
            self.dst_end_seconds..self.dst_start_seconds
        } else {
            self.dst_start_seconds..self.dst_end_seconds
        }
    }

    /// Returns the offset in effect at `epoch_seconds`, which must fall in this rule year.
    pub(crate) fn offset_for(&self, epoch_seconds: i64) -> UtcOffsetSeconds {
        let in_range = self.transition_range().contains(&epoch_seconds);
        // Southern hemisphere rules end DST before they start it.
        let northern = self.dst_start_seconds <= self.dst_end_seconds;
        if in_range == northern {
            self.dst_offset
        } else {
            self.std_offset
        }
    }
}

/// Resolves the offset of `posix_tz_string` for an instant.
pub(crate) fn resolve_posix_tz_string_for_epoch_seconds(
    posix_tz_string: &PosixTzString,
    epoch_seconds: i64,
) -> UtcOffsetSeconds {
    let std_offset = UtcOffsetSeconds(-posix_tz_string.std_info.offset.0);
    // Rules are anchored on the local standard time year.
    let local_days = epoch_seconds
        .saturating_add(std_offset.0)
        .div_euclid(utils::SECONDS_PER_DAY);
    let (year, _, _) = utils::ymd_from_epoch_days(local_days);
    match DstTransitionInfoForYear::compute(posix_tz_string, year) {
        Some(info) => info.offset_for(epoch_seconds),
        None => std_offset,
    }
}

/// Returns the UTC epoch seconds of a POSIX transition rule in `year`.
///
/// `time` is seconds past local midnight and may be negative or exceed a day.
pub(crate) fn calculate_transition_seconds_for_year(
    year: i64,
    day: &TransitionDay,
    time: i64,
    offset: UtcOffsetSeconds,
) -> i64 {
    let year_epoch_days = utils::epoch_days_for_year(year);
    let is_leap = utils::is_leap(year);

    // Zero-indexed day of the year of the transition
    let days = match *day {
        // Jn: 1..=365, February 29th is never counted
        TransitionDay::NoLeap(day) if day > 59 => i64::from(day) - 1 + i64::from(is_leap),
        TransitionDay::NoLeap(day) => i64::from(day) - 1,
        // n: 0..=365, February 29th is counted
        TransitionDay::WithLeap(day) => i64::from(day),
        TransitionDay::Mwd(month, week, weekday) => {
            let month = u8::try_from(month).unwrap_or(1).clamp(1, 12);
            let month_epoch_days = utils::epoch_days_from_gregorian_date(year, month, 1);
            let first_weekday = i64::from(utils::day_of_week_for_epoch_days(month_epoch_days));
            let days_in_month = i64::from(utils::iso_days_in_month(year, month));

            // 1-indexed day of month of the first matching weekday
            let mut day_of_month =
                1 + (i64::from(weekday) - first_weekday).rem_euclid(7) + (i64::from(week) - 1) * 7;
            // Week 5 means the last matching weekday of the month.
            while day_of_month > days_in_month {
                day_of_month -= 7;
            }
            month_epoch_days - year_epoch_days + day_of_month - 1
        }
    };

    (year_epoch_days + days)
        .saturating_mul(utils::SECONDS_PER_DAY)
        .saturating_add(time)
        .saturating_sub(offset.0)
}
