//! Access to the clock and time zone of the host system.
//!
//! Enable with the `sys` feature flag.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::{builtins::TZ_PROVIDER, TemporalError, TemporalResult, TimeZone, ZonedDateTime};

impl TimeZone {
    /// Returns the time zone the host system is configured with.
    pub fn system() -> TemporalResult<Self> {
        get_system_timezone()
    }
}

impl ZonedDateTime {
    /// Returns the current instant of the host clock in the zone `zone_id`.
    pub fn now(zone_id: &str) -> TemporalResult<Self> {
        let (seconds, nanosecond) = get_system_epoch_seconds()?;
        Self::from_epoch_seconds_with_provider(seconds, nanosecond, zone_id, &*TZ_PROVIDER)
    }
}

#[inline]
pub(crate) fn get_system_timezone() -> TemporalResult<TimeZone> {
    iana_time_zone::get_timezone()
        .map(|s| TimeZone::try_named_with_provider(&s, &*TZ_PROVIDER))
        .map_err(|_| TemporalError::general("Error fetching system time zone"))?
}

/// Returns the system time as whole seconds and the nanoseconds of the second.
pub(crate) fn get_system_epoch_seconds() -> TemporalResult<(i64, u32)> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TemporalError::general("Error fetching system time"))?;
    let seconds = i64::try_from(elapsed.as_secs())
        .map_err(|_| TemporalError::general("System time is out of range"))?;
    Ok((seconds, elapsed.subsec_nanos()))
}
