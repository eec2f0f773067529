use crate::{builtins::TZ_PROVIDER, LocalDateTime, TemporalResult, ZonedDateTime};

/// The `ZonedDateTime` constructors backed by the bundled time zone database.
///
/// Enable with the `compiled_data` feature flag.
impl ZonedDateTime {
    /// Creates a `ZonedDateTime` for the wall clock `datetime` in the zone `zone_id`.
    pub fn try_new(datetime: LocalDateTime, zone_id: &str) -> TemporalResult<Self> {
        Self::try_new_with_provider(datetime, zone_id, &*TZ_PROVIDER)
    }

    /// Creates the `ZonedDateTime` that observes the instant `epoch_seconds` in the zone `zone_id`.
    pub fn from_epoch_seconds(
        epoch_seconds: i64,
        nanosecond: u32,
        zone_id: &str,
    ) -> TemporalResult<Self> {
        Self::from_epoch_seconds_with_provider(epoch_seconds, nanosecond, zone_id, &*TZ_PROVIDER)
    }
}
