use crate::{builtins::TZ_PROVIDER, LocalDateTime, TemporalResult, TimeZone, UtcOffset};

impl TimeZone {
    /// Creates a named `TimeZone`, normalizing `identifier` to its database spelling.
    ///
    /// Enable with the `compiled_data` feature flag.
    pub fn try_named(identifier: &str) -> TemporalResult<Self> {
        Self::try_named_with_provider(identifier, &*TZ_PROVIDER)
    }

    /// Returns the offset in effect at `epoch_seconds`.
    ///
    /// Enable with the `compiled_data` feature flag.
    pub fn offset_for_epoch_seconds(&self, epoch_seconds: i64) -> TemporalResult<UtcOffset> {
        self.offset_for_epoch_seconds_with_provider(epoch_seconds, &*TZ_PROVIDER)
    }

    /// Returns the offset in effect for the wall clock `local` in this time zone.
    ///
    /// Enable with the `compiled_data` feature flag.
    pub fn offset_for_local(&self, local: &LocalDateTime) -> TemporalResult<UtcOffset> {
        self.offset_for_local_with_provider(local, &*TZ_PROVIDER)
    }
}
