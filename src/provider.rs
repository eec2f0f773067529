//! The `TimeZoneProvider` trait and the types it resolves to.

pub use bolt_tz_provider::provider::{
    CandidateEpochSeconds, EpochSecondsAndOffset, GapEntryOffsets, NeverProvider,
    TimeZoneProvider, TimeZoneProviderResult, UtcOffsetSeconds,
};
pub use bolt_tz_provider::TimeZoneProviderError;

#[cfg(feature = "compiled_data")]
pub use bolt_tz_provider::TzdbProvider;
