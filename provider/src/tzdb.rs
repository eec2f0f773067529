//! A `TimeZoneProvider` over the TZif data embedded by `jiff-tzdb`.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock};

use crate::{
    provider::{
        CandidateEpochSeconds, IsoDateTime, TimeZoneProvider, TimeZoneProviderResult,
        UtcOffsetSeconds,
    },
    tzif::Tzif,
    TimeZoneProviderError,
};

/// A time zone provider backed by the IANA database bundled in `jiff-tzdb`.
///
/// Zones are parsed on first use and kept for the lifetime of the provider.
/// Lookups of an already parsed zone only take the shared side of the lock.
#[derive(Debug, Default)]
pub struct TzdbProvider {
    cache: RwLock<BTreeMap<&'static str, Arc<Tzif>>>,
}

impl TzdbProvider {
    /// Returns the parsed TZif data for `identifier`.
    ///
    /// Identifiers are matched case-insensitively.
    pub fn get(&self, identifier: &str) -> TimeZoneProviderResult<Arc<Tzif>> {
        let Some((canonical_name, data)) = jiff_tzdb::get(identifier) else {
            return Err(TimeZoneProviderError::UnknownIdentifier);
        };

        // Entries are never mutated after insertion, so a poisoned lock
        // still guards consistent data.
        if let Some(tzif) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(canonical_name)
        {
            return Ok(tzif.clone());
        }

        let tzif = Arc::new(Tzif::from_bytes(data)?);
        #[cfg(feature = "log")]
        log::debug!("parsed time zone data for {canonical_name}");

        Ok(self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(canonical_name)
            .or_insert(tzif)
            .clone())
    }
}

impl TimeZoneProvider for TzdbProvider {
    fn normalize_identifier<'a>(&'a self, ident: &'a str) -> TimeZoneProviderResult<Cow<'a, str>> {
        jiff_tzdb::get(ident)
            .map(|(canonical_name, _)| Cow::Borrowed(canonical_name))
            .ok_or(TimeZoneProviderError::UnknownIdentifier)
    }

    fn get_named_tz_epoch_seconds(
        &self,
        identifier: &str,
        local_datetime: IsoDateTime,
    ) -> TimeZoneProviderResult<CandidateEpochSeconds> {
        let tzif = self.get(identifier)?;
        tzif.candidates_for_local_seconds(local_datetime.as_local_epoch_seconds())
    }

    fn get_named_tz_offset(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> TimeZoneProviderResult<UtcOffsetSeconds> {
        let tzif = self.get(identifier)?;
        tzif.offset_for_epoch_seconds(epoch_seconds)
    }
}
