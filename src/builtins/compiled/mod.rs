//! This module implements the methods that use the bundled time zone database.
//!
//! Enable with the `compiled_data` feature flag.

mod timezone;
mod zoneddatetime;

use bolt_tz_provider::TzdbProvider;
use std::sync::LazyLock;

/// The time zone provider backing the methods that do not take one.
pub static TZ_PROVIDER: LazyLock<TzdbProvider> = LazyLock::new(TzdbProvider::default);
