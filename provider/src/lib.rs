//! Data providers for time zone data
//!
//! This crate provides the [`TimeZoneProvider`][provider::TimeZoneProvider]
//! trait used by `bolt_temporal` to resolve named time zones, along with a
//! TZif backed implementation over the embedded `jiff-tzdb` database.
//!
//! ```rust,ignore
//! use bolt_tz_provider::{provider::TimeZoneProvider, TzdbProvider};
//!
//! let provider = TzdbProvider::default();
//! let offset = provider
//!     .get_named_tz_offset("Europe/London", -334_113_001)
//!     .unwrap();
//! assert_eq!(offset.0, 3600);
//! ```
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod provider;
pub mod utils;

#[cfg(feature = "tzif")]
mod common;
#[cfg(feature = "tzif")]
pub mod tzdb;
#[cfg(feature = "tzif")]
pub mod tzif;

#[cfg(feature = "tzif")]
pub use tzdb::TzdbProvider;

/// An error that can be produced by a [`provider::TimeZoneProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneProviderError {
    /// The identifier is not present in the time zone database.
    UnknownIdentifier,
    /// The time zone data for an identifier could not be interpreted.
    Data(&'static str),
    /// A value handed to the provider was outside of its supported range.
    Range(&'static str),
}

impl core::fmt::Display for TimeZoneProviderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownIdentifier => f.write_str("time zone identifier does not exist"),
            Self::Data(msg) => write!(f, "invalid time zone data: {msg}"),
            Self::Range(msg) => write!(f, "value out of range: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeZoneProviderError {}
