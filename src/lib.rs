//! The `bolt_temporal` crate implements the temporal value types of a graph
//! database's binary protocol, along with their marshaling to and from the
//! protocol's tagged structures.
//!
//! ```rust
//! use bolt_temporal::{packstream, Duration, Value};
//!
//! let duration = Duration::try_new(16, 45, 120, 187_309_812).unwrap();
//! assert_eq!(duration.milliseconds_of_second(), 187);
//!
//! let encoded = packstream::encode(&Value::from(duration));
//! let decoded = packstream::decode(&encoded).unwrap();
//! assert_eq!(decoded, Value::from(duration));
//! ```
//!
//! Seven kinds of temporal values are supported: [`Duration`], [`Date`],
//! [`LocalTime`], [`OffsetTime`], [`LocalDateTime`], [`OffsetDateTime`], and
//! [`ZonedDateTime`]. Every value carries nanosecond precision, and values
//! round trip exactly through [`packstream::encode`] and
//! [`packstream::decode`].
//!
//! Named time zones are resolved through a [`provider::TimeZoneProvider`].
//! With the `compiled_data` feature, a process wide provider over the
//! embedded IANA time zone database is used by the methods that do not take
//! a provider argument.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod iso;
pub mod packstream;
pub mod parsers;
pub mod provider;
pub mod value;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod builtins;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::TemporalError;

/// The `bolt_temporal` result type
pub type TemporalResult<T> = Result<T, TemporalError>;

pub use crate::builtins::{
    core::timezone::{TimeZone, UtcOffset},
    Date, Duration, LocalDateTime, LocalTime, OffsetDateTime, OffsetTime, ZonedDateTime,
};

#[cfg(feature = "compiled_data")]
pub use crate::builtins::TZ_PROVIDER;

pub use crate::value::{TemporalValue, Value};

/// A library specific trait for unwrapping assertions.
pub(crate) trait TemporalUnwrap {
    type Output;

    /// `bolt_temporal` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error during runtime.
    fn temporal_unwrap(self) -> TemporalResult<Self::Output>;
}

impl<T> TemporalUnwrap for Option<T> {
    type Output = T;

    fn temporal_unwrap(self) -> TemporalResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(TemporalError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! temporal_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err(TemporalError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err(TemporalError::assert());
        }
    };
}

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

// Relevant numeric constants
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: i64 = 1_000_000_000;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: i64 = SECONDS_PER_DAY * NS_PER_SECOND;
/// Seconds per day constant: 86400
pub const SECONDS_PER_DAY: i64 = 86_400;
