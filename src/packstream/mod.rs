//! Marshaling of temporal values to and from PackStream structures.
//!
//! A temporal value travels as a [`Structure`]: a one byte tag naming its
//! kind and a fixed list of fields.
//!
//! | Kind             | Tag | Fields                                  |
//! |------------------|-----|-----------------------------------------|
//! | `Duration`       | `E` | months, days, seconds, nanoseconds      |
//! | `Date`           | `D` | epoch day                               |
//! | `LocalTime`      | `t` | nanosecond of day                       |
//! | `OffsetTime`     | `T` | nanosecond of day, offset seconds       |
//! | `LocalDateTime`  | `d` | local epoch second, nanosecond          |
//! | `OffsetDateTime` | `F` | epoch second, nanosecond, offset seconds|
//! | `ZonedDateTime`  | `f` | epoch second, nanosecond, zone id       |
//!
//! The epoch second of a `LocalDateTime` is its wall clock read as if it
//! were UTC. For `OffsetDateTime` and `ZonedDateTime` it is the UTC instant.
//! A zoned value never carries its offset; the decoder derives it again
//! from the zone rules.

mod decode;
mod encode;

use alloc::{collections::BTreeMap, string::String, vec::Vec};

#[cfg(feature = "compiled_data")]
pub use decode::decode;
pub use decode::{decode_structure_with_provider, decode_with_provider};
pub use encode::{encode, encode_temporal};

/// The structure tag of a `Duration`.
pub const DURATION: u8 = b'E';
/// The structure tag of a `Date`.
pub const DATE: u8 = b'D';
/// The structure tag of a `LocalTime`.
pub const LOCAL_TIME: u8 = b't';
/// The structure tag of an `OffsetTime`.
pub const OFFSET_TIME: u8 = b'T';
/// The structure tag of a `LocalDateTime`.
pub const LOCAL_DATE_TIME: u8 = b'd';
/// The structure tag of an `OffsetDateTime`.
pub const OFFSET_DATE_TIME: u8 = b'F';
/// The structure tag of a `ZonedDateTime`.
pub const ZONED_DATE_TIME: u8 = b'f';

/// A tagged PackStream structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub tag: u8,
    pub fields: Vec<PackValue>,
}

impl Structure {
    #[inline]
    #[must_use]
    pub fn new(tag: u8, fields: Vec<PackValue>) -> Self {
        Self { tag, fields }
    }
}

/// A value in its wire representation.
#[derive(Debug, Clone, PartialEq)]
pub enum PackValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<PackValue>),
    Map(BTreeMap<String, PackValue>),
    Structure(Structure),
}

impl From<Structure> for PackValue {
    fn from(value: Structure) -> Self {
        Self::Structure(value)
    }
}
