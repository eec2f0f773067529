//! The application side value model.
//!
//! [`Value`] is the closed set of values a query parameter or a record field
//! can hold. Temporal values are grouped under [`TemporalValue`].

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::{
    Date, Duration, LocalDateTime, LocalTime, OffsetDateTime, OffsetTime, ZonedDateTime,
};

/// One of the seven temporal kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemporalValue {
    Duration(Duration),
    Date(Date),
    LocalTime(LocalTime),
    OffsetTime(OffsetTime),
    LocalDateTime(LocalDateTime),
    OffsetDateTime(OffsetDateTime),
    ZonedDateTime(ZonedDateTime),
}

impl TemporalValue {
    /// Returns the name of the temporal kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Duration(_) => "Duration",
            Self::Date(_) => "Date",
            Self::LocalTime(_) => "LocalTime",
            Self::OffsetTime(_) => "OffsetTime",
            Self::LocalDateTime(_) => "LocalDateTime",
            Self::OffsetDateTime(_) => "OffsetDateTime",
            Self::ZonedDateTime(_) => "ZonedDateTime",
        }
    }
}

impl core::fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Duration(v) => v.fmt(f),
            Self::Date(v) => v.fmt(f),
            Self::LocalTime(v) => v.fmt(f),
            Self::OffsetTime(v) => v.fmt(f),
            Self::LocalDateTime(v) => v.fmt(f),
            Self::OffsetDateTime(v) => v.fmt(f),
            Self::ZonedDateTime(v) => v.fmt(f),
        }
    }
}

/// A value exchanged with the database.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Temporal(TemporalValue),
}

impl Value {
    /// Returns the temporal value held by this `Value`, if any.
    #[must_use]
    pub fn as_temporal(&self) -> Option<&TemporalValue> {
        match self {
            Self::Temporal(temporal) => Some(temporal),
            _ => None,
        }
    }
}

impl From<TemporalValue> for Value {
    fn from(value: TemporalValue) -> Self {
        Self::Temporal(value)
    }
}

macro_rules! impl_from_temporal {
    ($($kind:ident),+ $(,)?) => {
        $(
            impl From<$kind> for TemporalValue {
                fn from(value: $kind) -> Self {
                    Self::$kind(value)
                }
            }

            impl From<$kind> for Value {
                fn from(value: $kind) -> Self {
                    Self::Temporal(TemporalValue::$kind(value))
                }
            }
        )+
    };
}

impl_from_temporal!(
    Duration,
    Date,
    LocalTime,
    OffsetTime,
    LocalDateTime,
    OffsetDateTime,
    ZonedDateTime,
);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(value: BTreeMap<String, T>) -> Self {
        Self::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec, vec::Vec};

    use super::{TemporalValue, Value};
    use crate::{Date, Duration};

    #[test]
    fn conversions() {
        let date = Date::try_new(1994, 11, 15).unwrap();
        assert_eq!(
            Value::from(date),
            Value::Temporal(TemporalValue::Date(date))
        );
        assert_eq!(Value::from(date).as_temporal().map(TemporalValue::kind), Some("Date"));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from("x"), Value::String("x".into()));
        assert_eq!(
            Value::from(vec![1i64, 2]),
            Value::List(vec![Value::Integer(1), Value::Integer(2)])
        );
        assert_eq!(Value::from(Vec::<Value>::new()), Value::List(Vec::new()));
    }

    #[test]
    fn temporal_display() {
        let duration = Duration::try_new(14, 35, 75, 789_012_587).unwrap();
        assert_eq!(
            TemporalValue::from(duration).to_string(),
            "P14M35DT75.789012587S"
        );
    }
}
