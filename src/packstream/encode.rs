use alloc::{string::String, vec, vec::Vec};

use super::{
    PackValue, Structure, DATE, DURATION, LOCAL_DATE_TIME, LOCAL_TIME, OFFSET_DATE_TIME,
    OFFSET_TIME, ZONED_DATE_TIME,
};
use crate::{TemporalValue, Value};

/// Encodes a `Value` into its wire representation.
///
/// Lists and maps are encoded element by element. Encoding cannot fail:
/// every constructed value already satisfies the range of its fields.
#[must_use]
pub fn encode(value: &Value) -> PackValue {
    match value {
        Value::Null => PackValue::Null,
        Value::Boolean(b) => PackValue::Boolean(*b),
        Value::Integer(i) => PackValue::Integer(*i),
        Value::Float(f) => PackValue::Float(*f),
        Value::String(s) => PackValue::String(s.clone()),
        Value::List(list) => PackValue::List(list.iter().map(encode).collect()),
        Value::Map(map) => PackValue::Map(
            map.iter()
                .map(|(key, value)| (key.clone(), encode(value)))
                .collect(),
        ),
        Value::Temporal(temporal) => PackValue::Structure(encode_temporal(temporal)),
    }
}

/// Encodes a temporal value into its tagged structure.
#[must_use]
pub fn encode_temporal(value: &TemporalValue) -> Structure {
    match value {
        TemporalValue::Duration(duration) => Structure::new(
            DURATION,
            integers([
                duration.months(),
                duration.days(),
                duration.seconds(),
                i64::from(duration.nanoseconds()),
            ]),
        ),
        TemporalValue::Date(date) => Structure::new(DATE, integers([date.to_epoch_days()])),
        TemporalValue::LocalTime(time) => {
            Structure::new(LOCAL_TIME, integers([time.to_nanosecond_of_day()]))
        }
        TemporalValue::OffsetTime(time) => Structure::new(
            OFFSET_TIME,
            integers([
                time.time().to_nanosecond_of_day(),
                i64::from(time.offset().seconds()),
            ]),
        ),
        TemporalValue::LocalDateTime(datetime) => Structure::new(
            LOCAL_DATE_TIME,
            integers([
                datetime.to_epoch_seconds(),
                i64::from(datetime.nanosecond()),
            ]),
        ),
        TemporalValue::OffsetDateTime(datetime) => Structure::new(
            OFFSET_DATE_TIME,
            integers([
                datetime.epoch_seconds(),
                i64::from(datetime.nanosecond()),
                i64::from(datetime.offset().seconds()),
            ]),
        ),
        TemporalValue::ZonedDateTime(datetime) => Structure::new(
            ZONED_DATE_TIME,
            vec![
                PackValue::Integer(datetime.epoch_seconds()),
                PackValue::Integer(i64::from(datetime.nanosecond())),
                PackValue::String(String::from(datetime.zone_id())),
            ],
        ),
    }
}

fn integers<const N: usize>(values: [i64; N]) -> Vec<PackValue> {
    values.into_iter().map(PackValue::Integer).collect()
}
