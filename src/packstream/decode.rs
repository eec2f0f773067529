use alloc::{collections::BTreeMap, string::String, vec::Vec};

use num_traits::ToPrimitive;

use super::{
    PackValue, Structure, DATE, DURATION, LOCAL_DATE_TIME, LOCAL_TIME, OFFSET_DATE_TIME,
    OFFSET_TIME, ZONED_DATE_TIME,
};
use crate::{
    error::{ErrorKind, ErrorMessage},
    provider::TimeZoneProvider,
    Date, Duration, LocalDateTime, LocalTime, OffsetDateTime, OffsetTime, TemporalError,
    TemporalResult, TemporalValue, UtcOffset, Value, ZonedDateTime,
};

/// Decodes a wire value using the bundled time zone database.
///
/// Enable with the `compiled_data` feature flag.
#[cfg(feature = "compiled_data")]
pub fn decode(value: &PackValue) -> TemporalResult<Value> {
    decode_with_provider(value, &*crate::builtins::TZ_PROVIDER)
}

/// Decodes a wire value, resolving zoned values through `provider`.
///
/// Lists and maps are decoded element by element, and the first element
/// that fails aborts the whole value.
pub fn decode_with_provider(
    value: &PackValue,
    provider: &(impl TimeZoneProvider + ?Sized),
) -> TemporalResult<Value> {
    let value = match value {
        PackValue::Null => Value::Null,
        PackValue::Boolean(b) => Value::Boolean(*b),
        PackValue::Integer(i) => Value::Integer(*i),
        PackValue::Float(f) => Value::Float(*f),
        PackValue::String(s) => Value::String(s.clone()),
        PackValue::List(list) => Value::List(
            list.iter()
                .map(|element| decode_with_provider(element, provider))
                .collect::<TemporalResult<Vec<_>>>()?,
        ),
        PackValue::Map(map) => Value::Map(
            map.iter()
                .map(|(key, value)| Ok((key.clone(), decode_with_provider(value, provider)?)))
                .collect::<TemporalResult<BTreeMap<String, _>>>()?,
        ),
        PackValue::Structure(structure) => {
            Value::Temporal(decode_structure_with_provider(structure, provider)?)
        }
    };
    Ok(value)
}

/// Decodes a tagged structure into the temporal value it carries.
///
/// A tag that is not one of the temporal kinds fails with an
/// `UnsupportedType` error. Wrong field counts, field types, or out of
/// range fields fail with a `MalformedValue` error.
pub fn decode_structure_with_provider(
    structure: &Structure,
    provider: &(impl TimeZoneProvider + ?Sized),
) -> TemporalResult<TemporalValue> {
    let result = decode_fields(structure, provider);
    #[cfg(feature = "log")]
    let result = result.inspect_err(|err| {
        log::debug!(
            "rejected structure with tag {:#04x} and {} fields: {err}",
            structure.tag,
            structure.fields.len()
        );
    });
    result
}

fn decode_fields(
    structure: &Structure,
    provider: &(impl TimeZoneProvider + ?Sized),
) -> TemporalResult<TemporalValue> {
    let value = match structure.tag {
        DURATION => {
            let [months, days, seconds, nanoseconds] = fields::<4>(structure)?;
            let duration = Duration::try_new(
                integer(months)?,
                integer(days)?,
                integer(seconds)?,
                integer(nanoseconds)?.to_i32().ok_or(
                    TemporalError::malformed().with_enum(ErrorMessage::NanosecondOutOfRange),
                )?,
            );
            TemporalValue::Duration(malformed_on_range(duration)?)
        }
        DATE => {
            let [epoch_days] = fields::<1>(structure)?;
            let date = Date::from_epoch_days(integer(epoch_days)?);
            TemporalValue::Date(malformed_on_range(date)?)
        }
        LOCAL_TIME => {
            let [nanosecond_of_day] = fields::<1>(structure)?;
            TemporalValue::LocalTime(local_time(nanosecond_of_day)?)
        }
        OFFSET_TIME => {
            let [nanosecond_of_day, offset] = fields::<2>(structure)?;
            TemporalValue::OffsetTime(OffsetTime::new(
                local_time(nanosecond_of_day)?,
                utc_offset(offset)?,
            ))
        }
        LOCAL_DATE_TIME => {
            let [seconds, nanosecond] = fields::<2>(structure)?;
            let datetime = LocalDateTime::from_epoch_seconds(
                integer(seconds)?,
                nanosecond_of_second(nanosecond)?,
            );
            TemporalValue::LocalDateTime(malformed_on_range(datetime)?)
        }
        OFFSET_DATE_TIME => {
            let [seconds, nanosecond, offset] = fields::<3>(structure)?;
            let datetime = OffsetDateTime::from_epoch_seconds(
                integer(seconds)?,
                nanosecond_of_second(nanosecond)?,
                utc_offset(offset)?,
            );
            TemporalValue::OffsetDateTime(malformed_on_range(datetime)?)
        }
        ZONED_DATE_TIME => {
            let [seconds, nanosecond, zone_id] = fields::<3>(structure)?;
            let PackValue::String(zone_id) = zone_id else {
                return Err(field_type());
            };
            let datetime = ZonedDateTime::from_epoch_seconds_with_provider(
                integer(seconds)?,
                nanosecond_of_second(nanosecond)?,
                zone_id,
                provider,
            );
            TemporalValue::ZonedDateTime(malformed_on_range(datetime)?)
        }
        tag => {
            return Err(TemporalError::unsupported_type().with_message(alloc::format!(
                "{} Found tag {:#04x}.",
                ErrorMessage::UnsupportedTag.to_str(),
                tag
            )))
        }
    };
    Ok(value)
}

fn fields<const N: usize>(structure: &Structure) -> TemporalResult<&[PackValue; N]> {
    <&[PackValue; N]>::try_from(structure.fields.as_slice()).map_err(|_| {
        TemporalError::malformed().with_message(alloc::format!(
            "{} Expected {N}, found {}.",
            ErrorMessage::FieldCount.to_str(),
            structure.fields.len()
        ))
    })
}

fn integer(field: &PackValue) -> TemporalResult<i64> {
    match field {
        PackValue::Integer(i) => Ok(*i),
        _ => Err(field_type()),
    }
}

fn nanosecond_of_second(field: &PackValue) -> TemporalResult<u32> {
    let nanosecond = integer(field)?;
    nanosecond
        .to_u32()
        .filter(|ns| *ns < 1_000_000_000)
        .ok_or(TemporalError::malformed().with_enum(ErrorMessage::NanosecondOutOfRange))
}

fn local_time(field: &PackValue) -> TemporalResult<LocalTime> {
    malformed_on_range(LocalTime::from_nanosecond_of_day(integer(field)?))
}

fn utc_offset(field: &PackValue) -> TemporalResult<UtcOffset> {
    let seconds = integer(field)?
        .to_i32()
        .ok_or(TemporalError::malformed().with_enum(ErrorMessage::OffsetOutOfRange))?;
    malformed_on_range(UtcOffset::from_seconds(seconds))
}

fn field_type() -> TemporalError {
    TemporalError::malformed().with_enum(ErrorMessage::FieldType)
}

/// Reports a field outside the range of its kind as a malformed value.
/// Other errors, like an unknown zone, pass through unchanged.
fn malformed_on_range<T>(result: TemporalResult<T>) -> TemporalResult<T> {
    result.map_err(|err| match err.kind() {
        ErrorKind::Range => TemporalError::malformed().with_message(err.into_message()),
        _ => err,
    })
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec, vec::Vec};

    use bolt_tz_provider::TzdbProvider;

    use super::decode_with_provider;
    use crate::{
        error::ErrorKind,
        packstream::{PackValue, Structure},
        Date, Duration, LocalTime, OffsetTime, TemporalValue, Value, ZonedDateTime,
    };

    fn structure(tag: u8, fields: Vec<PackValue>) -> PackValue {
        PackValue::Structure(Structure::new(tag, fields))
    }

    fn int(i: i64) -> PackValue {
        PackValue::Integer(i)
    }

    fn zone(id: &str) -> PackValue {
        PackValue::String(id.into())
    }

    #[test]
    fn decodes_each_kind() {
        let provider = &TzdbProvider::default();

        let value = decode_with_provider(
            &structure(b'E', vec![int(16), int(45), int(120), int(187_309_812)]),
            provider,
        )
        .unwrap();
        assert_eq!(
            value,
            Value::from(Duration::try_new(16, 45, 120, 187_309_812).unwrap())
        );

        let value = decode_with_provider(&structure(b'D', vec![int(11_017)]), provider).unwrap();
        assert_eq!(value, Value::from(Date::try_new(2000, 3, 1).unwrap()));

        let value = decode_with_provider(
            &structure(b'T', vec![int(45_296_789_012_587), int(5400)]),
            provider,
        )
        .unwrap();
        assert_eq!(
            value,
            Value::from(OffsetTime::try_new(12, 34, 56, 789_012_587, 5400).unwrap())
        );

        let value = decode_with_provider(
            &structure(
                b'f',
                vec![
                    int(-334_113_001),
                    int(999_999_999),
                    PackValue::String("Europe/London".into()),
                ],
            ),
            provider,
        )
        .unwrap();
        let Value::Temporal(TemporalValue::ZonedDateTime(zdt)) = value else {
            panic!("expected a zoned value");
        };
        assert_eq!(zdt.offset().seconds(), 3600);
        assert_eq!(zdt.hour(), 23);
        assert_eq!(zdt.minute(), 49);
    }

    #[test]
    fn unknown_tags_are_unsupported() {
        let provider = &TzdbProvider::default();
        for tag in [b'N', b'R', b'r', b'P', b'X', b'Y'] {
            let err = decode_with_provider(&structure(tag, Vec::new()), provider).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedType);
        }
    }

    #[test]
    fn malformed_fields() {
        let provider = &TzdbProvider::default();
        let malformed = [
            structure(b'D', Vec::new()),
            structure(b'D', vec![int(1), int(2)]),
            structure(b'D', vec![PackValue::String("1".into())]),
            structure(b'D', vec![int(i64::MAX)]),
            structure(b't', vec![int(86_400_000_000_000)]),
            structure(b't', vec![int(-1)]),
            structure(b'T', vec![int(0), int(64_801)]),
            structure(b'T', vec![int(0), int(i64::from(i32::MAX) + 1)]),
            structure(b'd', vec![int(0), int(1_000_000_000)]),
            structure(b'd', vec![int(0), int(-1)]),
            structure(b'F', vec![int(i64::MAX), int(0), int(3600)]),
            structure(b'E', vec![int(0), int(0), int(0), int(-1)]),
            structure(b'f', vec![int(0), int(0), int(0)]),
            structure(b'f', vec![int(i64::MIN), int(0), zone("Etc/GMT+3")]),
            structure(b'f', vec![int(i64::MAX), int(0), zone("Europe/Berlin")]),
            structure(b'f', vec![int(i64::MAX), int(0), zone("Europe/London")]),
        ];
        for value in &malformed {
            let err = decode_with_provider(value, provider).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedValue, "{value:?}");
        }
    }

    #[test]
    fn unknown_zone() {
        let provider = &TzdbProvider::default();
        let value = structure(
            b'f',
            vec![int(0), int(0), PackValue::String("Moon/Tranquility".into())],
        );
        let err = decode_with_provider(&value, provider).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownZone);
    }

    #[test]
    fn first_failure_aborts_containers() {
        let provider = &TzdbProvider::default();
        let list = PackValue::List(vec![
            structure(b'D', vec![int(0)]),
            structure(b't', vec![int(-5)]),
            structure(b'N', Vec::new()),
        ]);
        let err = decode_with_provider(&list, provider).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedValue);

        let mut map = alloc::collections::BTreeMap::new();
        map.insert(String::from("when"), structure(b'N', Vec::new()));
        let err = decode_with_provider(&PackValue::Map(map), provider).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    }

    #[test]
    fn zoned_repeated_wall_clock_round_trips() {
        let provider = &TzdbProvider::default();
        let second = ZonedDateTime::from_epoch_seconds_with_provider(
            1_509_863_400,
            0,
            "America/New_York",
            provider,
        )
        .unwrap();
        let value = decode_with_provider(
            &structure(
                b'f',
                vec![
                    int(1_509_863_400),
                    int(0),
                    PackValue::String("America/New_York".into()),
                ],
            ),
            provider,
        )
        .unwrap();
        assert_eq!(value, Value::from(second));
        assert_eq!(
            decode_with_provider(&structure(b't', vec![int(0)]), provider).unwrap(),
            Value::from(LocalTime::try_new(0, 0, 0, 0).unwrap())
        );
    }
}
