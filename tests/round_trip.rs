use std::collections::BTreeMap;

use bolt_temporal::{
    error::ErrorKind,
    iso::{MAX_EPOCH_DAYS, MIN_EPOCH_DAYS},
    packstream::{decode, encode, PackValue, Structure},
    Date, Duration, LocalDateTime, LocalTime, OffsetDateTime, OffsetTime, TemporalValue,
    UtcOffset, Value, ZonedDateTime, NS_PER_DAY,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const ZONES: [&str; 8] = [
    "UTC",
    "Europe/London",
    "Europe/Berlin",
    "America/New_York",
    "America/Aruba",
    "US/Pacific",
    "Asia/Kolkata",
    "Australia/Lord_Howe",
];

// 1800-01-01T00:00:00Z..2200-01-01T00:00:00Z
const MIN_ZONED_SECONDS: i64 = -5_364_662_400;
const MAX_ZONED_SECONDS: i64 = 7_258_118_400;

fn random_duration(rng: &mut impl Rng) -> Duration {
    Duration::try_new(
        rng.gen(),
        rng.gen(),
        rng.gen(),
        rng.gen_range(0..1_000_000_000),
    )
    .unwrap()
}

fn random_date(rng: &mut impl Rng) -> Date {
    Date::from_epoch_days(rng.gen_range(MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS)).unwrap()
}

fn random_local_time(rng: &mut impl Rng) -> LocalTime {
    LocalTime::from_nanosecond_of_day(rng.gen_range(0..NS_PER_DAY)).unwrap()
}

fn random_offset(rng: &mut impl Rng) -> UtcOffset {
    UtcOffset::from_seconds(rng.gen_range(-64_800..=64_800)).unwrap()
}

fn random_offset_time(rng: &mut impl Rng) -> OffsetTime {
    OffsetTime::new(random_local_time(rng), random_offset(rng))
}

fn random_local_date_time(rng: &mut impl Rng) -> LocalDateTime {
    LocalDateTime::new(random_date(rng), random_local_time(rng))
}

fn random_offset_date_time(rng: &mut impl Rng) -> OffsetDateTime {
    OffsetDateTime::new(random_local_date_time(rng), random_offset(rng))
}

fn random_zoned_date_time(rng: &mut impl Rng) -> ZonedDateTime {
    let zone = ZONES[rng.gen_range(0..ZONES.len())];
    ZonedDateTime::from_epoch_seconds(
        rng.gen_range(MIN_ZONED_SECONDS..MAX_ZONED_SECONDS),
        rng.gen_range(0..1_000_000_000),
        zone,
    )
    .unwrap()
}

fn random_temporal(rng: &mut impl Rng) -> TemporalValue {
    match rng.gen_range(0..7) {
        0 => random_duration(rng).into(),
        1 => random_date(rng).into(),
        2 => random_local_time(rng).into(),
        3 => random_offset_time(rng).into(),
        4 => random_local_date_time(rng).into(),
        5 => random_offset_date_time(rng).into(),
        _ => random_zoned_date_time(rng).into(),
    }
}

fn assert_round_trip(value: &Value) {
    let decoded = decode(&encode(value)).unwrap();
    assert_eq!(&decoded, value);
}

fn assert_kind_round_trips<T>(seed: u64, mut generate: impl FnMut(&mut StdRng) -> T)
where
    T: Into<Value>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..500 {
        assert_round_trip(&generate(&mut rng).into());
    }

    let mut sizes = vec![0, 1, 1000];
    sizes.push(rng.gen_range(2..1000));
    for size in sizes {
        let list: Vec<Value> = (0..size).map(|_| generate(&mut rng).into()).collect();
        assert_round_trip(&Value::List(list));
    }
}

#[test]
fn durations_round_trip() {
    assert_kind_round_trips(0xE, random_duration);
}

#[test]
fn dates_round_trip() {
    assert_kind_round_trips(0xD, random_date);
}

#[test]
fn local_times_round_trip() {
    assert_kind_round_trips(0x74, random_local_time);
}

#[test]
fn offset_times_round_trip() {
    assert_kind_round_trips(0x54, random_offset_time);
}

#[test]
fn local_date_times_round_trip() {
    assert_kind_round_trips(0x64, random_local_date_time);
}

#[test]
fn offset_date_times_round_trip() {
    assert_kind_round_trips(0x46, random_offset_date_time);
}

#[test]
fn zoned_date_times_round_trip() {
    assert_kind_round_trips(0x66, random_zoned_date_time);
}

#[test]
fn zoned_wall_clocks_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x6677);
    for _ in 0..500 {
        let zone = ZONES[rng.gen_range(0..ZONES.len())];
        let epoch_days = rng.gen_range(-62_000..84_000);
        let local = LocalDateTime::new(
            Date::from_epoch_days(epoch_days).unwrap(),
            random_local_time(&mut rng),
        );
        let zoned = ZonedDateTime::try_new(local, zone).unwrap();
        let decoded = decode(&encode(&zoned.clone().into())).unwrap();
        let Value::Temporal(TemporalValue::ZonedDateTime(decoded)) = decoded else {
            panic!("expected a zoned value");
        };
        assert_eq!(decoded.epoch_seconds(), zoned.epoch_seconds());
        assert_eq!(decoded.nanosecond(), zoned.nanosecond());
        assert_eq!(decoded.zone_id(), zoned.zone_id());
        assert_eq!(decoded.offset(), zoned.offset());
        assert_eq!(decoded, zoned);
    }
}

#[test]
fn mixed_containers_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut map = BTreeMap::new();
    for i in 0..100 {
        map.insert(format!("field{i}"), Value::from(random_temporal(&mut rng)));
    }
    map.insert("name".into(), Value::from("Alice"));
    map.insert("age".into(), Value::from(33i64));
    map.insert("score".into(), Value::from(0.5));
    map.insert("active".into(), Value::from(true));
    map.insert("nothing".into(), Value::Null);
    map.insert("empty_list".into(), Value::List(Vec::new()));
    map.insert("empty_map".into(), Value::Map(BTreeMap::new()));

    let nested: Vec<Value> = (0..rng.gen_range(0..=1000))
        .map(|_| Value::from(random_temporal(&mut rng)))
        .collect();
    map.insert("nested".into(), Value::List(nested));

    assert_round_trip(&Value::Map(map));
    assert_round_trip(&Value::List(Vec::new()));
    assert_round_trip(&Value::Map(BTreeMap::new()));
}

#[test]
fn boundaries() {
    let values = [
        Value::from(LocalTime::try_new(0, 0, 0, 0).unwrap()),
        Value::from(LocalTime::try_new(23, 59, 59, 999_999_999).unwrap()),
        Value::from(OffsetTime::try_new(12, 0, 0, 0, 64_800).unwrap()),
        Value::from(OffsetTime::try_new(12, 0, 0, 999_999_999, -64_800).unwrap()),
        Value::from(
            OffsetDateTime::try_new(2000, 1, 1, 0, 0, 0, 0, -64_800).unwrap(),
        ),
        Value::from(Date::from_epoch_days(MIN_EPOCH_DAYS).unwrap()),
        Value::from(Date::from_epoch_days(MAX_EPOCH_DAYS).unwrap()),
        Value::from(Duration::try_new(0, 0, 0, 0).unwrap()),
        Value::from(Duration::try_new(-1, -1, -1, 999_999_999).unwrap()),
    ];
    for value in &values {
        assert_round_trip(value);
    }
}

#[test]
fn duration_wire_fields() {
    let duration = Duration::try_new(16, 45, 120, 187_309_812).unwrap();
    assert_eq!(duration.milliseconds_of_second(), 187);
    assert_eq!(duration.microseconds_of_second(), 187_309);
    assert_eq!(duration.nanoseconds_of_second(), 187_309_812);
    assert_eq!(
        encode(&duration.into()),
        PackValue::Structure(Structure::new(
            b'E',
            vec![
                PackValue::Integer(16),
                PackValue::Integer(45),
                PackValue::Integer(120),
                PackValue::Integer(187_309_812),
            ]
        ))
    );
}

#[test]
fn historical_zone_offsets_on_the_wire() {
    let local = LocalDateTime::try_new(1959, 5, 31, 23, 49, 59, 999_999_999).unwrap();
    for (zone, epoch_seconds, offset) in [
        ("Europe/London", -334_113_001, 3600),
        ("US/Pacific", -334_084_201, -25_200),
    ] {
        let zoned = ZonedDateTime::try_new(local, zone).unwrap();
        assert_eq!(zoned.offset().seconds(), offset);
        let encoded = encode(&zoned.clone().into());
        assert_eq!(
            encoded,
            PackValue::Structure(Structure::new(
                b'f',
                vec![
                    PackValue::Integer(epoch_seconds),
                    PackValue::Integer(999_999_999),
                    PackValue::String(zone.into()),
                ]
            ))
        );
        assert_eq!(decode(&encoded).unwrap(), Value::from(zoned));
    }
}

#[test]
fn failures() {
    let local = LocalDateTime::try_new(2020, 1, 1, 0, 0, 0, 0).unwrap();
    let err = ZonedDateTime::try_new(local, "Nowhere/Special").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownZone);

    let err = decode(&PackValue::Structure(Structure::new(b'N', Vec::new()))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedType);

    let err = LocalTime::try_new(24, 0, 0, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let hour_24 = PackValue::Structure(Structure::new(
        b't',
        vec![PackValue::Integer(NS_PER_DAY)],
    ));
    let err = decode(&hour_24).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedValue);
}
