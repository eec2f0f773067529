//! This module implements ISO 8601 formatting, and parsing for UTC offsets.

use core::{iter::Peekable, str::Chars};

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{Sign, TemporalError, TemporalResult};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precision {
    /// Seconds are always written, the fraction only when non-zero.
    #[default]
    Auto,
    Minute,
}

#[derive(Debug)]
pub struct FormattableTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
    pub precision: Precision,
}

impl Writeable for FormattableTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute, sink)?;
        if self.precision == Precision::Minute {
            return Ok(());
        }
        sink.write_char(':')?;
        write_padded_u8(self.second, sink)?;
        if self.nanosecond == 0 {
            return Ok(());
        }
        sink.write_char('.')?;
        write_nanosecond(self.nanosecond, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.precision == Precision::Minute {
            return LengthHint::exact(5);
        }
        if self.nanosecond == 0 {
            return LengthHint::exact(8);
        }
        LengthHint::between(10, 18)
    }
}

#[derive(Debug)]
pub struct FormattableOffset {
    pub sign: Sign,
    pub time: FormattableTime,
}

impl FormattableOffset {
    /// Builds the `±HH:MM[:SS]` rendering of an offset in seconds.
    pub fn from_seconds(offset: i32) -> Self {
        let sign = Sign::from(offset.signum() as i8);
        let abs = offset.unsigned_abs();
        let second = (abs % 60) as u8;
        let precision = if second == 0 {
            Precision::Minute
        } else {
            Precision::Auto
        };
        Self {
            sign,
            time: FormattableTime {
                hour: (abs / 3600) as u8,
                minute: (abs % 3600 / 60) as u8,
                second,
                nanosecond: 0,
                precision,
            },
        }
    }
}

impl Writeable for FormattableOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match self.sign {
            Sign::Negative => sink.write_char('-')?,
            _ => sink.write_char('+')?,
        }
        self.time.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.time.writeable_length_hint() + 1
    }
}

#[derive(Debug)]
pub struct FormattableDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if (0..=9999).contains(&self.0) {
            return LengthHint::exact(10);
        }
        LengthHint::between(13, 16)
    }
}

#[derive(Debug)]
pub struct FormattableTimeZone<'a>(pub &'a str);

impl Writeable for FormattableTimeZone<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_char('[')?;
        sink.write_str(self.0)?;
        sink.write_char(']')
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(2 + self.0.len())
    }
}

/// An ISO 8601 date, time, or date-time with an optional offset and zone annotation.
#[derive(Debug, Default)]
pub struct FormattableIxdtf<'a> {
    pub date: Option<FormattableDate>,
    pub time: Option<FormattableTime>,
    pub offset: Option<FormattableOffset>,
    pub timezone: Option<FormattableTimeZone<'a>>,
}

impl Writeable for FormattableIxdtf<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if let Some(date) = &self.date {
            date.write_to(sink)?;
        }
        if let Some(time) = &self.time {
            if self.date.is_some() {
                sink.write_char('T')?;
            }
            time.write_to(sink)?;
        }
        if let Some(offset) = &self.offset {
            offset.write_to(sink)?;
        }
        if let Some(timezone) = &self.timezone {
            timezone.write_to(sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let date_length = self
            .date
            .as_ref()
            .map(|d| d.writeable_length_hint())
            .unwrap_or(LengthHint::exact(0));
        let time_length = self
            .time
            .as_ref()
            .map(|t| t.writeable_length_hint() + self.date.is_some() as usize)
            .unwrap_or(LengthHint::exact(0));
        let offset_length = self
            .offset
            .as_ref()
            .map(|o| o.writeable_length_hint())
            .unwrap_or(LengthHint::exact(0));
        let timezone_length = self
            .timezone
            .as_ref()
            .map(|tz| tz.writeable_length_hint())
            .unwrap_or(LengthHint::exact(0));

        date_length + time_length + offset_length + timezone_length
    }
}

/// A duration as `P{months}M{days}DT{seconds}[.{fraction}]S`.
///
/// Every component keeps its own sign. A negative seconds component with a
/// fraction is written as the decimal value of the sum, so `-2` seconds and
/// `250_000_000` nanoseconds render as `-1.75S`.
pub struct FormattableDuration {
    pub months: i64,
    pub days: i64,
    pub seconds: i64,
    pub nanosecond: u32,
}

impl Writeable for FormattableDuration {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_char('P')?;
        self.months.write_to(sink)?;
        sink.write_char('M')?;
        self.days.write_to(sink)?;
        sink.write_str("DT")?;

        let (seconds, nanosecond) = if self.seconds < 0 && self.nanosecond > 0 {
            (self.seconds + 1, 1_000_000_000 - self.nanosecond)
        } else {
            (self.seconds, self.nanosecond)
        };
        // -0.25 has no integral part to carry the sign.
        if seconds == 0 && self.seconds < 0 {
            sink.write_char('-')?;
        }
        seconds.write_to(sink)?;
        if nanosecond != 0 {
            sink.write_char('.')?;
            write_nanosecond(nanosecond, sink)?;
        }
        sink.write_char('S')
    }
}

impl_display_with_writeable!(FormattableIxdtf<'_>);
impl_display_with_writeable!(FormattableDuration);
impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableTime);
impl_display_with_writeable!(FormattableOffset);
impl_display_with_writeable!(FormattableTimeZone<'_>);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Writes the nanoseconds as a fraction without trailing zeros.
fn write_nanosecond<W: core::fmt::Write + ?Sized>(
    nanoseconds: u32,
    sink: &mut W,
) -> core::fmt::Result {
    let (digits, precision) = u32_to_digits(nanoseconds);
    write_digit_slice_to_precision(digits, 0, precision, sink)
}

/// Returns the nine decimal digits of `value` and the index after its last non-zero digit.
pub fn u32_to_digits(mut value: u32) -> ([u8; 9], usize) {
    let mut output = [0; 9];
    let mut precision = 0;
    let mut i = 9;
    while i != 0 {
        let v = (value % 10) as u8;
        value /= 10;
        if precision == 0 && v != 0 {
            precision = i;
        }
        output[i - 1] = v;
        i -= 1;
    }

    (output, precision)
}

pub fn write_digit_slice_to_precision<W: core::fmt::Write + ?Sized>(
    digits: [u8; 9],
    base: usize,
    precision: usize,
    sink: &mut W,
) -> core::fmt::Result {
    for digit in digits.iter().take(precision).skip(base) {
        digit.write_to(sink)?;
    }
    Ok(())
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        write_four_digit_year(year, sink)
    } else {
        write_extended_year(year, sink)
    }
}

fn write_four_digit_year<W: core::fmt::Write + ?Sized>(
    mut y: i32,
    sink: &mut W,
) -> core::fmt::Result {
    (y / 1_000).write_to(sink)?;
    y %= 1_000;
    (y / 100).write_to(sink)?;
    y %= 100;
    (y / 10).write_to(sink)?;
    y %= 10;
    y.write_to(sink)
}

/// Writes a signed year of at least six digits.
fn write_extended_year<W: core::fmt::Write + ?Sized>(y: i32, sink: &mut W) -> core::fmt::Result {
    let sign = if y < 0 { '-' } else { '+' };
    sink.write_char(sign)?;
    let (digits, _) = u32_to_digits(y.unsigned_abs());
    let leading = digits.iter().take_while(|d| **d == 0).count().min(3);
    write_digit_slice_to_precision(digits, leading, 9, sink)
}

// ==== Offset parsing ====

/// Parses `Z`, `±HH`, `±HH:MM`, `±HHMM`, `±HH:MM:SS`, or `±HHMMSS` into seconds east of UTC.
pub(crate) fn parse_offset_seconds(source: &str) -> TemporalResult<i32> {
    if source == "Z" || source == "z" {
        return Ok(0);
    }
    let mut chars = source.chars().peekable();
    let sign = match chars.next() {
        Some('+') => 1,
        Some('-') => -1,
        Some(_) => {
            return Err(TemporalError::range().with_message("UTC offset must start with a sign"))
        }
        None => return Err(abrupt_end()),
    };

    let hours = parse_digit_pair(&mut chars)?;
    let separated = chars.next_if_eq(&':').is_some();
    let minutes = parse_optional_component(&mut chars)?;
    if separated && minutes.is_none() {
        return Err(abrupt_end());
    }
    let seconds = match minutes {
        Some(_) if separated => match chars.next_if_eq(&':') {
            Some(_) => Some(parse_digit_pair(&mut chars)?),
            None => None,
        },
        Some(_) => parse_optional_component(&mut chars)?,
        None => None,
    };

    if chars.next().is_some() {
        return Err(TemporalError::range().with_message("Unexpected trailing offset characters"));
    }

    let minutes = minutes.unwrap_or(0);
    let seconds = seconds.unwrap_or(0);
    if minutes > 59 || seconds > 59 {
        return Err(TemporalError::range().with_message("UTC offset component out of range"));
    }

    Ok(sign * (hours * 3600 + minutes * 60 + seconds))
}

fn parse_optional_component(chars: &mut Peekable<Chars<'_>>) -> TemporalResult<Option<i32>> {
    match chars.peek() {
        Some(ch) if ch.is_ascii_digit() => parse_digit_pair(chars).map(Some),
        Some(':') | None => Ok(None),
        Some(_) => Err(non_ascii_digit()),
    }
}

fn parse_digit_pair(chars: &mut Peekable<Chars<'_>>) -> TemporalResult<i32> {
    let mut value = 0;
    for _ in 0..2 {
        let digit = chars
            .next()
            .ok_or_else(abrupt_end)?
            .to_digit(10)
            .ok_or_else(non_ascii_digit)?;
        value = value * 10 + digit as i32;
    }
    Ok(value)
}

fn abrupt_end() -> TemporalError {
    TemporalError::range().with_message("Abrupt end while parsing offset string")
}

fn non_ascii_digit() -> TemporalError {
    TemporalError::range().with_message("Non ascii digit found while parsing offset string")
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{
        parse_offset_seconds, FormattableDate, FormattableDuration, FormattableIxdtf,
        FormattableOffset, FormattableTime, FormattableTimeZone, Precision,
    };

    #[test]
    fn offsets() {
        assert_eq!(FormattableOffset::from_seconds(5400).to_string(), "+01:30");
        assert_eq!(FormattableOffset::from_seconds(-5400).to_string(), "-01:30");
        assert_eq!(FormattableOffset::from_seconds(0).to_string(), "+00:00");
        assert_eq!(FormattableOffset::from_seconds(64_800).to_string(), "+18:00");
        assert_eq!(FormattableOffset::from_seconds(-17_762).to_string(), "-04:56:02");
    }

    #[test]
    fn years() {
        assert_eq!(FormattableDate(1976, 6, 13).to_string(), "1976-06-13");
        assert_eq!(FormattableDate(5, 1, 1).to_string(), "0005-01-01");
        assert_eq!(FormattableDate(-44, 3, 15).to_string(), "-000044-03-15");
        assert_eq!(FormattableDate(10_000, 1, 1).to_string(), "+010000-01-01");
        assert_eq!(
            FormattableDate(-999_999_999, 1, 1).to_string(),
            "-999999999-01-01"
        );
    }

    #[test]
    fn times() {
        let time = FormattableTime {
            hour: 1,
            minute: 2,
            second: 3,
            nanosecond: 400_000_000,
            precision: Precision::Auto,
        };
        assert_eq!(time.to_string(), "01:02:03.4");
        let time = FormattableTime {
            hour: 23,
            minute: 59,
            second: 0,
            nanosecond: 0,
            precision: Precision::Auto,
        };
        assert_eq!(time.to_string(), "23:59:00");
    }

    #[test]
    fn zoned_datetime() {
        let ixdtf = FormattableIxdtf {
            date: Some(FormattableDate(1959, 5, 31)),
            time: Some(FormattableTime {
                hour: 23,
                minute: 49,
                second: 59,
                nanosecond: 999_999_999,
                precision: Precision::Auto,
            }),
            offset: Some(FormattableOffset::from_seconds(3600)),
            timezone: Some(FormattableTimeZone("Europe/London")),
        };
        assert_eq!(
            ixdtf.to_string(),
            "1959-05-31T23:49:59.999999999+01:00[Europe/London]"
        );
    }

    #[test]
    fn durations() {
        let duration = FormattableDuration {
            months: 14,
            days: 35,
            seconds: 75,
            nanosecond: 789_012_587,
        };
        assert_eq!(duration.to_string(), "P14M35DT75.789012587S");

        let duration = FormattableDuration {
            months: -1,
            days: 0,
            seconds: -2,
            nanosecond: 250_000_000,
        };
        assert_eq!(duration.to_string(), "P-1M0DT-1.75S");

        let duration = FormattableDuration {
            months: 0,
            days: 0,
            seconds: -1,
            nanosecond: 750_000_000,
        };
        assert_eq!(duration.to_string(), "P0M0DT-0.25S");
    }

    #[test]
    fn parse_offsets() {
        assert_eq!(parse_offset_seconds("Z").unwrap(), 0);
        assert_eq!(parse_offset_seconds("+01:30").unwrap(), 5400);
        assert_eq!(parse_offset_seconds("-0130").unwrap(), -5400);
        assert_eq!(parse_offset_seconds("+05").unwrap(), 18_000);
        assert_eq!(parse_offset_seconds("-04:56:02").unwrap(), -17_762);
        assert_eq!(parse_offset_seconds("+045602").unwrap(), 17_762);

        assert!(parse_offset_seconds("").is_err());
        assert!(parse_offset_seconds("01:30").is_err());
        assert!(parse_offset_seconds("+1:30").is_err());
        assert!(parse_offset_seconds("+01:").is_err());
        assert!(parse_offset_seconds("+01:60").is_err());
        assert!(parse_offset_seconds("+0130:00").is_err());
        assert!(parse_offset_seconds("+01:30x").is_err());
        assert!(parse_offset_seconds("+01:3000").is_err());
        assert!(parse_offset_seconds("+01:30:").is_err());
    }
}
