//! This module implements `TemporalError`.

use alloc::borrow::Cow;
use alloc::format;
use core::fmt;

use bolt_tz_provider::TimeZoneProviderError;

/// `TemporalError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// A temporal value was constructed with an out of range field.
    Range,
    /// A time zone identifier is absent from the time zone database.
    UnknownZone,
    /// A structure tag that does not designate a supported value.
    UnsupportedType,
    /// A recognized structure with the wrong arity, field types, or field ranges.
    MalformedValue,
    /// Unexpected internal state.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::UnknownZone => "UnknownZoneError",
            Self::UnsupportedType => "UnsupportedTypeError",
            Self::MalformedValue => "MalformedValueError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `bolt_temporal`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl TemporalError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an unknown time zone error.
    #[inline]
    #[must_use]
    pub const fn unknown_zone() -> Self {
        Self::new(ErrorKind::UnknownZone)
    }

    /// Create an unsupported type error.
    #[inline]
    #[must_use]
    pub const fn unsupported_type() -> Self {
        Self::new(ErrorKind::UnsupportedType)
    }

    /// Create a malformed value error.
    #[inline]
    #[must_use]
    pub const fn malformed() -> Self {
        Self::new(ErrorKind::MalformedValue)
    }

    /// Create an assertion error.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = ErrorMessage::String(msg.into());
        self
    }

    /// Add a predefined message to the error.
    #[inline]
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        self.msg.to_str()
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        match self.msg {
            ErrorMessage::String(s) => s,
            msg => Cow::Owned(msg.to_str().into()),
        }
    }
}

impl fmt::Display for TemporalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_str();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TemporalError {}

impl From<TimeZoneProviderError> for TemporalError {
    fn from(value: TimeZoneProviderError) -> Self {
        match value {
            TimeZoneProviderError::UnknownIdentifier => {
                Self::unknown_zone().with_enum(ErrorMessage::UnknownTimeZone)
            }
            TimeZoneProviderError::Range(msg) => Self::range().with_message(msg),
            TimeZoneProviderError::Data(msg) => {
                Self::general(format!("time zone data could not be read: {msg}"))
            }
        }
    }
}

/// The messages `bolt_temporal` reports for its common failures.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorMessage {
    // Range
    DateOutOfRange,
    TimeOutOfRange,
    NanosecondOutOfRange,
    OffsetOutOfRange,
    InstantOutOfRange,

    // Time zones
    UnknownTimeZone,

    // Decoding
    UnsupportedTag,
    FieldCount,
    FieldType,

    None,
    String(Cow<'static, str>),
}

impl ErrorMessage {
    pub fn to_str(&self) -> &str {
        match self {
            Self::DateOutOfRange => "Date is not within a valid range.",
            Self::TimeOutOfRange => "Time is not within a valid range.",
            Self::NanosecondOutOfRange => "nanosecond must be within 0..=999999999.",
            Self::OffsetOutOfRange => "UTC offset must be within -18:00..=+18:00.",
            Self::InstantOutOfRange => "Instant is not within a valid range.",
            Self::UnknownTimeZone => "Time zone identifier does not exist.",
            Self::UnsupportedTag => "Structure tag is not a supported value type.",
            Self::FieldCount => "Structure has the wrong number of fields.",
            Self::FieldType => "Structure field has the wrong type.",
            Self::None => "",
            Self::String(s) => s,
        }
    }
}
