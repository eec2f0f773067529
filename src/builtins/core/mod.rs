//! The native temporal value types.

pub(crate) mod date;
pub(crate) mod datetime;
pub(crate) mod duration;
pub(crate) mod offset_datetime;
pub(crate) mod offset_time;
pub(crate) mod time;
pub mod timezone;
pub(crate) mod zoneddatetime;

#[doc(inline)]
pub use date::Date;
#[doc(inline)]
pub use datetime::LocalDateTime;
#[doc(inline)]
pub use duration::Duration;
#[doc(inline)]
pub use offset_datetime::OffsetDateTime;
#[doc(inline)]
pub use offset_time::OffsetTime;
#[doc(inline)]
pub use time::LocalTime;
#[doc(inline)]
pub use zoneddatetime::ZonedDateTime;
