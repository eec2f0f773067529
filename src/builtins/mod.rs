pub(crate) mod core;

#[cfg(feature = "compiled_data")]
mod compiled;

#[cfg(feature = "compiled_data")]
pub use compiled::TZ_PROVIDER;

pub use self::core::*;
