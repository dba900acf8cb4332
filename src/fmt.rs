//! Optional logging macros.
//!
//! Forward to `defmt` or `log` depending on the enabled feature, and compile
//! to nothing when neither backend is selected.

#![allow(unused_macros)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("features `defmt` and `log` are mutually exclusive");

#[cfg(feature = "defmt")]
macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => { ::defmt::info!($s $(, $x)*) };
}

#[cfg(feature = "log")]
macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => { ::log::info!($s $(, $x)*) };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {{ let _ = ($( & $x ),*); }};
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => { ::defmt::warn!($s $(, $x)*) };
}

#[cfg(feature = "log")]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => { ::log::warn!($s $(, $x)*) };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{ let _ = ($( & $x ),*); }};
}

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => { ::defmt::debug!($s $(, $x)*) };
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => { ::log::debug!($s $(, $x)*) };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{ let _ = ($( & $x ),*); }};
}
