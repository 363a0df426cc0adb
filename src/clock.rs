//! # Millisecond Clock
//!
//! Field cells timestamp every commit so callers can ask how old a value is.
//! The clock is a type parameter rather than a value: on embedded targets the
//! tick counter is a global, and this keeps `age()` argument-free.

/// A monotonic millisecond counter with an arbitrary epoch.
///
/// The counter is allowed to wrap; ages are computed with wrapping
/// subtraction.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::Clock;
///
/// struct Frozen;
///
/// impl Clock for Frozen {
///     fn now_millis() -> u32 {
///         42
///     }
/// }
///
/// assert_eq!(Frozen::now_millis(), 42);
/// ```
pub trait Clock {
    /// Returns the current time in milliseconds.
    fn now_millis() -> u32;
}

/// Milliseconds elapsed since the clock was first read in this process.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdClock;

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_millis() -> u32 {
        use std::{sync::OnceLock, time::Instant};

        static START: OnceLock<Instant> = OnceLock::new();

        let start = START.get_or_init(Instant::now);
        start.elapsed().as_millis() as u32
    }
}
