//! # Field Value Cells
//!
//! Every decoded quantity lives in a [`Field`]: a staged value that the decoder
//! writes while a sentence is still arriving, and a committed value that only
//! changes once the sentence's checksum has been verified.

mod datetime;
mod decimal;
mod location;

pub use datetime::{Date, Time};
pub use decimal::{
    Altitude, Course, FEET_PER_METER, Hdop, KM_PER_METER, KMPH_PER_KNOT, MILES_PER_METER,
    MPH_PER_KNOT, MPS_PER_KNOT, Speed,
};
pub use location::{FixMode, FixQuality, Location, RawDegrees};

use core::marker::PhantomData;

use crate::Clock;

/// A decoded value with checksum-gated visibility.
///
/// The committed value is the only externally visible state. It is replaced as
/// a whole by the staged value when the owning sentence validates, never piece
/// by piece while terms are being parsed.
///
/// Reading the value through [`Field::value`] (or any accessor derived from
/// it) clears the *updated* flag: a field reports [`Field::is_updated`] only
/// until somebody has looked at the new value.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{Clock, Decoder};
///
/// struct Zero;
/// impl Clock for Zero {
///     fn now_millis() -> u32 { 0 }
/// }
///
/// let mut gps: Decoder<Zero> = Decoder::new();
/// gps.feed_slice(b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n");
///
/// assert!(gps.satellites.is_updated());
/// assert_eq!(gps.satellites.value(), 8);
/// assert!(!gps.satellites.is_updated());
/// assert_eq!(gps.satellites.value(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Field<T, C> {
    committed: T,
    staged: T,
    valid: bool,
    updated: bool,
    last_commit_ms: u32,
    clock: PhantomData<fn() -> C>,
}

impl<T: Default, C> Default for Field<T, C> {
    fn default() -> Self {
        Self {
            committed: T::default(),
            staged: T::default(),
            valid: false,
            updated: false,
            last_commit_ms: 0,
            clock: PhantomData,
        }
    }
}

impl<T, C: Clock> Field<T, C> {
    /// Returns `true` once the field has been committed at least once.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns `true` if a commit happened since the value was last read.
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Milliseconds since the last commit, or `u32::MAX` if there was none.
    pub fn age(&self) -> u32 {
        if self.valid {
            C::now_millis().wrapping_sub(self.last_commit_ms)
        } else {
            u32::MAX
        }
    }

    /// Returns the committed value and clears the updated flag.
    pub fn value(&mut self) -> T
    where
        T: Copy,
    {
        self.updated = false;
        self.committed
    }

    /// Returns a reference to the committed value and clears the updated flag.
    pub fn value_ref(&mut self) -> &T {
        self.updated = false;
        &self.committed
    }

    /// Returns the committed value together with the updated flag, leaving
    /// the flag untouched.
    pub fn peek(&self) -> (&T, bool) {
        (&self.committed, self.updated)
    }

    pub(crate) fn stage(&mut self, value: T) {
        self.staged = value;
    }

    pub(crate) fn staged_mut(&mut self) -> &mut T {
        &mut self.staged
    }

    pub(crate) fn commit(&mut self)
    where
        T: Clone,
    {
        self.committed.clone_from(&self.staged);
        self.last_commit_ms = C::now_millis();
        self.valid = true;
        self.updated = true;
    }
}
