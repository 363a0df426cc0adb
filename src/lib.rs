//! # NMEA 0183 Stream Decoder
//!
//! This library decodes the output of a GPS receiver one byte at a time,
//! without heap allocation and without blocking. It understands the RMC and
//! GGA sentences with the format:
//! `$HHH,D1,D2,...,Dn*CC\r\n`
//!
//! Decoded values are staged while a sentence arrives and only become visible
//! once the sentence's checksum has been verified, so a reader never observes
//! a half-updated fix.
//!
//! The decoder is configurable to:
//! - Subscribe to any other `(sentence, term)` pair as a custom field
//! - Use any millisecond clock to timestamp commits
//! - Size the custom field registry at compile time
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_stream::{Decoder, StdClock};
//!
//! let mut gps: Decoder<StdClock> = Decoder::new();
//!
//! for &byte in b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n" {
//!     if gps.feed(byte) {
//!         println!("{} satellites, {} m", gps.satellites.value(), gps.altitude.meters());
//!     }
//! }
//!
//! assert_eq!(gps.passed_checksum(), 1);
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod clock;
mod custom;
mod decoder;
pub mod error;
mod field;
pub mod geo;
pub mod parsing;
mod sentence;
mod stats;
mod term;

#[cfg(feature = "std")]
pub use clock::StdClock;
pub use clock::Clock;
pub use custom::{Custom, CustomKey};
pub use decoder::{DEFAULT_CUSTOM_CAPACITY, Decoder};
pub use error::Error;
pub use field::*;
pub use sentence::SentenceKind;
pub use stats::Statistics;
pub use term::{MAX_FIELD_SIZE, MAX_TERM_LEN, TermText};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
