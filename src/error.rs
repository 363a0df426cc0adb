//! # Error Types
//!
//! The streaming decoder never fails: malformed input is absorbed and counted.
//! The only fallible operation is registering a custom field, which can run
//! into the fixed capacity of the registry or of the term buffer.

use core::fmt;

/// Holds the result of the internal term parsers.
///
/// Terms are plain byte slices, so the input type is fixed to `&[u8]` and the
/// error type to nom's default error.
pub(crate) type IResult<'a, O> = nom::IResult<&'a [u8], O>;

/// Represents the errors that can occur while registering a custom field.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The registry has no free slot left.
    ///
    /// The registry capacity is the `N` const parameter of the
    /// [`Decoder`](crate::Decoder).
    RegistryFull,

    /// The sentence name is longer than a term can ever be.
    ///
    /// Terms longer than [`MAX_TERM_LEN`](crate::MAX_TERM_LEN) bytes are
    /// truncated while decoding, so such a name could never match.
    SentenceNameTooLong,

    /// The sentence name is empty.
    EmptySentenceName,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RegistryFull => f.write_str("custom field registry is full"),
            Error::SentenceNameTooLong => write!(
                f,
                "sentence name exceeds {} bytes",
                crate::MAX_TERM_LEN
            ),
            Error::EmptySentenceName => f.write_str("sentence name is empty"),
        }
    }
}

impl core::error::Error for Error {}
