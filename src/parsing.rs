//! # Term Parsers
//!
//! Pure, allocation-free parsers that turn the text of a single NMEA term into
//! a number. They never fail: input that does not look like a number degrades
//! to zero (or to whatever numeric prefix could be read), mirroring the
//! lenient `atol`-style conversion receivers have always been decoded with.

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0},
    combinator::opt,
    sequence::preceded,
};

use crate::{error::IResult, field::RawDegrees};

/// Parses a (possibly negative) number with up to two decimal digits into
/// hundredths.
///
/// Fraction digits beyond the second are ignored, not rounded. Malformed input
/// yields the value of its numeric prefix, which is `0` when there is none.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::parse_decimal;
///
/// assert_eq!(parse_decimal(b"123.45"), 12345);
/// assert_eq!(parse_decimal(b"-5.1"), -510);
/// assert_eq!(parse_decimal(b"022.4"), 2240);
/// assert_eq!(parse_decimal(b"1.999"), 199);
/// assert_eq!(parse_decimal(b"abc"), 0);
/// ```
pub fn parse_decimal(term: &[u8]) -> i32 {
    decimal(term).map_or(0, |(_, value)| value)
}

/// Parses the leading digits of a term as an unsigned integer.
///
/// Anything that is not a digit ends the number; a term without leading
/// digits (including a leading sign) yields `0`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::parse_integer;
///
/// assert_eq!(parse_integer(b"08"), 8);
/// assert_eq!(parse_integer(b"230394"), 230394);
/// assert_eq!(parse_integer(b"12.7"), 12);
/// assert_eq!(parse_integer(b"-3"), 0);
/// ```
pub fn parse_integer(term: &[u8]) -> u32 {
    unsigned(term).map_or(0, |(_, value)| value)
}

/// Parses a position in the NMEA `DDDMM.MMMM` format.
///
/// The whole degrees come from everything left of the last two integer
/// digits, the minutes are converted to billionths of a degree with fixed-point
/// arithmetic. The sign is always left unset: it comes from the separate
/// hemisphere term.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::parse_degrees;
///
/// let lat = parse_degrees(b"4807.038");
/// assert_eq!(lat.degrees, 48);
/// assert_eq!(lat.billionths, 117_300_000);
/// assert!(!lat.negative);
/// ```
pub fn parse_degrees(term: &[u8]) -> RawDegrees {
    degrees(term).map_or_else(|_| RawDegrees::default(), |(_, value)| value)
}

/// Parses the two hexadecimal digits of a checksum term.
///
/// Returns [`None`] unless the term starts with two hex digits (either case).
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::parse_checksum;
///
/// assert_eq!(parse_checksum(b"6A"), Some(0x6A));
/// assert_eq!(parse_checksum(b"6a"), Some(0x6A));
/// assert_eq!(parse_checksum(b"6"), None);
/// assert_eq!(parse_checksum(b"zz"), None);
/// ```
pub fn parse_checksum(term: &[u8]) -> Option<u8> {
    hex_byte(term).ok().map(|(_, value)| value)
}

/// Calculates the NMEA 0183 checksum (XOR of every byte) of sentence content.
///
/// The content is everything between the `$` prefix and the `*` delimiter.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::checksum;
///
/// assert_eq!(checksum(b"GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(content: &[u8]) -> u8 {
    content.iter().fold(0u8, |parity, &byte| parity ^ byte)
}

fn digits(i: &[u8]) -> IResult<'_, &[u8]> {
    digit0(i)
}

fn minus(i: &[u8]) -> IResult<'_, bool> {
    opt(char('-')).map(|sign| sign.is_some()).parse(i)
}

fn unsigned(i: &[u8]) -> IResult<'_, u32> {
    digits
        .map(|digits: &[u8]| {
            digits.iter().fold(0u32, |acc, &d| {
                acc.wrapping_mul(10).wrapping_add(u32::from(d - b'0'))
            })
        })
        .parse(i)
}

fn hundredths(i: &[u8]) -> IResult<'_, i32> {
    opt(preceded(
        char('.'),
        take_while_m_n(1, 2, |c: u8| c.is_ascii_digit()),
    ))
    .map(|fraction: Option<&[u8]>| match fraction {
        Some(&[tenths]) => 10 * i32::from(tenths - b'0'),
        Some(&[tenths, hundredths]) => 10 * i32::from(tenths - b'0') + i32::from(hundredths - b'0'),
        _ => 0,
    })
    .parse(i)
}

fn decimal(i: &[u8]) -> IResult<'_, i32> {
    let (i, negative) = minus(i)?;
    let (i, whole) = unsigned(i)?;
    let (i, fraction) = hundredths(i)?;

    let value = (whole as i32).wrapping_mul(100).wrapping_add(fraction);
    Ok((i, if negative { value.wrapping_neg() } else { value }))
}

fn degrees(i: &[u8]) -> IResult<'_, RawDegrees> {
    const BILLION: u64 = 1_000_000_000;

    let (i, left_of_decimal) = unsigned(i)?;
    let (i, fraction) = opt(preceded(char('.'), digits)).parse(i)?;

    let mut multiplier = 10_000_000u64;
    let mut ten_millionths_of_minutes = u64::from(left_of_decimal % 100) * multiplier;
    for &digit in fraction.unwrap_or_default() {
        multiplier /= 10;
        ten_millionths_of_minutes += u64::from(digit - b'0') * multiplier;
    }

    // minutes * 10^7 * 100 / 60, rounded
    let billionths = (5 * ten_millionths_of_minutes + 1) / 3;
    let carry = (billionths / BILLION) as u16;

    Ok((
        i,
        RawDegrees {
            degrees: ((left_of_decimal / 100) as u16).wrapping_add(carry),
            billionths: (billionths % BILLION) as u32,
            negative: false,
        },
    ))
}

fn hex_byte(i: &[u8]) -> IResult<'_, u8> {
    take_while_m_n(2, 2, |c: u8| c.is_ascii_hexdigit())
        .map(|hex: &[u8]| {
            hex.iter()
                .fold(0u8, |acc, &c| (acc << 4) | (c as char).to_digit(16).unwrap_or(0) as u8)
        })
        .parse(i)
}
