//! # Streaming Decoder
//!
//! The decoder consumes the receiver's output one byte at a time. Bytes are
//! collected into terms; every completed term is either the sentence
//! identifier, a data term that is parsed into the staged value of a field, or
//! the checksum. A matching checksum commits all staged values of the sentence
//! at once, a mismatching one discards them.

use crate::{
    Clock, Custom, CustomKey, Error, Field, Statistics,
    custom::Registry,
    field::{Altitude, Course, Date, FixMode, FixQuality, Hdop, Location, Speed, Time},
    parsing::{parse_checksum, parse_decimal, parse_degrees, parse_integer},
    sentence::SentenceKind,
    term::TermBuffer,
};

/// Number of custom fields a [`Decoder`] can hold unless told otherwise.
pub const DEFAULT_CUSTOM_CAPACITY: usize = 8;

/// Incremental NMEA 0183 decoder for one receiver stream.
///
/// `C` is the clock used to timestamp commits, `N` the capacity of the custom
/// field registry.
///
/// The built-in fields are public; read them through their accessors, which
/// clear the field's updated flag.
///
/// | Sentence | Commits                                                         |
/// |----------|-----------------------------------------------------------------|
/// | RMC      | date, time; with a fix also location, speed, course             |
/// | GGA      | time, satellites, hdop; with a fix also location, altitude      |
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{Decoder, StdClock};
///
/// let mut gps: Decoder<StdClock> = Decoder::new();
/// let speed = gps.register_custom("GPRMC", 7).unwrap();
///
/// let sentence = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
/// let mut validated = false;
/// for &byte in sentence {
///     validated |= gps.feed(byte);
/// }
///
/// assert!(validated);
/// assert_eq!(gps.time.hour(), 12);
/// assert_eq!(gps.date.day(), 23);
/// assert!((gps.location.lat() - 48.1173).abs() < 1e-6);
/// assert!((gps.speed.knots() - 22.4).abs() < 1e-9);
/// assert_eq!(gps.custom(&speed).unwrap().as_str(), "022.4");
/// ```
#[derive(Debug)]
pub struct Decoder<C, const N: usize = DEFAULT_CUSTOM_CAPACITY> {
    pub location: Field<Location, C>,
    pub date: Field<Date, C>,
    pub time: Field<Time, C>,
    pub speed: Field<Speed, C>,
    pub course: Field<Course, C>,
    pub altitude: Field<Altitude, C>,
    pub satellites: Field<u32, C>,
    pub hdop: Field<Hdop, C>,

    term: TermBuffer,
    sentence: SentenceKind,
    has_fix: bool,
    candidates: Option<usize>,
    customs: Registry<C, N>,
    stats: Statistics,
}

impl<C: Clock, const N: usize> Default for Decoder<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, const N: usize> Decoder<C, N> {
    pub fn new() -> Self {
        Self {
            location: Field::default(),
            date: Field::default(),
            time: Field::default(),
            speed: Field::default(),
            course: Field::default(),
            altitude: Field::default(),
            satellites: Field::default(),
            hdop: Field::default(),
            term: TermBuffer::default(),
            sentence: SentenceKind::Other,
            has_fix: false,
            candidates: None,
            customs: Registry::default(),
            stats: Statistics::default(),
        }
    }

    /// Processes one byte received from the GPS.
    ///
    /// Returns `true` exactly when this byte completed a sentence whose
    /// checksum matched, i.e. when new values have just been committed.
    pub fn feed(&mut self, c: u8) -> bool {
        self.stats.count_char();

        match c {
            b',' | b'\r' | b'\n' | b'*' => {
                if c == b',' {
                    self.term.fold_separator(c);
                }
                let validated = self.end_of_term();
                self.term.advance(c == b'*');
                validated
            }
            b'$' => {
                self.term.restart();
                self.sentence = SentenceKind::Other;
                self.has_fix = false;
                self.candidates = None;
                false
            }
            _ => {
                self.term.push(c);
                false
            }
        }
    }

    /// Feeds every byte of `bytes`, returning how many sentences validated.
    pub fn feed_slice(&mut self, bytes: &[u8]) -> usize {
        bytes.iter().filter(|&&byte| self.feed(byte)).count()
    }

    /// Subscribes to term `term` of the sentence named `sentence`.
    ///
    /// Registering halfway through a sentence is allowed as long as the term
    /// has not arrived yet, provided the sentence already had a subscription
    /// when its identifier arrived. Otherwise the first value comes from the
    /// next sentence. Registering the same pair twice returns the same key.
    pub fn register_custom(&mut self, sentence: &str, term: u8) -> Result<CustomKey, Error> {
        let key = CustomKey::new(sentence, term)?;
        let inserted = self.customs.insert(key.clone())?;

        if let (Some(position), Some(first)) = (inserted, self.candidates) {
            self.candidates = Some(self.customs.shifted_run(first, position));
        }

        Ok(key)
    }

    /// The custom field registered under `key`.
    pub fn custom(&mut self, key: &CustomKey) -> Option<&mut Custom<C>> {
        self.customs.get_mut(key)
    }

    pub fn chars_processed(&self) -> u32 {
        self.stats.chars_processed
    }

    pub fn sentences_with_fix(&self) -> u32 {
        self.stats.sentences_with_fix
    }

    pub fn failed_checksum(&self) -> u32 {
        self.stats.failed_checksum
    }

    pub fn passed_checksum(&self) -> u32 {
        self.stats.passed_checksum
    }

    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    /// Handles a just-completed term. Returns `true` if it was the checksum
    /// term of a sentence that validated.
    fn end_of_term(&mut self) -> bool {
        if self.term.is_checksum_term() {
            let received = parse_checksum(self.term.text());
            return self.validate(received);
        }

        let index = self.term.index();
        let text = self.term.text();

        if index == 0 {
            self.sentence = SentenceKind::classify(text);
            self.candidates = self.customs.first_for(text);
            log::debug!(
                "sentence {:?}: {:?}, custom fields: {}",
                core::str::from_utf8(text).unwrap_or("?"),
                self.sentence,
                self.candidates.is_some()
            );
            return false;
        }

        if let Some(&first) = text.first() {
            match (self.sentence, index) {
                (SentenceKind::Rmc | SentenceKind::Gga, 1) => {
                    self.time.stage(Time(parse_decimal(text) as u32))
                }
                (SentenceKind::Rmc, 2) => self.has_fix = first == b'A',
                (SentenceKind::Rmc, 3) | (SentenceKind::Gga, 2) => {
                    self.location.staged_mut().lat = parse_degrees(text)
                }
                (SentenceKind::Rmc, 4) | (SentenceKind::Gga, 3) => {
                    self.location.staged_mut().lat.negative = first == b'S'
                }
                (SentenceKind::Rmc, 5) | (SentenceKind::Gga, 4) => {
                    self.location.staged_mut().lng = parse_degrees(text)
                }
                (SentenceKind::Rmc, 6) | (SentenceKind::Gga, 5) => {
                    self.location.staged_mut().lng.negative = first == b'W'
                }
                (SentenceKind::Rmc, 7) => self.speed.stage(Speed(parse_decimal(text))),
                (SentenceKind::Rmc, 8) => self.course.stage(Course(parse_decimal(text))),
                (SentenceKind::Rmc, 9) => self.date.stage(Date(parse_integer(text))),
                (SentenceKind::Rmc, 12) => self.location.staged_mut().mode = FixMode::from(first),
                (SentenceKind::Gga, 6) => {
                    self.has_fix = first > b'0';
                    self.location.staged_mut().quality = FixQuality::from(first);
                }
                (SentenceKind::Gga, 7) => self.satellites.stage(parse_integer(text)),
                (SentenceKind::Gga, 8) => self.hdop.stage(Hdop(parse_decimal(text))),
                (SentenceKind::Gga, 9) => self.altitude.stage(Altitude(parse_decimal(text))),
                _ => {}
            }
        }

        if let Some(first) = self.candidates {
            self.customs.stage(first, index, text);
        }

        false
    }

    /// Checks the received checksum and commits the sentence if it matches.
    fn validate(&mut self, received: Option<u8>) -> bool {
        let parity = self.term.parity();
        if received != Some(parity) {
            self.stats.count_failed();
            log::debug!(
                "checksum mismatch: computed {:02X}, received {:02X?}",
                parity,
                received
            );
            return false;
        }

        self.stats.count_passed(self.has_fix);

        match self.sentence {
            SentenceKind::Rmc => {
                self.date.commit();
                self.time.commit();
                if self.has_fix {
                    self.location.commit();
                    self.speed.commit();
                    self.course.commit();
                }
            }
            SentenceKind::Gga => {
                self.time.commit();
                if self.has_fix {
                    self.location.commit();
                    self.altitude.commit();
                }
                self.satellites.commit();
                self.hdop.commit();
            }
            SentenceKind::Other => {}
        }

        if let Some(first) = self.candidates {
            self.customs.commit(first);
        }

        log::trace!("committed {:?} sentence, fix: {}", self.sentence, self.has_fix);
        true
    }
}

impl<C: Clock, const N: usize> Extend<u8> for Decoder<C, N> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, bytes: I) {
        for byte in bytes {
            self.feed(byte);
        }
    }
}
