//! # Custom Field Registry
//!
//! Callers can subscribe to any `(sentence, term)` pair, including sentences
//! the decoder has no built-in support for. Subscribed terms are staged and
//! committed exactly like the built-in fields: their value only becomes
//! visible once the sentence has passed its checksum.
//!
//! Subscriptions are kept sorted by sentence name and then by term index, so
//! all subscriptions of one sentence form a contiguous run that the decoder
//! walks in term order while the sentence arrives.

use core::cmp::Ordering;

use heapless::{String, Vec};

use crate::{Clock, Error, Field, MAX_TERM_LEN, TermText};

/// Identifies a custom field: a sentence name such as `"GPRMC"` and the
/// index of a term within it (the sentence name itself is term 0).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomKey {
    sentence: String<MAX_TERM_LEN>,
    term: u8,
}

impl CustomKey {
    /// Builds a key, checking that the name could ever match a term.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_stream::{CustomKey, Error};
    ///
    /// let key = CustomKey::new("GPRMC", 7).unwrap();
    /// assert_eq!(key.sentence(), "GPRMC");
    /// assert_eq!(key.term(), 7);
    ///
    /// assert_eq!(CustomKey::new("", 1), Err(Error::EmptySentenceName));
    /// assert_eq!(
    ///     CustomKey::new("GPXXXXXXXXXXXXXXX", 1),
    ///     Err(Error::SentenceNameTooLong)
    /// );
    /// ```
    pub fn new(sentence: &str, term: u8) -> Result<Self, Error> {
        if sentence.is_empty() {
            return Err(Error::EmptySentenceName);
        }

        let mut name = String::new();
        name.push_str(sentence)
            .map_err(|_| Error::SentenceNameTooLong)?;

        Ok(Self {
            sentence: name,
            term,
        })
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn term(&self) -> u8 {
        self.term
    }
}

impl Ord for CustomKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sentence
            .as_bytes()
            .cmp(other.sentence.as_bytes())
            .then(self.term.cmp(&other.term))
    }
}

impl PartialOrd for CustomKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A subscribed term with its own staged and committed text.
#[derive(Debug)]
pub struct Custom<C> {
    key: CustomKey,
    field: Field<TermText, C>,
}

impl<C: Clock> Custom<C> {
    fn new(key: CustomKey) -> Self {
        Self {
            key,
            field: Field::default(),
        }
    }

    pub fn key(&self) -> &CustomKey {
        &self.key
    }

    pub fn is_valid(&self) -> bool {
        self.field.is_valid()
    }

    pub fn is_updated(&self) -> bool {
        self.field.is_updated()
    }

    /// Milliseconds since the last commit, or `u32::MAX` if there was none.
    pub fn age(&self) -> u32 {
        self.field.age()
    }

    /// The committed term bytes. Clears the updated flag.
    pub fn as_bytes(&mut self) -> &[u8] {
        self.field.value_ref()
    }

    /// The committed term as text. Clears the updated flag.
    ///
    /// NMEA is ASCII; should the receiver send anything else, the text is cut
    /// at the first byte that is not valid UTF-8.
    pub fn as_str(&mut self) -> &str {
        let bytes = self.field.value_ref();
        match core::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
        }
    }

    fn stage(&mut self, term: &[u8]) {
        let staged = self.field.staged_mut();
        staged.clear();
        // Terms never exceed the capacity of the staging text.
        let _ = staged.extend_from_slice(term);
    }
}

/// Sorted, fixed-capacity set of custom fields.
#[derive(Debug)]
pub(crate) struct Registry<C, const N: usize> {
    entries: Vec<Custom<C>, N>,
}

impl<C, const N: usize> Default for Registry<C, N> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C: Clock, const N: usize> Registry<C, N> {
    /// Inserts a subscription at its sorted position and returns that
    /// position. Registering the same key twice is a no-op and returns `None`.
    pub(crate) fn insert(&mut self, key: CustomKey) -> Result<Option<usize>, Error> {
        match self.entries.binary_search_by(|custom| custom.key.cmp(&key)) {
            Ok(_) => Ok(None),
            Err(position) => {
                self.entries
                    .insert(position, Custom::new(key))
                    .map_err(|_| Error::RegistryFull)?;
                let key = &self.entries[position].key;
                log::debug!("registered custom field {}:{}", key.sentence(), key.term());
                Ok(Some(position))
            }
        }
    }

    /// Where the run that started at `first` starts after an entry was
    /// inserted at `position`.
    pub(crate) fn shifted_run(&self, first: usize, position: usize) -> usize {
        let joins_run = position == first
            && match (self.entries.get(position), self.entries.get(position + 1)) {
                (Some(new), Some(head)) => new.key.sentence == head.key.sentence,
                _ => false,
            };

        if position > first || joins_run {
            first
        } else {
            first + 1
        }
    }

    pub(crate) fn get_mut(&mut self, key: &CustomKey) -> Option<&mut Custom<C>> {
        let position = self
            .entries
            .binary_search_by(|custom| custom.key.cmp(key))
            .ok()?;
        self.entries.get_mut(position)
    }

    /// Position of the first subscription for the sentence `name`, if any.
    pub(crate) fn first_for(&self, name: &[u8]) -> Option<usize> {
        let position = self
            .entries
            .partition_point(|custom| custom.key.sentence.as_bytes() < name);

        self.entries
            .get(position)
            .filter(|custom| custom.key.sentence.as_bytes() == name)
            .map(|_| position)
    }

    /// Stages `text` into every subscription of the run starting at `first`
    /// that listens to term `index`.
    pub(crate) fn stage(&mut self, first: usize, index: u8, text: &[u8]) {
        for custom in self.run_mut(first) {
            if custom.key.term > index {
                break;
            }
            if custom.key.term == index {
                custom.stage(text);
            }
        }
    }

    /// Commits every subscription of the run starting at `first`.
    pub(crate) fn commit(&mut self, first: usize) {
        for custom in self.run_mut(first) {
            custom.field.commit();
        }
    }

    fn run_mut(&mut self, first: usize) -> impl Iterator<Item = &mut Custom<C>> {
        let run = self.entries.get_mut(first..).unwrap_or_default();
        let name = run.first().map(|custom| custom.key.sentence.clone());

        run.iter_mut()
            .take_while(move |custom| Some(&custom.key.sentence) == name.as_ref())
    }
}
