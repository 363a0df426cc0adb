//! # Term Buffer
//!
//! Accumulates the term currently being received, together with the running
//! XOR parity of the sentence and the position of the term in it.

use heapless::Vec;

/// Capacity of a term including the slot of the terminator.
pub const MAX_FIELD_SIZE: usize = 15;

/// Longest term the decoder keeps; further bytes are dropped.
pub const MAX_TERM_LEN: usize = MAX_FIELD_SIZE - 1;

/// The bytes of one term, truncated to [`MAX_TERM_LEN`].
pub type TermText = Vec<u8, MAX_TERM_LEN>;

#[derive(Debug, Default)]
pub(crate) struct TermBuffer {
    text: TermText,
    parity: u8,
    index: u8,
    checksum_term: bool,
}

impl TermBuffer {
    /// Starts a new sentence.
    pub(crate) fn restart(&mut self) {
        self.text.clear();
        self.parity = 0;
        self.index = 0;
        self.checksum_term = false;
    }

    /// Appends an ordinary byte to the current term.
    pub(crate) fn push(&mut self, byte: u8) {
        if self.text.push(byte).is_err() {
            log::trace!("term {} full, dropping {:#04x}", self.index, byte);
        }
        if !self.checksum_term {
            self.parity ^= byte;
        }
    }

    /// Folds a separating comma into the parity.
    pub(crate) fn fold_separator(&mut self, byte: u8) {
        self.parity ^= byte;
    }

    /// Moves on to the next term. The next term is the checksum term when
    /// this one was terminated by `*`.
    pub(crate) fn advance(&mut self, checksum_next: bool) {
        self.index = self.index.saturating_add(1);
        self.text.clear();
        self.checksum_term = checksum_next;
    }

    pub(crate) fn text(&self) -> &[u8] {
        &self.text
    }

    pub(crate) fn parity(&self) -> u8 {
        self.parity
    }

    pub(crate) fn index(&self) -> u8 {
        self.index
    }

    pub(crate) fn is_checksum_term(&self) -> bool {
        self.checksum_term
    }
}
