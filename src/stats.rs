/// Cumulative decoder counters. They only ever grow (wrapping at `u32::MAX`)
/// and are reset only by constructing a new decoder.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Every byte fed to the decoder
    pub chars_processed: u32,
    /// Validated sentences that reported a position fix
    pub sentences_with_fix: u32,
    /// Sentences whose checksum did not match
    pub failed_checksum: u32,
    /// Sentences whose checksum matched
    pub passed_checksum: u32,
}

impl Statistics {
    pub(crate) fn count_char(&mut self) {
        self.chars_processed = self.chars_processed.wrapping_add(1);
    }

    pub(crate) fn count_passed(&mut self, has_fix: bool) {
        self.passed_checksum = self.passed_checksum.wrapping_add(1);
        if has_fix {
            self.sentences_with_fix = self.sentences_with_fix.wrapping_add(1);
        }
    }

    pub(crate) fn count_failed(&mut self) {
        self.failed_checksum = self.failed_checksum.wrapping_add(1);
    }
}
