//! # Sentence Classification
//!
//! Built-in decoding only knows the GNSS talkers' RMC and GGA sentences;
//! everything else is `Other` and can only feed custom fields.

/// Talker IDs of the GNSS constellations: GPS, combined GNSS, Galileo,
/// BeiDou and GLONASS.
const GNSS_TALKERS: &[u8] = b"PNABL";

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    /// RMC - Recommended Minimum Navigation Information
    ///
    /// ```text
    ///         1         2 3       4 5        6  7   8   9    10 11 12
    ///         |         | |       | |        |  |   |   |    |  |  |
    ///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
    /// ```
    Rmc,
    /// GGA - Global Positioning System Fix Data
    ///
    /// ```text
    ///         1         2       3 4        5 6 7  8   9
    ///         |         |       | |        | | |  |   |
    ///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
    /// ```
    Gga,
    #[default]
    Other,
}

impl SentenceKind {
    /// Classifies a sentence by its identifier term (`GPRMC`, `GNGGA`, ...).
    pub fn classify(identifier: &[u8]) -> Self {
        match identifier {
            [b'G', talker, rest @ ..] if GNSS_TALKERS.contains(talker) => match rest {
                b"RMC" => SentenceKind::Rmc,
                b"GGA" => SentenceKind::Gga,
                _ => SentenceKind::Other,
            },
            _ => SentenceKind::Other,
        }
    }
}
