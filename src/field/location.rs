use crate::{Clock, Field};

/// An angle as whole degrees plus billionths of a degree.
///
/// This is the exact fixed-point form positions are decoded into; the sign is
/// kept apart because it arrives in its own hemisphere term.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawDegrees {
    pub degrees: u16,
    /// Always below 1_000_000_000.
    pub billionths: u32,
    pub negative: bool,
}

impl RawDegrees {
    /// Signed decimal degrees.
    pub fn to_degrees(self) -> f64 {
        let value = f64::from(self.degrees) + f64::from(self.billionths) / 1_000_000_000.0;
        if self.negative { -value } else { value }
    }
}

/// Declares an enum that is transmitted as a single character.
///
/// Characters without a named variant are kept in `Unknown`.
macro_rules! char_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A character this decoder has no name for
            Unknown(u8),
        }

        impl From<u8> for $name {
            fn from(c: u8) -> Self {
                match c {
                    $($char => Self::$variant,)*
                    other => Self::Unknown(other),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                match value {
                    $($name::$variant => $char,)*
                    $name::Unknown(other) => other,
                }
            }
        }
    };
}

char_enum! {
    /// GGA fix quality indicator
    pub enum FixQuality {
        /// 0 - Fix not available
        b'0' => Invalid,
        /// 1 - GPS fix
        b'1' => Gps,
        /// 2 - Differential GPS fix
        b'2' => Dgps,
        /// 3 - PPS fix
        b'3' => Pps,
        /// 4 - Real Time Kinematic
        b'4' => Rtk,
        /// 5 - Float RTK
        b'5' => FloatRtk,
        /// 6 - Estimated (dead reckoning)
        b'6' => Estimated,
        /// 7 - Manual input mode
        b'7' => Manual,
        /// 8 - Simulation mode
        b'8' => Simulated,
    }
}

char_enum! {
    /// RMC mode indicator (NMEA 2.3 and later)
    pub enum FixMode {
        /// N - Data not valid
        b'N' => NoFix,
        /// A - Autonomous mode
        b'A' => Autonomous,
        /// D - Differential mode
        b'D' => Differential,
        /// E - Estimated (dead reckoning) mode
        b'E' => Estimated,
    }
}

impl Default for FixQuality {
    fn default() -> Self {
        FixQuality::Invalid
    }
}

impl Default for FixMode {
    fn default() -> Self {
        FixMode::NoFix
    }
}

/// A position fix: latitude, longitude and how the fix was obtained.
///
/// All four parts are staged and committed together.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub lat: RawDegrees,
    pub lng: RawDegrees,
    pub quality: FixQuality,
    pub mode: FixMode,
}

impl<C: Clock> Field<Location, C> {
    /// Latitude in signed decimal degrees.
    pub fn lat(&mut self) -> f64 {
        self.value().lat.to_degrees()
    }

    /// Longitude in signed decimal degrees.
    pub fn lng(&mut self) -> f64 {
        self.value().lng.to_degrees()
    }

    pub fn raw_lat(&mut self) -> RawDegrees {
        self.value().lat
    }

    pub fn raw_lng(&mut self) -> RawDegrees {
        self.value().lng
    }

    pub fn fix_quality(&mut self) -> FixQuality {
        self.value().quality
    }

    pub fn fix_mode(&mut self) -> FixMode {
        self.value().mode
    }
}
