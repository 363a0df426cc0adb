use crate::{Clock, Field};

pub const MPH_PER_KNOT: f64 = 1.150_779_45;
pub const MPS_PER_KNOT: f64 = 0.514_444_44;
pub const KMPH_PER_KNOT: f64 = 1.852;
pub const MILES_PER_METER: f64 = 0.000_621_371_12;
pub const KM_PER_METER: f64 = 0.001;
pub const FEET_PER_METER: f64 = 3.280_839_9;

/// Declares a fixed-point quantity (hundredths of its base unit) together with
/// its unit conversions.
///
/// Each conversion is generated twice: as a pure method on the quantity and as
/// a consume-on-read accessor on `Field<Quantity, C>`.
macro_rules! fixed_point_quantity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$conv_meta:meta])*
                $conv:ident => $factor:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        $vis struct $name(pub i32);

        impl $name {
            /// The raw value, in hundredths of the base unit.
            pub fn hundredths(self) -> i32 {
                self.0
            }

            $(
                $(#[$conv_meta])*
                pub fn $conv(self) -> f64 {
                    $factor * f64::from(self.0) / 100.0
                }
            )*
        }

        impl From<i32> for $name {
            fn from(hundredths: i32) -> Self {
                Self(hundredths)
            }
        }

        impl<C: Clock> Field<$name, C> {
            $(
                $(#[$conv_meta])*
                pub fn $conv(&mut self) -> f64 {
                    self.value().$conv()
                }
            )*
        }
    };
}

fixed_point_quantity! {
    /// Speed over ground, base unit knots.
    pub struct Speed {
        /// Knots
        knots => 1.0,
        /// Statute miles per hour
        mph => MPH_PER_KNOT,
        /// Meters per second
        mps => MPS_PER_KNOT,
        /// Kilometers per hour
        kmph => KMPH_PER_KNOT,
    }
}

fixed_point_quantity! {
    /// Course over ground, base unit degrees from true north.
    pub struct Course {
        /// Degrees
        deg => 1.0,
    }
}

fixed_point_quantity! {
    /// Altitude above mean sea level, base unit meters.
    pub struct Altitude {
        /// Meters
        meters => 1.0,
        /// Statute miles
        miles => MILES_PER_METER,
        /// Kilometers
        kilometers => KM_PER_METER,
        /// Feet
        feet => FEET_PER_METER,
    }
}

fixed_point_quantity! {
    /// Horizontal dilution of precision, dimensionless.
    pub struct Hdop {
        hdop => 1.0,
    }
}
