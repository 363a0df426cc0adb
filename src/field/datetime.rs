use crate::{Clock, Field};

/// UTC date packed as the decimal number `DDMMYY`.
///
/// Two-digit years always map to 2000..=2099.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub u32);

impl Date {
    /// Full year, `2000 + YY`.
    pub fn year(self) -> u16 {
        (self.0 % 100) as u16 + 2000
    }

    pub fn month(self) -> u8 {
        ((self.0 / 100) % 100) as u8
    }

    pub fn day(self) -> u8 {
        (self.0 / 10_000) as u8
    }
}

/// UTC time of day packed as the decimal number `HHMMSSCC`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Time(pub u32);

impl Time {
    pub fn hour(self) -> u8 {
        (self.0 / 1_000_000) as u8
    }

    pub fn minute(self) -> u8 {
        ((self.0 / 10_000) % 100) as u8
    }

    pub fn second(self) -> u8 {
        ((self.0 / 100) % 100) as u8
    }

    pub fn centisecond(self) -> u8 {
        (self.0 % 100) as u8
    }
}

impl<C: Clock> Field<Date, C> {
    pub fn year(&mut self) -> u16 {
        self.value().year()
    }

    pub fn month(&mut self) -> u8 {
        self.value().month()
    }

    pub fn day(&mut self) -> u8 {
        self.value().day()
    }
}

impl<C: Clock> Field<Time, C> {
    pub fn hour(&mut self) -> u8 {
        self.value().hour()
    }

    pub fn minute(&mut self) -> u8 {
        self.value().minute()
    }

    pub fn second(&mut self) -> u8 {
        self.value().second()
    }

    pub fn centisecond(&mut self) -> u8 {
        self.value().centisecond()
    }
}

#[cfg(feature = "time")]
impl TryFrom<Date> for time::Date {
    type Error = time::error::ComponentRange;

    fn try_from(date: Date) -> Result<Self, Self::Error> {
        let month = time::Month::try_from(date.month())?;
        time::Date::from_calendar_date(i32::from(date.year()), month, date.day())
    }
}

#[cfg(feature = "time")]
impl TryFrom<Time> for time::Time {
    type Error = time::error::ComponentRange;

    fn try_from(t: Time) -> Result<Self, Self::Error> {
        time::Time::from_hms_milli(
            t.hour(),
            t.minute(),
            t.second(),
            u16::from(t.centisecond()) * 10,
        )
    }
}
