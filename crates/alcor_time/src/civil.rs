//! Civil calendar date/time and UTC offset conversion.
//!
//! `DateTime` is the calendar representation used throughout the engine,
//! for both UTC instants and site civil readings. Offset shifts go through
//! Julian Date arithmetic so day (and month, and year) rollover falls out
//! of the calendar conversion.

use crate::julian::{calendar_to_jd, jd_at_midnight, jd_to_calendar};

/// Calendar date and time with sub-second precision.
///
/// Carries no zone information; whether a value is UTC or site civil time
/// is determined by context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl DateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// A date at 0h.
    pub fn at_midnight(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Time of day in decimal hours [0, 24).
    pub fn decimal_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Julian Date of this instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64 + self.decimal_hours() / 24.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Date at 0h of this calendar date.
    pub fn date_jd0(&self) -> f64 {
        jd_at_midnight(self.year, self.month, self.day)
    }

    /// Reconstruct a calendar date/time from a Julian Date.
    ///
    /// The time of day is quantized to the millisecond so JD roundoff
    /// cannot split an exact hour boundary into `hh:59:59.999…`.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_ms = ((day_frac - day as f64) * 86_400_000.0).round();
        if total_ms >= 86_400_000.0 {
            // Roundoff landed on the next midnight; decompose just past it.
            return Self::from_jd(jd + 0.001 / 86_400.0);
        }
        let hour = (total_ms / 3_600_000.0).floor() as u32;
        let minute = ((total_ms % 3_600_000.0) / 60_000.0).floor() as u32;
        let second = (total_ms % 60_000.0) / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Same calendar date, different time of day (decimal hours).
    ///
    /// `hours` outside [0, 24) rolls the date over accordingly.
    pub fn with_decimal_hours(&self, hours: f64) -> Self {
        Self::from_jd(self.date_jd0() + hours / 24.0)
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// Convert a site civil reading to UTC by removing the signed offset.
pub fn civil_to_utc(civil: DateTime, utc_offset_hours: f64) -> DateTime {
    DateTime::from_jd(civil.to_jd() - utc_offset_hours / 24.0)
}

/// Convert a UTC instant to the site civil reading by adding the offset.
pub fn utc_to_civil(utc: DateTime, utc_offset_hours: f64) -> DateTime {
    DateTime::from_jd(utc.to_jd() + utc_offset_hours / 24.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_hours_basic() {
        let t = DateTime::new(1986, 3, 10, 17, 45, 0.0);
        assert!((t.decimal_hours() - 17.75).abs() < 1e-12);
    }

    #[test]
    fn jd_roundtrip() {
        let t = DateTime::new(2010, 8, 24, 6, 30, 12.5);
        let back = DateTime::from_jd(t.to_jd());
        assert_eq!((back.year, back.month, back.day), (2010, 8, 24));
        assert_eq!((back.hour, back.minute), (6, 30));
        assert!((back.second - 12.5).abs() < 1e-4, "second = {}", back.second);
    }

    #[test]
    fn civil_utc_identity() {
        let civil = DateTime::new(1986, 3, 10, 18, 0, 0.0);
        for &offset in &[-5.0, 0.0, 5.5, 13.0] {
            let back = utc_to_civil(civil_to_utc(civil, offset), offset);
            assert_eq!((back.year, back.month, back.day), (1986, 3, 10));
            assert_eq!((back.hour, back.minute), (18, 0));
            assert!(back.second.abs() < 1e-4);
        }
    }

    #[test]
    fn westward_offset_rolls_date_forward() {
        // 22:00 EST (UTC-5) = 03:00 UTC next day
        let civil = DateTime::new(1986, 3, 10, 22, 0, 0.0);
        let utc = civil_to_utc(civil, -5.0);
        assert_eq!((utc.month, utc.day, utc.hour), (3, 11, 3));
    }

    #[test]
    fn eastward_offset_rolls_date_back() {
        // 01:00 at UTC+3 = 22:00 UTC previous day
        let civil = DateTime::new(2020, 1, 1, 1, 0, 0.0);
        let utc = civil_to_utc(civil, 3.0);
        assert_eq!((utc.year, utc.month, utc.day, utc.hour), (2019, 12, 31, 22));
    }

    #[test]
    fn with_decimal_hours_rollover() {
        let d = DateTime::at_midnight(1986, 3, 10);
        let t = d.with_decimal_hours(25.5);
        assert_eq!((t.day, t.hour, t.minute), (11, 1, 30));
    }

    #[test]
    fn display_whole_seconds() {
        let t = DateTime::new(1988, 7, 27, 0, 0, 0.0);
        assert_eq!(t.to_string(), "1988-07-27 00:00:00");
    }
}
