//! Julian Date ↔ Gregorian calendar conversions and epoch constants.
//!
//! The Julian Date is the continuous day count used for all epoch
//! arithmetic in the engine. Conversions follow the standard algorithm
//! (Meeus, _Astronomical Algorithms_, Ch. 7) restricted to the Gregorian
//! calendar range.

/// Julian Date of the epoch 1900.0 (1900 January 0.5).
///
/// Reference epoch for the solar orbital-element polynomials.
pub const JD_EPOCH_1900: f64 = 2_415_020.0;

/// Julian Date of the epoch J2000.0 (2000 January 1.5).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the epoch 2010.0 (2010 January 0.0).
pub const JD_EPOCH_2010: f64 = 2_455_196.5;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed
/// since 0h UT (e.g. 15.5 = the 15th at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Julian Date at 0h UT of a Gregorian calendar date.
pub fn jd_at_midnight(year: i32, month: u32, day: u32) -> f64 {
    calendar_to_jd(year, month, day as f64)
}

/// Convert a Julian Date back to a Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` where `day_frac` carries the time of
/// day as a fraction.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z >= 2_299_161.0 {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert_eq!(jd, J2000_JD);
    }

    #[test]
    fn epoch_1900() {
        // 1900 January 0.5 = 1899 December 31.5
        let jd = calendar_to_jd(1899, 12, 31.5);
        assert_eq!(jd, JD_EPOCH_1900);
    }

    #[test]
    fn epoch_2010() {
        // 2010 January 0.0 = 2009 December 31.0
        let jd = jd_at_midnight(2009, 12, 31);
        assert_eq!(jd, JD_EPOCH_2010);
    }

    #[test]
    fn meeus_example() {
        // Meeus 7.a: 1957 October 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn roundtrip_modern_date() {
        let jd = calendar_to_jd(1986, 3, 10.75);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (1986, 3));
        assert!((d - 10.75).abs() < 1e-9, "day_frac = {d}");
    }

    #[test]
    fn roundtrip_january() {
        // January exercises the month <= 2 shift
        let jd = calendar_to_jd(2019, 1, 1.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2019, 1));
        assert!((d - 1.0).abs() < 1e-9);
    }

    #[test]
    fn midnight_is_half_day_before_noon() {
        let jd0 = jd_at_midnight(2000, 1, 1);
        assert_eq!(jd0, J2000_JD - 0.5);
    }
}
