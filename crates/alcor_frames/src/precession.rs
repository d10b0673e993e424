//! Low-precision annual precession of equatorial coordinates.
//!
//! Applies the classical linear rates to J2000 coordinates:
//!
//! `Δα = 3.07420 + 1.33589 sin α tan δ`  (seconds of RA per year)
//! `Δδ = 20.0468 cos α`                  (arcseconds per year)
//!
//! scaled by the elapsed years since J2000.0. Accurate to a few arcseconds
//! per decade away from the pole.
//!
//! Both corrections are suppressed (input returned unchanged) when
//! `|δ| ≥ 82°`: `tan δ` makes the linear rate model unusable there, and the
//! cutoff is a deliberate accuracy/simplicity trade, not a bug.

use alcor_time::{J2000_JD, reduce_to_range};

/// Annual RA precession, constant term, in seconds of RA.
const RA_RATE_CONST_SEC: f64 = 3.074_20;

/// Annual RA precession, `sin α tan δ` coefficient, in seconds of RA.
const RA_RATE_SIN_SEC: f64 = 1.335_89;

/// Annual declination precession coefficient, in arcseconds.
const DEC_RATE_ARCSEC: f64 = 20.046_8;

/// Declination (degrees) beyond which precession is not applied.
const POLE_CUTOFF_DEG: f64 = 82.0;

/// Elapsed years from J2000.0 to a Julian Date.
fn elapsed_years(jd: f64) -> f64 {
    (jd - J2000_JD) / 365.25
}

/// Precess a J2000 right ascension (hours) to the epoch of `jd`.
///
/// Returns the input unchanged when `|dec_deg| ≥ 82`.
pub fn precess_ra(ra_hours: f64, dec_deg: f64, jd: f64) -> f64 {
    if dec_deg.abs() >= POLE_CUTOFF_DEG {
        return ra_hours;
    }
    let a = (ra_hours * 15.0).to_radians();
    let d = dec_deg.to_radians();
    let rate_sec = RA_RATE_CONST_SEC + RA_RATE_SIN_SEC * a.sin() * d.tan();
    reduce_to_range(ra_hours + rate_sec * elapsed_years(jd) / 3600.0, 24.0)
}

/// Precess a J2000 declination (degrees) to the epoch of `jd`.
///
/// `ra_hours` supplies the `cos α` factor. Returns the input unchanged when
/// `|dec_deg| ≥ 82`.
pub fn precess_dec(ra_hours: f64, dec_deg: f64, jd: f64) -> f64 {
    if dec_deg.abs() >= POLE_CUTOFF_DEG {
        return dec_deg;
    }
    let a = (ra_hours * 15.0).to_radians();
    dec_deg + DEC_RATE_ARCSEC * a.cos() * elapsed_years(jd) / 3600.0
}

/// Precess a J2000 coordinate pair to the epoch of `jd`.
///
/// Both components use the *input* coordinates for the rate evaluation, so
/// the pair is consistent with calling [`precess_ra`] and [`precess_dec`]
/// separately.
pub fn precess(ra_hours: f64, dec_deg: f64, jd: f64) -> (f64, f64) {
    (
        precess_ra(ra_hours, dec_deg, jd),
        precess_dec(ra_hours, dec_deg, jd),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alcor_time::jd_at_midnight;

    #[test]
    fn wasp_12_to_2019() {
        // WASP-12: RA 06:30:32.80, Dec +29:40:20 → 2019-01-01:
        // RA 06:31:45.6, Dec +29:39:28.7
        let ra = 6.0 + 30.0 / 60.0 + 32.80 / 3600.0;
        let dec = 29.0 + 40.0 / 60.0 + 20.0 / 3600.0;
        let jd = jd_at_midnight(2019, 1, 1);

        let (ra2, dec2) = precess(ra, dec, jd);
        let ra_ref = 6.0 + 31.0 / 60.0 + 45.6 / 3600.0;
        let dec_ref = 29.0 + 39.0 / 60.0 + 28.7 / 3600.0;
        assert!((ra2 - ra_ref).abs() < 1e-4, "RA = {ra2}, ref {ra_ref}");
        assert!((dec2 - dec_ref).abs() < 1e-3, "Dec = {dec2}, ref {dec_ref}");
    }

    #[test]
    fn near_pole_is_noop() {
        // Dec +89:15:50.79
        let ra = 2.530_301;
        let dec = 89.0 + 15.0 / 60.0 + 50.79 / 3600.0;
        let jd = jd_at_midnight(2019, 1, 1);
        assert_eq!(precess_ra(ra, dec, jd), ra);
        assert_eq!(precess_dec(ra, dec, jd), dec);
    }

    #[test]
    fn cutoff_applies_south_too() {
        let jd = jd_at_midnight(2030, 6, 1);
        assert_eq!(precess_dec(5.0, -83.0, jd), -83.0);
        assert_eq!(precess_ra(5.0, -83.0, jd), 5.0);
    }

    #[test]
    fn no_elapsed_time_no_shift() {
        let (ra2, dec2) = precess(6.509, 29.672, alcor_time::J2000_JD);
        assert!((ra2 - 6.509).abs() < 1e-12);
        assert!((dec2 - 29.672).abs() < 1e-12);
    }

    #[test]
    fn ra_stays_canonical() {
        // RA near 24h should wrap, not exceed the range
        let jd = jd_at_midnight(2050, 1, 1);
        let ra2 = precess_ra(23.999, 10.0, jd);
        assert!((0.0..24.0).contains(&ra2), "RA = {ra2}");
    }
}
