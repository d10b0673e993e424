//! Solar orbital elements and the mean obliquity of the ecliptic.
//!
//! Quadratic polynomials in T, the number of Julian centuries since the
//! epoch 1900.0 (1900 January 0.5, JD 2415020.0). Classical element set
//! (Duffett-Smith, _Practical Astronomy_; Newcomb's Tables).
//!
//! At epoch 2010.0 these evaluate to ε_g = 279.557208°, ϖ_g = 283.112438°,
//! e = 0.016705.

use alcor_time::{DAYS_PER_JULIAN_CENTURY, J2000_JD, JD_EPOCH_1900, reduce_to_range};

/// Julian centuries from epoch 1900.0 to a Julian Date.
pub fn centuries_since_1900(jd: f64) -> f64 {
    (jd - JD_EPOCH_1900) / DAYS_PER_JULIAN_CENTURY
}

/// Sun's mean ecliptic longitude ε_g in degrees [0, 360).
pub fn mean_longitude_deg(t: f64) -> f64 {
    reduce_to_range(279.696_677_8 + 36_000.768_92 * t + 0.000_302_5 * t * t, 360.0)
}

/// Longitude of the Sun's perigee ϖ_g in degrees [0, 360).
pub fn perigee_longitude_deg(t: f64) -> f64 {
    reduce_to_range(281.220_844_4 + 1.719_175 * t + 0.000_452_778 * t * t, 360.0)
}

/// Eccentricity of the Sun's apparent orbit.
pub fn eccentricity(t: f64) -> f64 {
    0.016_751_04 - 0.000_041_8 * t - 0.000_000_126 * t * t
}

/// Mean obliquity of the ecliptic in degrees.
///
/// Cubic correction to the J2000 obliquity:
/// `ε = 23.439292 − (46.815 t + 0.0006 t² − 0.00181 t³) / 3600`
/// where `t` is Julian centuries since J2000.0 — conventionally evaluated
/// at 0h UT of the date of interest.
pub fn obliquity_deg(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    23.439_292 - (46.815 * t + 0.000_6 * t * t - 0.001_81 * t * t * t) / 3600.0
}
