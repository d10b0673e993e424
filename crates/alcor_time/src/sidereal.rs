//! Greenwich and Local Sidereal Time in decimal hours.
//!
//! Implements the classical epoch-2000 GST formula: a quadratic polynomial
//! in Julian centuries gives sidereal time at 0h UT, and elapsed UT scaled
//! by the solar→sidereal day ratio advances it through the day. The inverse
//! direction uses the reciprocal ratio.
//!
//! All results are reduced into [0, 24) hours.
//!
//! Source: classical GST reduction (Duffett-Smith, _Practical Astronomy_;
//! USNO circulars). Public domain formulas.

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
use crate::reduce_to_range;

/// Ratio of a mean solar day to a mean sidereal day.
const SOLAR_TO_SIDEREAL: f64 = 1.002_737_909;

/// Ratio of a mean sidereal day to a mean solar day.
const SIDEREAL_TO_SOLAR: f64 = 0.997_269_566_3;

/// Sidereal time at Greenwich for 0h UT of the day, in hours.
///
/// `T0 = 6.697374558 + 2400.051336 T + 0.000025862 T²`
/// where T = Julian centuries from J2000.0 to 0h UT of the date.
fn gst_at_midnight(jd0: f64) -> f64 {
    let t = (jd0 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    reduce_to_range(6.697_374_558 + 2_400.051_336 * t + 0.000_025_862 * t * t, 24.0)
}

/// Greenwich Sidereal Time from UT, in hours [0, 24).
///
/// `jd0` is the Julian Date at 0h UT of the date (see
/// [`crate::julian::jd_at_midnight`]); `ut_hours` is the UT time of day in
/// decimal hours.
pub fn utc_to_gst(jd0: f64, ut_hours: f64) -> f64 {
    reduce_to_range(gst_at_midnight(jd0) + ut_hours * SOLAR_TO_SIDEREAL, 24.0)
}

/// UT from Greenwich Sidereal Time, in hours [0, 24).
///
/// Inverse of [`utc_to_gst`] for the same date. Round-trips to sub-second
/// precision. Note that a sidereal day is ~3m56s shorter than a solar day,
/// so one GST value per day is unreachable; the formula still returns the
/// nearest consistent UT.
pub fn gst_to_utc(jd0: f64, gst_hours: f64) -> f64 {
    let b = reduce_to_range(gst_hours - gst_at_midnight(jd0), 24.0);
    b * SIDEREAL_TO_SOLAR
}

/// Local Sidereal Time from GST and observer east longitude, hours [0, 24).
///
/// `LST = GST + longitude / 15`.
pub fn gst_to_lst(gst_hours: f64, longitude_deg: f64) -> f64 {
    reduce_to_range(gst_hours + longitude_deg / 15.0, 24.0)
}

/// GST from Local Sidereal Time and observer east longitude, hours [0, 24).
pub fn lst_to_gst(lst_hours: f64, longitude_deg: f64) -> f64 {
    reduce_to_range(lst_hours - longitude_deg / 15.0, 24.0)
}
