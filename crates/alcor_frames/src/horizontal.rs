//! Equatorial → horizontal (alt/az) transform.
//!
//! Standard spherical-triangle reduction:
//!
//! `sin a = sin δ sin φ + cos δ cos φ cos H`
//!
//! with azimuth recovered by `atan2` of the two horizontal components and
//! reduced into [0, 360), measured from north through east.

use alcor_time::{DateTime, gst_to_lst, reduce_to_range, utc_to_gst};

use crate::site::Site;
use crate::target::Target;

/// Horizontal coordinates of a target at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltAz {
    /// Altitude above the horizon in degrees. Range: [-90, 90].
    pub altitude_deg: f64,
    /// Azimuth in degrees, 0–360 from north through east.
    pub azimuth_deg: f64,
}

/// Hour angle of a target at a UTC instant, in hours.
///
/// `HA = LST − RA`, reduced into the canonical range **[0, 24)**. This is
/// the single wrap convention used throughout the engine; callers needing
/// a signed angle convert at the boundary.
pub fn hour_angle(target: &Target, site: &Site, utc: DateTime) -> f64 {
    let gst = utc_to_gst(utc.date_jd0(), utc.decimal_hours());
    let lst = gst_to_lst(gst, site.longitude_deg);
    reduce_to_range(lst - target.ra_hours, 24.0)
}

/// Horizontal coordinates from an hour angle (hours) at a site.
pub fn alt_az(target: &Target, site: &Site, ha_hours: f64) -> AltAz {
    let h = (ha_hours * 15.0).to_radians();
    let dec = target.dec_rad();
    let phi = site.latitude_rad();

    let sin_alt = dec.sin() * phi.sin() + dec.cos() * phi.cos() * h.cos();
    let altitude_deg = sin_alt.asin().to_degrees();

    let azimuth_deg = reduce_to_range(
        (-dec.cos() * h.sin())
            .atan2(phi.cos() * dec.sin() - phi.sin() * dec.cos() * h.cos())
            .to_degrees(),
        360.0,
    );

    AltAz {
        altitude_deg,
        azimuth_deg,
    }
}
