//! The Sun's apparent equatorial position.
//!
//! Element polynomials give the mean anomaly; Kepler's equation yields the
//! eccentric anomaly; the tan(ν/2) relation recovers the true anomaly; the
//! ecliptic longitude ν + ϖ_g (latitude zero) is then rotated to equatorial
//! coordinates with the time-corrected obliquity.

use alcor_time::{DateTime, reduce_to_range};

use crate::elements::{
    centuries_since_1900, eccentricity, mean_longitude_deg, obliquity_deg, perigee_longitude_deg,
};
use crate::error::SolarError;
use crate::kepler::solve_kepler;

/// The Sun's apparent equatorial coordinates at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Apparent right ascension in hours [0, 24).
    pub ra_hours: f64,
    /// Apparent declination in degrees.
    pub dec_deg: f64,
}

/// Sun's geocentric ecliptic longitude in degrees [0, 360) at a UTC instant.
pub fn sun_ecliptic_longitude_deg(utc: DateTime) -> Result<f64, SolarError> {
    let t = centuries_since_1900(utc.to_jd());
    let mean_lon = mean_longitude_deg(t);
    let perigee = perigee_longitude_deg(t);
    let e = eccentricity(t);

    let mean_anomaly = reduce_to_range(mean_lon - perigee, 360.0).to_radians();
    let ecc_anomaly = solve_kepler(mean_anomaly, e)?;
    let true_anomaly = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (ecc_anomaly / 2.0).tan()).atan();

    Ok(reduce_to_range(true_anomaly.to_degrees() + perigee, 360.0))
}

/// Sun's apparent RA/Dec at a UTC instant.
///
/// The obliquity is evaluated at 0h UT of the date, per the classical
/// reduction.
pub fn sun_ra_dec(utc: DateTime) -> Result<SunPosition, SolarError> {
    let lambda = sun_ecliptic_longitude_deg(utc)?.to_radians();
    let eps = obliquity_deg(utc.date_jd0()).to_radians();

    let dec_deg = (eps.sin() * lambda.sin()).asin().to_degrees();
    let ra_deg = reduce_to_range(
        (lambda.sin() * eps.cos()).atan2(lambda.cos()).to_degrees(),
        360.0,
    );

    Ok(SunPosition {
        ra_hours: ra_deg / 15.0,
        dec_deg,
    })
}
