use alcor_frames::{AltAz, HorizonCrossing, Site, Target, alt_az, hour_angle, precess};
use alcor_solar::{SolarError, SolarTimes};
use alcor_time::{DateTime, civil_to_utc};

/// Horizontal coordinates of a target at a site civil instant.
///
/// Converts civil → UTC with the site's offset, computes the hour angle,
/// and runs the horizontal transform.
pub fn target_alt_az(site: &Site, target: &Target, civil: DateTime) -> AltAz {
    let utc = civil_to_utc(civil, site.utc_offset_hours);
    alt_az(target, site, hour_angle(target, site, utc))
}

/// Hour angle of a target at a site civil instant, hours [0, 24).
pub fn target_hour_angle(site: &Site, target: &Target, civil: DateTime) -> f64 {
    let utc = civil_to_utc(civil, site.utc_offset_hours);
    hour_angle(target, site, utc)
}

/// UTC rise/set hours of a target for a site civil date.
pub fn target_rise_set(site: &Site, target: &Target, civil_date: DateTime) -> HorizonCrossing {
    let utc = civil_to_utc(civil_date, site.utc_offset_hours);
    alcor_frames::rise_set_hours(target, site, utc)
}

/// Rising azimuth of a target at a site, degrees from north; sentinel
/// 180°/0° under circumpolar/never-rises geometry.
pub fn target_rise_azimuth(site: &Site, target: &Target) -> f64 {
    alcor_frames::rise_azimuth(target, site)
}

/// Sunset/twilight/sunrise civil clock times for the night starting on
/// `civil_date`.
pub fn sun_times(site: &Site, civil_date: DateTime) -> Result<SolarTimes, SolarError> {
    alcor_solar::civil_sun_times(site, civil_date)
}

/// A copy of `target` with its J2000 coordinates precessed to the epoch of
/// the observation instant.
///
/// The optional pre-step applied before the horizontal transform when
/// arcminute-level pointing matters.
pub fn precessed(target: &Target, observation_jd: f64) -> Target {
    let (ra, dec) = precess(target.ra_hours, target.dec_deg, observation_jd);
    Target::new(target.id.clone(), ra, dec)
}
