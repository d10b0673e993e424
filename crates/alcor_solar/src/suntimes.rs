//! Civil sunset, sunrise, and twilight clock times.
//!
//! For a query date this produces the evening pair (sunset, end of
//! twilight) on that date and the morning pair (start of twilight, sunrise)
//! on the next date — the night an observer actually plans around.
//!
//! Each event runs a fixed two-pass refinement seeded from local civil
//! noon: a pass recomputes the Sun's RA/Dec at the current UTC estimate,
//! solves the hour angle at which the Sun reaches the event's zenith angle,
//! and converts hour angle + solar RA → LST → GST → UTC as the next
//! estimate. Two passes are a deliberate fixed-count approximation, good to
//! about a minute because the Sun's position changes slowly within a day;
//! converting this to a convergence loop would change sub-minute results
//! against the reference outputs.
//!
//! Polar day/night (|cos H| > 1 on either pass) yields `None` for the
//! affected event.

use alcor_frames::Site;
use alcor_time::{DateTime, gst_to_utc, lst_to_gst, reduce_to_range};

use crate::error::SolarError;
use crate::position::sun_ra_dec;

/// Atmospheric refraction at the horizon, arcminutes.
const REFRACTION_ARCMIN: f64 = 34.0;

/// Solar semi-diameter, arcminutes.
const SEMIDIAMETER_ARCMIN: f64 = 16.0;

/// Zenith angle for twilight start/end: Sun 18° below the horizon.
const TWILIGHT_ZENITH_DEG: f64 = 108.0;

/// Number of refinement passes. Fixed by design, not a convergence loop.
const REFINEMENT_PASSES: usize = 2;

/// A civil wall-clock time, rounded to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Round decimal civil hours to the nearest minute: add 30 seconds,
    /// truncate, wrap past midnight.
    fn from_decimal_hours(hours: f64) -> Self {
        let rounded = hours + 30.0 / 3600.0;
        let hour = rounded.floor() as u32 % 24;
        let minute = ((rounded - rounded.floor()) * 60.0).floor() as u32;
        Self { hour, minute }
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The four solar event times bracketing one night, in site civil time.
///
/// `None` means the event does not occur (polar day or polar night).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTimes {
    /// Sunset on the query date.
    pub sunset: Option<ClockTime>,
    /// End of evening twilight on the query date.
    pub twilight_end: Option<ClockTime>,
    /// Start of morning twilight on the following date.
    pub twilight_start: Option<ClockTime>,
    /// Sunrise on the following date.
    pub sunrise: Option<ClockTime>,
}

/// Zenith angle at which the upper limb touches the horizon.
fn horizon_zenith_deg() -> f64 {
    90.0 + (REFRACTION_ARCMIN + SEMIDIAMETER_ARCMIN) / 60.0
}

/// One solar event on the date of `jd0` (JD at 0h UT): civil decimal hours,
/// or `None` under polar day/night.
fn refine_event(
    site: &Site,
    jd0: f64,
    zenith_deg: f64,
    rising: bool,
) -> Result<Option<f64>, SolarError> {
    let date = DateTime::from_jd(jd0);
    let phi = site.latitude_rad();
    let cos_z = zenith_deg.to_radians().cos();

    // Seed: local civil noon expressed as UT on this date.
    let mut ut = reduce_to_range(12.0 - site.utc_offset_hours, 24.0);

    for _ in 0..REFINEMENT_PASSES {
        let sun = sun_ra_dec(date.with_decimal_hours(ut))?;
        let dec = sun.dec_deg.to_radians();

        let cos_h = (cos_z - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
        if cos_h.abs() > 1.0 {
            return Ok(None);
        }
        let h_hours = cos_h.acos().to_degrees() / 15.0;

        let lst = if rising {
            reduce_to_range(sun.ra_hours - h_hours, 24.0)
        } else {
            reduce_to_range(sun.ra_hours + h_hours, 24.0)
        };
        ut = gst_to_utc(jd0, lst_to_gst(lst, site.longitude_deg));
    }

    Ok(Some(reduce_to_range(ut + site.utc_offset_hours, 24.0)))
}

/// Civil sunset/twilight/sunrise times for the night starting on
/// `civil_date` at `site`.
pub fn civil_sun_times(site: &Site, civil_date: DateTime) -> Result<SolarTimes, SolarError> {
    let jd0 = civil_date.date_jd0();
    let next_jd0 = jd0 + 1.0;
    let z_horizon = horizon_zenith_deg();

    let clock = |h: Option<f64>| h.map(ClockTime::from_decimal_hours);

    Ok(SolarTimes {
        sunset: clock(refine_event(site, jd0, z_horizon, false)?),
        twilight_end: clock(refine_event(site, jd0, TWILIGHT_ZENITH_DEG, false)?),
        twilight_start: clock(refine_event(site, next_jd0, TWILIGHT_ZENITH_DEG, true)?),
        sunrise: clock(refine_event(site, next_jd0, z_horizon, true)?),
    })
}
