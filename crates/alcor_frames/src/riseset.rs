//! Rise/set hour-angle solving and rising azimuth.
//!
//! The hour angle at which a target crosses the horizon follows from the
//! cosine rule `cos H0 = −tan φ tan δ`. When `|cos H0| > 1` the target does
//! not cross the horizon that day: circumpolar (never sets) or never rises.
//!
//! Degeneracy is signaled by sentinel values, not errors: the azimuth
//! sentinels are 180° (never sets) and 0° (never rises); the hour results
//! use [`HorizonCrossing`] variants with the same direction convention.

use alcor_time::{DateTime, gst_to_utc, lst_to_gst, reduce_to_range};

use crate::site::Site;
use crate::target::Target;

/// Vertical shift applied to the rising azimuth for atmospheric
/// refraction at the horizon: 34 arcminutes.
const RISE_REFRACTION_DEG: f64 = 34.0 / 60.0;

/// Rise/set times of a target on one UTC date, or the degenerate horizon
/// state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonCrossing {
    /// The target crosses the horizon; both times are UTC decimal hours
    /// in [0, 24).
    Crossing {
        rise_utc_hours: f64,
        set_utc_hours: f64,
    },
    /// The target stays below the horizon all day.
    NeverRises,
    /// The target stays above the horizon all day (circumpolar).
    NeverSets,
}

/// `cos H0` for the horizon crossing of a target at a site.
fn cos_h0(target: &Target, site: &Site) -> f64 {
    -site.latitude_rad().tan() * target.dec_rad().tan()
}

/// Azimuth at which a target rises, in degrees from north through east.
///
/// `cos A = (sin δ + sin 34′ sin φ) / (cos 34′ cos φ)` — the 34′ vertical
/// shift accounts for horizon refraction.
///
/// Sentinels when the target does not cross the horizon: `180.0` if it
/// never sets (circumpolar), `0.0` if it never rises. The rising azimuth of
/// a fixed equatorial target does not depend on the date.
pub fn rise_azimuth(target: &Target, site: &Site) -> f64 {
    let c = cos_h0(target, site);
    if c > 1.0 {
        return 0.0;
    }
    if c < -1.0 {
        return 180.0;
    }

    let shift = RISE_REFRACTION_DEG.to_radians();
    let phi = site.latitude_rad();
    let cos_az =
        (target.dec_rad().sin() + shift.sin() * phi.sin()) / (shift.cos() * phi.cos());
    // The shifted horizon can be unreachable even when the geometric one
    // is crossed; clamp rather than fold that edge into the sentinels.
    cos_az.clamp(-1.0, 1.0).acos().to_degrees()
}

/// UTC rise and set hours of a target on the date of `utc_date`.
///
/// Sidereal crossing times are `RA ∓ H0` reduced into [0, 24), then
/// converted LST → GST → UTC for the given date. Uses the same degeneracy
/// rule as [`rise_azimuth`].
pub fn rise_set_hours(target: &Target, site: &Site, utc_date: DateTime) -> HorizonCrossing {
    let c = cos_h0(target, site);
    if c > 1.0 {
        return HorizonCrossing::NeverRises;
    }
    if c < -1.0 {
        return HorizonCrossing::NeverSets;
    }

    let h0_hours = c.acos().to_degrees() / 15.0;
    let lst_rise = reduce_to_range(target.ra_hours - h0_hours, 24.0);
    let lst_set = reduce_to_range(target.ra_hours + h0_hours, 24.0);

    let jd0 = utc_date.date_jd0();
    let to_utc = |lst: f64| {
        reduce_to_range(gst_to_utc(jd0, lst_to_gst(lst, site.longitude_deg)), 24.0)
    };

    HorizonCrossing::Crossing {
        rise_utc_hours: to_utc(lst_rise),
        set_utc_hours: to_utc(lst_set),
    }
}
