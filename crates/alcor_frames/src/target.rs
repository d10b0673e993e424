//! Catalog target with equatorial coordinates.

use alcor_time::reduce_to_range;

/// A celestial target identified by name, with J2000-style equatorial
/// coordinates.
///
/// Immutable; precession produces a new coordinate pair rather than
/// mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Object identifier (catalog name).
    pub id: String,
    /// Right ascension in hours, canonical range [0, 24).
    pub ra_hours: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

impl Target {
    /// Create a target. RA is reduced into [0, 24).
    pub fn new(id: impl Into<String>, ra_hours: f64, dec_deg: f64) -> Self {
        Self {
            id: id.into(),
            ra_hours: reduce_to_range(ra_hours, 24.0),
            dec_deg,
        }
    }

    /// Right ascension in degrees [0, 360).
    pub fn ra_deg(&self) -> f64 {
        self.ra_hours * 15.0
    }

    /// Declination in radians.
    pub fn dec_rad(&self) -> f64 {
        self.dec_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ra_reduced_on_construction() {
        let t = Target::new("x", 25.5, 10.0);
        assert!((t.ra_hours - 1.5).abs() < 1e-12);
        let t = Target::new("y", -0.5, 10.0);
        assert!((t.ra_hours - 23.5).abs() < 1e-12);
    }

    #[test]
    fn ra_deg_conversion() {
        let t = Target::new("z", 6.0, 0.0);
        assert_eq!(t.ra_deg(), 90.0);
    }
}
