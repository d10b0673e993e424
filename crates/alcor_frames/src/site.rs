//! Observer ground site.

/// A ground observing site.
///
/// Immutable once constructed; built once per session by the configuration
/// layer and shared freely (it is `Copy`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Altitude above mean sea level in meters. Carried for completeness;
    /// the transforms here do not use it.
    pub altitude_m: f64,
    /// Signed offset of site civil time from UTC, in hours.
    pub utc_offset_hours: f64,
}

impl Site {
    pub fn new(
        longitude_deg: f64,
        latitude_deg: f64,
        altitude_m: f64,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
            altitude_m,
            utc_offset_hours,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
