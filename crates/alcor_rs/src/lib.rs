//! Convenience wrapper for the alcor observability engine.
//!
//! High-level entry points for judging whether a catalog target is
//! observable from a ground site: single-instant alt/az, rise/set queries,
//! and the night's solar event times, all from site civil date/times.
//!
//! # Quick start
//!
//! ```rust
//! use alcor_rs::*;
//!
//! let boston = Site::new(-71.05, 42.37, 10.0, -5.0);
//! let target = Target::new("M42", 5.588, -5.39);
//!
//! let tonight = DateTime::at_midnight(1986, 3, 10);
//! let times = sun_times(&boston, tonight).unwrap();
//! assert_eq!(times.sunset.unwrap().to_string(), "17:45");
//!
//! let aa = target_alt_az(&boston, &target, DateTime::new(1986, 3, 10, 22, 0, 0.0));
//! assert!(aa.azimuth_deg < 360.0);
//! ```

pub mod convenience;

pub use convenience::{
    precessed, sun_times, target_alt_az, target_hour_angle, target_rise_azimuth, target_rise_set,
};

// Re-export the component crates' types so callers only need `use alcor_rs::*`.
pub use alcor_frames::{
    AltAz, HorizonCrossing, Site, Target, alt_az, hour_angle, precess, precess_dec, precess_ra,
    rise_azimuth, rise_set_hours,
};
pub use alcor_solar::{ClockTime, SolarError, SolarTimes, SunPosition, civil_sun_times, sun_ra_dec};
pub use alcor_time::{
    DateTime, J2000_JD, civil_to_utc, gst_to_lst, gst_to_utc, jd_at_midnight, lst_to_gst,
    reduce_to_range, utc_to_civil, utc_to_gst,
};
