//! Time-system conversions for the alcor observability engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions and epoch constants
//! - Greenwich / Local Sidereal Time in decimal hours
//! - Civil ↔ UTC offset shifts with day rollover
//! - The canonical range-reduction helper used by every angle-producing
//!   function in the engine

pub mod civil;
pub mod julian;
pub mod sidereal;

pub use civil::{DateTime, civil_to_utc, utc_to_civil};
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, JD_EPOCH_1900, JD_EPOCH_2010, SECONDS_PER_DAY,
    calendar_to_jd, jd_at_midnight, jd_to_calendar,
};
pub use sidereal::{gst_to_lst, gst_to_utc, lst_to_gst, utc_to_gst};

/// Reduce a value into the canonical range `[0, range)`.
///
/// Every RA, GST, LST, hour-angle, and azimuth value leaving a transform
/// passes through this so comparisons and formatting stay consistent.
pub fn reduce_to_range(value: f64, range: f64) -> f64 {
    value.rem_euclid(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_negative() {
        assert!((reduce_to_range(-1.5, 24.0) - 22.5).abs() < 1e-12);
    }

    #[test]
    fn reduce_multiple_turns() {
        assert!((reduce_to_range(725.0, 360.0) - 5.0).abs() < 1e-12);
        assert!((reduce_to_range(-725.0, 360.0) - 355.0).abs() < 1e-12);
    }

    #[test]
    fn reduce_in_range_unchanged() {
        assert_eq!(reduce_to_range(5.0, 24.0), 5.0);
        assert_eq!(reduce_to_range(0.0, 24.0), 0.0);
    }
}
