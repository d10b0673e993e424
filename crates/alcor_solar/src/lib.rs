//! Solar ephemeris for the alcor observability engine.
//!
//! Computes the Sun's apparent equatorial position (orbital-element
//! polynomials + Kepler's equation) and the four civil clock times an
//! observer plans a night around: sunset, end of evening twilight, start
//! of morning twilight, sunrise.

pub mod elements;
pub mod error;
pub mod kepler;
pub mod position;
pub mod suntimes;

pub use error::SolarError;
pub use kepler::solve_kepler;
pub use position::{SunPosition, sun_ecliptic_longitude_deg, sun_ra_dec};
pub use suntimes::{ClockTime, SolarTimes, civil_sun_times};
