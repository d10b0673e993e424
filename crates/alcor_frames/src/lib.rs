//! Topocentric coordinate transforms for the alcor observability engine.
//!
//! Provides the observer/target data model, the equatorial ↔ horizontal
//! transform, rise/set hour-angle solving with polar sentinels, and the
//! low-precision annual precession correction.

pub mod horizontal;
pub mod precession;
pub mod riseset;
pub mod site;
pub mod target;

pub use horizontal::{AltAz, alt_az, hour_angle};
pub use precession::{precess, precess_dec, precess_ra};
pub use riseset::{HorizonCrossing, rise_azimuth, rise_set_hours};
pub use site::Site;
pub use target::Target;
