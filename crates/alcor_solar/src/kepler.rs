//! Kepler's equation solver.

use crate::error::SolarError;

/// Convergence threshold on |E − e sin E − M|, in radians.
const TOLERANCE_RAD: f64 = 1e-6;

/// Defensive iteration cap. Newton from E₀ = M converges in a handful of
/// steps for solar eccentricity (~0.0167); hitting this bound indicates an
/// internal logic error, not a bad input.
const MAX_ITERATIONS: usize = 50;

/// Solve Kepler's equation `E − e sin E = M` for the eccentric anomaly.
///
/// Newton iteration starting from `E₀ = M`, continuing until the residual
/// drops below 1e-6 radians. Typically under 5 steps for solar
/// eccentricity.
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> Result<f64, SolarError> {
    let m = mean_anomaly_rad;
    let mut ecc_anomaly = m;
    for _ in 0..MAX_ITERATIONS {
        let residual = ecc_anomaly - e * ecc_anomaly.sin() - m;
        if residual.abs() <= TOLERANCE_RAD {
            return Ok(ecc_anomaly);
        }
        ecc_anomaly -= residual / (1.0 - e * ecc_anomaly.cos());
    }
    Err(SolarError::NoConvergence("kepler equation"))
}
