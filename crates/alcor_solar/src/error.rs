//! Error types for solar computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the solar ephemeris.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// Iterative algorithm did not converge within its defensive bound.
    /// Cannot occur for physically realistic orbital eccentricities; seeing
    /// it means an internal logic error.
    NoConvergence(&'static str),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for SolarError {}
