use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// The engine is pure arithmetic over caller-supplied data, so every variant
/// is a local precondition failure at the API boundary (construct, append,
/// step). Nothing here is retried; the caller must supply valid input.
#[derive(Debug, Error)]
pub enum Error {
    /// `step` was called with a negative or non-finite timestep.
    #[error("invalid timestep {0}: must be non-negative and finite")]
    InvalidTimestep(f64),

    /// A body was supplied with a non-positive or non-finite mass, which
    /// breaks both the density radius invariant and the momentum-weighted
    /// merge average.
    #[error("mass must be finite and > 0, got {0}")]
    NonPositiveMass(f64),

    /// A body field other than mass failed validation (non-finite position
    /// or velocity, non-positive radius).
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Invalid simulation parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidTimestep(f64::NAN);
        let msg = format!("{e}");
        assert!(msg.contains("timestep"));
        assert!(msg.contains("NaN"));
    }

    #[test]
    fn non_positive_mass_carries_value() {
        let e = Error::NonPositiveMass(-2.5);
        assert!(format!("{e}").contains("-2.5"));
    }
}
