use crate::error::{Error, Result};

/// Immutable simulation constants, handed to the [`Engine`](crate::core::Engine)
/// at construction so independent simulations can run with different tuning.
///
/// - `gravity_const`: G in the pairwise force `F = G * m_i * m_j / d^2`.
/// - `fixed_timestep`: time unit used only for the force-to-velocity
///   conversion, independent of the wall-clock `dt` passed to `step`.
/// - `density`: constant density tying radius to mass,
///   `radius = cbrt(mass / density)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Gravitational constant.
    pub gravity_const: f64,
    /// Fixed timestep for velocity integration.
    pub fixed_timestep: f64,
    /// Body density for the radius invariant.
    pub density: f64,
}

impl SimParams {
    /// Create validated parameters.
    ///
    /// Errors with `Error::InvalidParam` if any value is NaN/inf, if
    /// `fixed_timestep` is negative, or if `density` is non-positive.
    pub fn new(gravity_const: f64, fixed_timestep: f64, density: f64) -> Result<Self> {
        if !gravity_const.is_finite() {
            return Err(Error::InvalidParam(format!(
                "gravity_const must be finite, got {gravity_const}"
            )));
        }
        if !fixed_timestep.is_finite() || fixed_timestep < 0.0 {
            return Err(Error::InvalidParam(format!(
                "fixed_timestep must be finite and >= 0, got {fixed_timestep}"
            )));
        }
        if !density.is_finite() || density <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "density must be finite and > 0, got {density}"
            )));
        }
        Ok(Self {
            gravity_const,
            fixed_timestep,
            density,
        })
    }
}

impl Default for SimParams {
    /// Defaults tuned for the interactive ring scene built by
    /// [`ring_field`](crate::core::scenario::ring_field): weak gravity, a
    /// 60 Hz force timestep, and density 3.
    fn default() -> Self {
        Self {
            gravity_const: 1.0e-4,
            fixed_timestep: 1.0 / 60.0,
            density: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_params_ok() -> Result<()> {
        let p = SimParams::new(6.674e-11, 0.01, 3.0)?;
        assert_eq!(p.gravity_const, 6.674e-11);
        Ok(())
    }

    #[test]
    fn default_params_validate() {
        let d = SimParams::default();
        assert!(SimParams::new(d.gravity_const, d.fixed_timestep, d.density).is_ok());
    }

    #[test]
    fn nan_gravity_rejected() {
        let err = SimParams::new(f64::NAN, 0.01, 3.0).unwrap_err();
        assert!(err.to_string().contains("gravity_const"));
    }

    #[test]
    fn negative_timestep_rejected() {
        let err = SimParams::new(1.0, -0.01, 3.0).unwrap_err();
        assert!(err.to_string().contains("fixed_timestep"));
    }

    #[test]
    fn zero_density_rejected() {
        let err = SimParams::new(1.0, 0.01, 0.0).unwrap_err();
        assert!(err.to_string().contains("density"));
    }
}
