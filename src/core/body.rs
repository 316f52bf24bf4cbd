use glam::DVec2;

use crate::error::{Error, Result};

/// A gravitating body: a constant-density disc with position, velocity,
/// mass, and radius.
///
/// Fields:
/// - `position`: center of the body
/// - `velocity`: current velocity
/// - `radius`: collision radius (> 0)
/// - `mass`: mass (> 0)
///
/// After any merge the engine re-derives the radius from the mass via
/// [`radius_for_mass`]; at creation the radius may be supplied directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Center position.
    pub position: DVec2,
    /// Velocity.
    pub velocity: DVec2,
    /// Collision radius (> 0).
    pub radius: f64,
    /// Mass (> 0).
    pub mass: f64,
}

/// Radius of a constant-density disc of the given mass: `cbrt(mass / density)`.
#[inline]
pub fn radius_for_mass(mass: f64, density: f64) -> f64 {
    (mass / density).cbrt()
}

impl Body {
    /// Create a new body after validating invariants.
    ///
    /// Errors:
    /// - `Error::NonPositiveMass` if `mass` is non-positive or NaN/inf.
    /// - `Error::InvalidBody` if `radius` is non-positive or any position or
    ///   velocity component is NaN/inf.
    pub fn new(position: DVec2, velocity: DVec2, mass: f64, radius: f64) -> Result<Self> {
        let body = Self {
            position,
            velocity,
            radius,
            mass,
        };
        body.validate()?;
        Ok(body)
    }

    /// Create a body whose radius is derived from its mass through the
    /// constant-density invariant `radius = cbrt(mass / density)`.
    pub fn with_density(position: DVec2, velocity: DVec2, mass: f64, density: f64) -> Result<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "density must be finite and > 0, got {density}"
            )));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::NonPositiveMass(mass));
        }
        Self::new(position, velocity, mass, radius_for_mass(mass, density))
    }

    /// Re-check all field invariants. Used by the engine when taking
    /// ownership of caller-built bodies.
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(Error::NonPositiveMass(self.mass));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidBody(format!(
                "radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        if !self.position.is_finite() {
            return Err(Error::InvalidBody("position must be finite".into()));
        }
        if !self.velocity.is_finite() {
            return Err(Error::InvalidBody("velocity must be finite".into()));
        }
        Ok(())
    }

    /// Momentum vector: `mass * velocity`.
    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy: `1/2 m |v|^2`.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_body_ok() -> Result<()> {
        let b = Body::new(DVec2::new(1.0, 2.0), DVec2::new(-3.0, 0.5), 2.0, 0.5)?;
        assert_eq!(b.position, DVec2::new(1.0, 2.0));
        assert_eq!(b.velocity, DVec2::new(-3.0, 0.5));
        assert_eq!(b.mass, 2.0);
        assert_eq!(b.radius, 0.5);
        Ok(())
    }

    #[test]
    fn with_density_derives_radius() -> Result<()> {
        let b = Body::with_density(DVec2::ZERO, DVec2::ZERO, 30.0, 3.0)?;
        assert!((b.radius - 10.0_f64.cbrt()).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn zero_mass_rejected() {
        let err = Body::new(DVec2::ZERO, DVec2::ZERO, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, Error::NonPositiveMass(_)));
    }

    #[test]
    fn nan_position_rejected() {
        let err = Body::new(DVec2::new(f64::NAN, 0.0), DVec2::ZERO, 1.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn non_positive_radius_rejected() {
        let err = Body::new(DVec2::ZERO, DVec2::ZERO, 1.0, -1.0).unwrap_err();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn kinetic_energy_computed() -> Result<()> {
        // v = (3, 4), |v|^2 = 25; KE = 0.5 * 2 * 25
        let b = Body::new(DVec2::ZERO, DVec2::new(3.0, 4.0), 2.0, 1.0)?;
        assert!((b.kinetic_energy() - 25.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn momentum_is_mass_times_velocity() -> Result<()> {
        let b = Body::new(DVec2::ZERO, DVec2::new(1.5, -2.0), 4.0, 1.0)?;
        assert_eq!(b.momentum(), DVec2::new(6.0, -8.0));
        Ok(())
    }
}
