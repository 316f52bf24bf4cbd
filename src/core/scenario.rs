use std::f64::consts::TAU;

use glam::DVec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::body::Body;
use crate::core::params::SimParams;
use crate::error::{Error, Result};

/// Bodies per ring, scaled by the ring index.
const RING_BASE_COUNT: usize = 50;
/// Central body mass.
const CORE_MASS: f64 = 5.0e7;
/// Smallest planet mass drawn for ring bodies.
const MIN_PLANET_MASS: f64 = 1_000.0;
/// Upper bound factor for planet mass: `MASS_RAMP * (i + 1)` for the i-th
/// body of a ring, so later slots can draw heavier planets.
const MASS_RAMP: f64 = 100_000.0;

/// Build the seeded starting field: a heavy central body surrounded by
/// `rings` concentric rings of planets with randomized masses and loosely
/// tangential velocities.
///
/// Ring `j` (1-based) carries `j * 50` planets at orbital radius roughly
/// `j * ring_spacing`, jittered by up to a fifth of the spacing. Planet
/// radii follow the density invariant from `params`. The result is sorted
/// ascending by mass, so the last element is the biggest body per the
/// engine's observer convention.
///
/// Deterministic for a given `seed`.
pub fn ring_field(params: &SimParams, rings: usize, ring_spacing: f64, seed: u64) -> Result<Vec<Body>> {
    if !ring_spacing.is_finite() || ring_spacing <= 0.0 {
        return Err(Error::InvalidParam(format!(
            "ring_spacing must be finite and > 0, got {ring_spacing}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut bodies = vec![Body::with_density(
        DVec2::ZERO,
        DVec2::ZERO,
        CORE_MASS,
        params.density,
    )?];

    for j in 1..=rings {
        let jf = j as f64;
        let count = j * RING_BASE_COUNT;
        for i in 0..count {
            let angle = TAU * (i as f64) / (count as f64);
            let (sin, cos) = angle.sin_cos();

            let mass = rng.random_range(MIN_PLANET_MASS..=MASS_RAMP * (i as f64 + 1.0));
            let jitter = ring_spacing / 5.0;
            let position = DVec2::new(
                jf * (ring_spacing + rng.random_range(-jitter..=jitter)) * sin,
                jf * (ring_spacing + rng.random_range(-jitter..=jitter)) * cos,
            );
            // Loosely tangential: independent random speeds per component so
            // orbits are eccentric rather than circular.
            let velocity = DVec2::new(
                -rng.random_range(60.0..=140.0) * jf * sin + rng.random_range(60.0..=140.0) * jf * cos,
                -rng.random_range(60.0..=140.0) * jf * cos - rng.random_range(60.0..=140.0) * jf * sin,
            );

            bodies.push(Body::with_density(position, velocity, mass, params.density)?);
        }
    }

    bodies.sort_by(|a, b| a.mass.total_cmp(&b.mass));
    Ok(bodies)
}
