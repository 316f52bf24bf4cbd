use glam::DVec2;

use crate::core::body::{radius_for_mass, Body};
use crate::core::params::SimParams;
use crate::error::{Error, Result};

/// The N-body engine: owns the ordered body collection and advances it one
/// step at a time.
///
/// Each step runs four strictly sequential passes over the collection:
/// collision/merge, pairwise force accumulation, velocity integration,
/// position integration. The engine is stateless between steps beyond the
/// bodies themselves; a step is a pure function of (bodies, dt, params).
///
/// Single-threaded by design: callers read or append only between steps.
#[derive(Debug)]
pub struct Engine {
    params: SimParams,
    bodies: Vec<Body>,
}

impl Engine {
    /// Create an engine that takes ownership of `bodies` as given.
    ///
    /// No sort order is required, though callers conventionally supply
    /// ascending-mass order so that [`heaviest_mass`](Self::heaviest_mass)
    /// reads the largest body. Every body is re-validated.
    pub fn new(params: SimParams, bodies: Vec<Body>) -> Result<Self> {
        for body in &bodies {
            body.validate()?;
        }
        Ok(Self { params, bodies })
    }

    /// Simulation constants this engine was built with.
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Read-only view of the current body collection.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True if no bodies remain (or none were supplied).
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Mass of the last body in the collection.
    ///
    /// By caller convention the collection is supplied sorted ascending by
    /// mass, making this "the biggest body". The engine never re-sorts, so
    /// the convention can drift after merges; it is the caller's to keep.
    pub fn heaviest_mass(&self) -> Option<f64> {
        self.bodies.last().map(|b| b.mass)
    }

    /// Append one externally-created body at the end of the collection.
    /// Allowed only between steps.
    pub fn push(&mut self, body: Body) -> Result<()> {
        body.validate()?;
        self.bodies.push(body);
        Ok(())
    }

    /// Advance the simulation by `dt` seconds of wall-clock time.
    ///
    /// Runs merge, force, and integration passes in order. `dt` must be
    /// non-negative and finite (`Error::InvalidTimestep` otherwise); on any
    /// error the collection is left exactly as it was. All passes operate on
    /// a working buffer that is swapped in only once the step has fully
    /// completed.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(Error::InvalidTimestep(dt));
        }

        let mut bodies = self.merge_pass();
        let forces = accumulate_forces(&bodies, self.params.gravity_const);
        integrate(&mut bodies, &forces, self.params.fixed_timestep, dt);

        log::trace!(
            "step dt={dt}: {} -> {} bodies",
            self.bodies.len(),
            bodies.len()
        );
        self.bodies = bodies;
        Ok(())
    }

    /// Collision detection and inelastic merging.
    ///
    /// Scans every pair (i in 0..n, j in 0..i) of the step's starting
    /// collection exactly once. Two bodies collide iff the squared distance
    /// between their centers is at most `(r_i + r_j)^2` (the squared-distance
    /// vs squared-radius-sum test is inherited behavior, kept as-is). On a
    /// hit the heavier body survives, keeping its own position; ties go to
    /// slot `i`. Survivor state: summed mass, momentum-weighted velocity,
    /// radius re-derived from the density invariant before the next test.
    ///
    /// The scan swaps slot contents and marks the loser removed rather than
    /// restarting, so a merged slot can be matched again later in the same
    /// pass; chained multi-way merges within one step are intentional.
    /// Returns the survivors in their original relative order.
    fn merge_pass(&self) -> Vec<Body> {
        let mut bodies = self.bodies.clone();
        let n = bodies.len();
        let mut removed = vec![false; n];

        for i in 0..n {
            for j in 0..i {
                let dist_sq = bodies[i].position.distance_squared(bodies[j].position);
                let r_sum = bodies[i].radius + bodies[j].radius;
                if dist_sq <= r_sum * r_sum {
                    if bodies[i].mass < bodies[j].mass {
                        bodies.swap(i, j);
                    }
                    removed[j] = true;

                    let total = bodies[i].mass + bodies[j].mass;
                    bodies[i].velocity = (bodies[i].velocity * bodies[i].mass
                        + bodies[j].velocity * bodies[j].mass)
                        / total;
                    bodies[i].mass = total;
                    bodies[i].radius = radius_for_mass(total, self.params.density);

                    log::debug!(
                        "merge: slot {j} absorbed into slot {i}, survivor mass {total}"
                    );
                }
            }
        }

        bodies
            .into_iter()
            .zip(removed)
            .filter_map(|(body, gone)| (!gone).then_some(body))
            .collect()
    }
}

/// Net gravitational force on each body from every other body.
///
/// For each pair, `F = G * m_i * m_j / d^2` directed along the line joining
/// the centers (via `atan2`), accumulated equal and opposite. Coincident
/// centers (`d^2 == 0`, only reachable when both radii are zero and the
/// merge pass therefore left the pair alone) contribute zero force rather
/// than dividing by zero.
///
/// Pure read of positions and masses; output is indexed like `bodies`.
fn accumulate_forces(bodies: &[Body], gravity_const: f64) -> Vec<DVec2> {
    let mut forces = vec![DVec2::ZERO; bodies.len()];

    for i in 0..bodies.len() {
        for j in 0..i {
            let delta = bodies[i].position - bodies[j].position;
            let dist_sq = delta.length_squared();
            if dist_sq == 0.0 {
                continue;
            }

            let magnitude = gravity_const * bodies[i].mass * bodies[j].mass / dist_sq;
            let angle = delta.y.atan2(delta.x);
            let force = DVec2::new(magnitude * angle.cos(), magnitude * angle.sin());

            // Attractive: i is pulled back toward j, j pulled toward i.
            forces[i] -= force;
            forces[j] += force;
        }
    }

    forces
}

/// Semi-implicit Euler update: velocities first, then positions.
///
/// The velocity kick uses the configured fixed timestep while the position
/// drift uses the wall-clock `dt` argument. The asymmetry is inherited
/// behavior: the force contribution's time-scale stays constant across
/// frame rates, positional motion does not.
fn integrate(bodies: &mut [Body], forces: &[DVec2], fixed_timestep: f64, dt: f64) {
    for (body, force) in bodies.iter_mut().zip(forces) {
        body.velocity += *force * fixed_timestep / body.mass;
    }
    for body in bodies.iter_mut() {
        body.position += body.velocity * dt;
    }
}
