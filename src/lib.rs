//! gravsim: a gravitational N-body core.
//!
//! A set of mutually attracting bodies evolves under pairwise Newtonian
//! gravity, with inelastic merging whenever bodies overlap. The host (window,
//! camera, HUD, spawn UI) lives outside this crate: it hands the [`Engine`]
//! an initial body list, calls [`Engine::step`] once per frame, and reads the
//! body collection back for rendering.
//!
//! ```
//! use glam::DVec2;
//! use gravsim::{Body, Engine, SimParams};
//!
//! # fn main() -> gravsim::error::Result<()> {
//! let params = SimParams::default();
//! let bodies = vec![
//!     Body::with_density(DVec2::new(-50.0, 0.0), DVec2::new(0.0, 2.0), 1_000.0, params.density)?,
//!     Body::with_density(DVec2::new(50.0, 0.0), DVec2::new(0.0, -2.0), 5_000.0, params.density)?,
//! ];
//! let mut engine = Engine::new(params, bodies)?;
//! engine.step(1.0 / 60.0)?;
//! assert_eq!(engine.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;

pub use crate::core::{radius_for_mass, Body, Engine, SimParams};
pub use crate::error::{Error, Result};
