//! Core simulation types for the gravitational N-body engine.
//!
//! [`Body`] is the data entity, [`SimParams`] the immutable constants, and
//! [`Engine`] owns the body collection and advances it step by step. The
//! [`scenario`] module builds seeded starting fields.

pub mod body;
pub mod engine;
pub mod params;
pub mod scenario;

pub use body::{radius_for_mass, Body};
pub use engine::Engine;
pub use params::SimParams;
