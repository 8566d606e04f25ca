//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed unit timestep only
//! - Seeded RNG only
//! - Particle lists replaced wholesale, never mutated in place
//! - No rendering or platform dependencies

pub mod dataset;
pub mod integrator;
pub mod particle;
pub mod physics;
pub mod state;
pub mod stats;
pub mod tick;

pub use dataset::{DatasetConfig, DatasetKind};
pub use integrator::{Integrator, StepParams, evolve};
pub use particle::{History, Particle, Rgb, Snapshot};
pub use physics::{gravity, kinetic_energy, momentum, orbital_speed, potential_energy};
pub use state::SimState;
pub use stats::{Stats, center_of_mass, stats};
pub use tick::{TickInput, tick};
