//! Fixed unit-step integrators for the particle system
//!
//! Both schemes take the current particle list by reference and return a
//! brand new list; the input is never modified.
//!
//! - [`Integrator::PredictorCorrector`]: two force evaluations per step,
//!   velocity-Verlet style. Local truncation error O(dt^3), energy stays
//!   bounded over long runs.
//! - [`Integrator::SemiImplicitEuler`]: one force evaluation per step.
//!   Local truncation error O(dt^2), cheaper but drifts.

use serde::{Deserialize, Serialize};

use super::particle::{History, Particle};
use super::physics::gravity;
use crate::consts::{DEFAULT_G, DEFAULT_HISTORY_LENGTH};
use crate::vec2::{self, Vector2, ZERO};

/// Which integration scheme `evolve` uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    #[default]
    PredictorCorrector,
    SemiImplicitEuler,
}

/// Per-step parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    /// Gravitational constant
    pub g: f64,
    /// Snapshots kept per particle
    pub history_length: usize,
    pub integrator: Integrator,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            history_length: DEFAULT_HISTORY_LENGTH,
            integrator: Integrator::default(),
        }
    }
}

/// Net gravitational force on every particle (direct O(n^2) sum)
///
/// The self pair is included and contributes zero through the degenerate
/// guard in [`gravity`].
pub fn forces(particles: &[Particle], g: f64) -> Vec<Vector2> {
    particles
        .iter()
        .map(|p| {
            particles
                .iter()
                .fold(ZERO, |acc, other| vec2::sum(acc, gravity(p, other, g)))
        })
        .collect()
}

/// Acceleration of every particle: net force divided by its mass
pub fn accelerations(particles: &[Particle], g: f64) -> Vec<Vector2> {
    forces(particles, g)
        .into_iter()
        .zip(particles)
        .map(|(f, p)| vec2::scale(1.0 / p.mass, f))
        .collect()
}

/// Advance the system by one unit timestep
pub fn evolve(particles: &[Particle], params: &StepParams) -> Vec<Particle> {
    if particles.is_empty() {
        return Vec::new();
    }
    match params.integrator {
        Integrator::PredictorCorrector => predictor_corrector(particles, params),
        Integrator::SemiImplicitEuler => semi_implicit_euler(particles, params),
    }
}

fn predictor_corrector(particles: &[Particle], params: &StepParams) -> Vec<Particle> {
    // a1 from the current configuration
    let a1 = accelerations(particles, params.g);

    // Predictor: s' = s + v + a1/2, velocities unchanged
    let predicted: Vec<Particle> = particles
        .iter()
        .zip(a1.iter())
        .map(|(p, a)| Particle {
            position: vec2::sum(vec2::sum(p.position, p.velocity), vec2::scale(0.5, *a)),
            ..p.clone()
        })
        .collect();

    // a2 at the predicted positions
    let a2 = accelerations(&predicted, params.g);

    // Corrector: v' = v + (a1 + a2)/2, keep the predicted position
    predicted
        .into_iter()
        .zip(particles)
        .zip(a1.iter().zip(a2.iter()))
        .map(|((next, prev), (a1, a2))| Particle {
            velocity: vec2::sum(prev.velocity, vec2::scale(0.5, vec2::sum(*a1, *a2))),
            history: record(prev, params.history_length),
            ..next
        })
        .collect()
}

fn semi_implicit_euler(particles: &[Particle], params: &StepParams) -> Vec<Particle> {
    accelerations(particles, params.g)
        .into_iter()
        .zip(particles)
        .map(|(a, p)| {
            let velocity = vec2::sum(p.velocity, a);
            Particle {
                position: vec2::sum(p.position, velocity),
                velocity,
                history: record(p, params.history_length),
                ..p.clone()
            }
        })
        .collect()
}

/// History of `p` with its pre-update snapshot appended
fn record(p: &Particle, capacity: usize) -> History {
    let history = if p.history.capacity() == capacity {
        p.history.clone()
    } else {
        p.history.resized(capacity)
    };
    history.pushed(p.snapshot())
}
