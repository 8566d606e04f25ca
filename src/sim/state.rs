//! Simulation state owned by the tick loop

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::dataset;
use super::integrator::{StepParams, evolve};
use super::particle::Particle;
use super::stats::{Stats, stats};
use crate::display::{DisplayFlags, Viewport};
use crate::settings::Settings;

/// RNG seed wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state
///
/// The particle list is replaced wholesale on every evolution and never
/// mutated in place.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the dataset was generated from
    pub rng_state: RngState,
    /// Current system, in render order
    pub particles: Vec<Particle>,
    /// Number of evolutions applied so far
    pub time_ticks: u64,
    /// When set, ticks only evolve on an explicit step
    pub paused: bool,
    pub params: StepParams,
    /// Display toggles
    pub display: DisplayFlags,
    /// Zoom state
    pub viewport: Viewport,
}

impl SimState {
    /// Build the initial state described by `settings`
    pub fn new(settings: &Settings) -> Self {
        let rng_state = RngState::new(settings.seed);
        let mut rng = rng_state.to_rng();
        let particles = dataset::generate(&settings.dataset, settings.gravity, &mut rng)
            .into_iter()
            .map(|p| p.with_history_length(settings.history_length))
            .collect();

        log::info!(
            "Simulation ready: seed={}, G={}, integrator={:?}",
            settings.seed,
            settings.gravity,
            settings.integrator
        );

        Self {
            rng_state,
            particles,
            time_ticks: 0,
            paused: settings.start_paused,
            params: settings.step_params(),
            display: settings.display,
            viewport: Viewport::new(settings.zoom_sensitivity),
        }
    }

    /// Evolve exactly once
    pub fn advance(&mut self) {
        self.particles = evolve(&self.particles, &self.params);
        self.time_ticks += 1;
    }

    /// Aggregate statistics of the current system
    pub fn stats(&self) -> Stats {
        stats(&self.particles, self.params.g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_settings() {
        let mut settings = Settings::default();
        settings.history_length = 7;
        settings.start_paused = true;
        let state = SimState::new(&settings);

        assert!(state.paused);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.particles.len(), 16);
        assert!(state.particles.iter().all(|p| p.history.capacity() == 7));
    }

    #[test]
    fn test_advance_counts_ticks() {
        let mut state = SimState::new(&Settings::default());
        state.advance();
        state.advance();
        assert_eq!(state.time_ticks, 2);
        assert!(state.particles.iter().all(|p| p.history.len() == 2));
    }
}
