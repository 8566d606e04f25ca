//! Fixed timestep simulation tick
//!
//! One call per rendered frame. Applies that frame's input, then evolves the
//! system at most once.

use super::state::SimState;

/// Input commands for a single tick
///
/// Host mapping: space sets `step`, `p` or a mouse click sets
/// `toggle_pause`, the scroll wheel sets `scroll` to the wheel delta.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Evolve exactly once, even while paused
    pub step: bool,
    /// Pause toggle
    pub toggle_pause: bool,
    /// Wheel delta for this frame
    pub scroll: Option<f64>,
    /// Overlay toggles
    pub toggle_velocity: bool,
    pub toggle_force: bool,
    pub toggle_momentum: bool,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &TickInput) {
    if input.toggle_pause {
        state.paused = !state.paused;
        log::debug!(
            "{} at tick {}",
            if state.paused { "Paused" } else { "Resumed" },
            state.time_ticks
        );
    }

    if let Some(delta) = input.scroll {
        state.viewport.scroll(delta);
    }
    if input.toggle_velocity {
        state.display.show_velocity = !state.display.show_velocity;
    }
    if input.toggle_force {
        state.display.show_force = !state.display.show_force;
    }
    if input.toggle_momentum {
        state.display.show_momentum = !state.display.show_momentum;
    }

    if input.step || !state.paused {
        state.advance();
    }
}
