//! Gravity Sim - a small 2D N-body gravity simulation
//!
//! Core modules:
//! - `vec2`: Immutable 2D vector helpers
//! - `sim`: Deterministic simulation (physics, integration, datasets, tick loop)
//! - `display`: Frame building for an external renderer
//! - `settings`: Data-driven configuration
//! - `error`: Crate error type

pub mod display;
pub mod error;
pub mod settings;
pub mod sim;
pub mod vec2;

pub use error::{Error, Result};
pub use settings::Settings;
pub use sim::{Particle, SimState, Stats, TickInput, evolve, stats, tick};
pub use vec2::Vector2;

/// Simulation configuration constants
pub mod consts {
    /// Gravitational constant used by the default settings
    pub const DEFAULT_G: f64 = 0.01;
    /// Snapshots kept per particle for trail rendering
    pub const DEFAULT_HISTORY_LENGTH: usize = 100;
    /// Largest history length settings accept
    pub const MAX_HISTORY_LENGTH: usize = 10_000;

    /// Solar dataset defaults
    pub const SUN_MASS: f64 = 30_000.0;
    pub const SUN_COLOR: [u8; 3] = [0, 0, 255];
    pub const PLANET_COUNT: usize = 5;
    pub const PLANET_SPACING: f64 = 300.0;
    pub const MOON_COUNT: usize = 2;
    pub const MOON_SPACING: f64 = 50.0;
    /// Upper bound of a child's mass as a fraction of its parent's
    pub const MASS_RATIO: f64 = 0.1;

    /// Column dataset defaults
    pub const COLUMN_SUN_MASS: f64 = 1_500.0;
    pub const COLUMN_SUN_COLOR: [u8; 3] = [255, 255, 0];
    pub const COLUMN_CENTER: [f64; 2] = [500.0, 500.0];
    pub const COLUMN_STEP: f64 = 50.0;
    pub const COLUMN_JITTER: f64 = 25.0;

    /// Multiplicative zoom factor per scroll notch
    pub const ZOOM_SENSITIVITY: f64 = 0.75;
    /// Overlay line scales
    pub const VELOCITY_OVERLAY_SCALE: f64 = 5.0;
    pub const FORCE_OVERLAY_SCALE: f64 = 30.0;
    /// Momentum label offset from the particle, in screen pixels
    pub const LABEL_OFFSET: [f32; 2] = [10.0, 10.0];
}
