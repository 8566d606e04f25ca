//! Display contract for an external renderer
//!
//! Nothing here talks to a window or GPU. The host reads a [`Frame`] (or
//! its tessellated [`Vertex`] buffer) each tick and draws it however it likes.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Circle, Frame, Label, Line, StatsText, build_frame, particle_diameter};
pub use shapes::tessellate;
pub use vertex::Vertex;

use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::ZOOM_SENSITIVITY;

/// Optional overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFlags {
    /// Momentum magnitude label next to each particle
    pub show_momentum: bool,
    /// Velocity line segment
    pub show_velocity: bool,
    /// Velocity change since the last snapshot
    pub show_force: bool,
}

/// Zoom state and world-to-screen mapping
///
/// The camera follows the center of mass: it lands at the middle of the
/// screen and everything is scaled by `zoom` around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: f64,
    /// Factor applied per scroll notch
    pub sensitivity: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZOOM_SENSITIVITY)
    }
}

impl Viewport {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            zoom: 1.0,
            sensitivity,
        }
    }

    /// Apply one wheel event: `zoom *= sensitivity^sign(delta)`
    ///
    /// A zero delta counts as positive.
    pub fn scroll(&mut self, delta: f64) {
        let sign = if delta == 0.0 { 1.0 } else { delta.signum() };
        self.zoom *= self.sensitivity.powf(sign);
    }

    /// Map a world position to screen pixels
    pub fn to_screen(&self, world: DVec2, center_of_mass: DVec2, screen_size: Vec2) -> Vec2 {
        ((world - center_of_mass) * self.zoom).as_vec2() + screen_size / 2.0
    }

    /// Map a world length to screen pixels
    #[inline]
    pub fn scale_length(&self, length: f64) -> f32 {
        (length * self.zoom) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_direction() {
        let mut v = Viewport::default();
        v.scroll(120.0);
        assert!((v.zoom - 0.75).abs() < 1e-12);
        v.scroll(-3.0);
        assert!((v.zoom - 1.0).abs() < 1e-12);
        v.scroll(-1.0);
        assert!((v.zoom - 1.0 / 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_zero_scroll_zooms_out() {
        let mut v = Viewport::default();
        v.scroll(0.0);
        assert!((v.zoom - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_center_of_mass_lands_mid_screen() {
        let mut v = Viewport::default();
        v.zoom = 2.0;
        let com = DVec2::new(100.0, -50.0);
        let screen = Vec2::new(1000.0, 800.0);
        assert_eq!(v.to_screen(com, com, screen), Vec2::new(500.0, 400.0));
        assert_eq!(
            v.to_screen(com + DVec2::new(10.0, 0.0), com, screen),
            Vec2::new(520.0, 400.0)
        );
    }
}
