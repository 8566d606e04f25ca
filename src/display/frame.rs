//! Per-frame draw list built from the particle list and its statistics

use glam::Vec2;

use super::vertex::colors;
use super::{DisplayFlags, Viewport};
use crate::consts::{FORCE_OVERLAY_SCALE, LABEL_OFFSET, VELOCITY_OVERLAY_SCALE};
use crate::sim::physics::momentum;
use crate::sim::{Particle, Stats};
use crate::vec2::{self, Vector2};

/// Filled circle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: [u8; 4],
}

/// Line segment in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
    pub color: [u8; 4],
}

/// Text anchored at a screen position
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub pos: Vec2,
    pub text: String,
}

/// Text for the three stat output targets
#[derive(Debug, Clone, PartialEq)]
pub struct StatsText {
    pub momentum: String,
    pub energy: String,
    pub com: String,
}

impl StatsText {
    pub fn new(stats: &Stats) -> Self {
        let m = stats.momentum;
        let c = stats.center_of_mass;
        Self {
            momentum: format!("Total Momentum: {}, {}", m.x, m.y),
            energy: format!("Total Energy: {}", stats.energy),
            com: format!("COM: {}, {}", c.x, c.y),
        }
    }

    /// `(target id, text)` pairs
    pub fn targets(&self) -> [(&'static str, &str); 3] {
        [
            ("momentum", self.momentum.as_str()),
            ("energy", self.energy.as_str()),
            ("com", self.com.as_str()),
        ]
    }
}

/// Everything the host needs to draw one frame, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub circles: Vec<Circle>,
    pub lines: Vec<Line>,
    pub labels: Vec<Label>,
    pub stats: StatsText,
}

/// On-screen size of a particle at zoom 1
#[inline]
pub fn particle_diameter(p: &Particle) -> f64 {
    10.0 + p.mass / 50.0
}

fn opaque([r, g, b]: [u8; 3]) -> [u8; 4] {
    [r, g, b, 255]
}

/// Build the draw list for `particles`
///
/// Each particle gets its body circle, then one fading dot per history
/// entry (oldest faintest), then the overlays enabled in `flags`.
pub fn build_frame(
    particles: &[Particle],
    stats: &Stats,
    flags: &DisplayFlags,
    viewport: &Viewport,
    screen_size: Vec2,
) -> Frame {
    let com = stats.center_of_mass;
    let to_screen = |w: Vector2| viewport.to_screen(w, com, screen_size);

    let mut circles = Vec::new();
    let mut lines = Vec::new();
    let mut labels = Vec::new();

    for p in particles {
        let d = particle_diameter(p);
        circles.push(Circle {
            center: to_screen(p.position),
            radius: viewport.scale_length(d / 2.0),
            color: opaque(p.color),
        });

        let len = p.history.len() as f64;
        for (i, snap) in p.history.iter().enumerate() {
            let ratio = i as f64 / len;
            let [r, g, b] = p.color;
            circles.push(Circle {
                center: to_screen(snap.position),
                radius: viewport.scale_length(d / 3.0 * ratio / 2.0),
                color: [r, g, b, (255.0 * ratio) as u8],
            });
        }

        if flags.show_velocity {
            lines.push(Line {
                from: to_screen(p.position),
                to: to_screen(vec2::sum(
                    p.position,
                    vec2::scale(VELOCITY_OVERLAY_SCALE, p.velocity),
                )),
                color: colors::OVERLAY,
            });
        }
        if flags.show_force {
            if let Some(last) = p.history.last() {
                let dv = vec2::diff(p.velocity, last.velocity);
                lines.push(Line {
                    from: to_screen(p.position),
                    to: to_screen(vec2::sum(p.position, vec2::scale(FORCE_OVERLAY_SCALE, dv))),
                    color: colors::OVERLAY,
                });
            }
        }
        if flags.show_momentum {
            labels.push(Label {
                pos: to_screen(p.position) + Vec2::from(LABEL_OFFSET),
                text: format!("{:.3}", vec2::magnitude(momentum(p))),
            });
        }
    }

    Frame {
        circles,
        lines,
        labels,
        stats: StatsText::new(stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{StepParams, evolve, stats};
    use glam::DVec2;

    const SCREEN: Vec2 = Vec2::new(1000.0, 1000.0);

    fn system() -> Vec<Particle> {
        vec![
            Particle::new(DVec2::ZERO, DVec2::ZERO, 3000.0, [0, 0, 255]),
            Particle::new(DVec2::new(300.0, 0.0), DVec2::new(0.0, 0.3), 10.0, [200, 10, 10]),
        ]
    }

    #[test]
    fn test_body_circles_without_history() {
        let ps = system();
        let s = stats(&ps, 0.01);
        let frame = build_frame(&ps, &s, &DisplayFlags::default(), &Viewport::default(), SCREEN);

        assert_eq!(frame.circles.len(), 2);
        assert!(frame.lines.is_empty());
        assert!(frame.labels.is_empty());
        // 10 + 3000/50 = 70
        assert_eq!(frame.circles[0].radius, 35.0);
        assert_eq!(frame.circles[0].color, [0, 0, 255, 255]);
    }

    #[test]
    fn test_trail_fades_in() {
        let mut ps = system();
        for _ in 0..4 {
            ps = evolve(&ps, &StepParams::default());
        }
        let s = stats(&ps, 0.01);
        let frame = build_frame(&ps, &s, &DisplayFlags::default(), &Viewport::default(), SCREEN);

        // body + 4 trail dots per particle
        assert_eq!(frame.circles.len(), 10);
        let alphas: Vec<u8> = frame.circles[1..5].iter().map(|c| c.color[3]).collect();
        assert_eq!(alphas, vec![0, 63, 127, 191]);
        assert_eq!(frame.circles[1].radius, 0.0);
    }

    #[test]
    fn test_overlays_follow_flags() {
        let ps = evolve(&system(), &StepParams::default());
        let s = stats(&ps, 0.01);
        let flags = DisplayFlags {
            show_momentum: true,
            show_velocity: true,
            show_force: true,
        };
        let frame = build_frame(&ps, &s, &flags, &Viewport::default(), SCREEN);

        assert_eq!(frame.lines.len(), 4);
        assert_eq!(frame.labels.len(), 2);
        assert_eq!(frame.labels[1].text, format!("{:.3}", vec2::magnitude(momentum(&ps[1]))));
    }

    #[test]
    fn test_label_offset_ignores_zoom() {
        let ps = system();
        let s = stats(&ps, 0.01);
        let flags = DisplayFlags {
            show_momentum: true,
            ..Default::default()
        };
        let mut viewport = Viewport::default();
        viewport.scroll(1.0);
        viewport.scroll(1.0);
        let frame = build_frame(&ps, &s, &flags, &viewport, SCREEN);

        assert_eq!(frame.labels.len(), 2);
        for (label, body) in frame.labels.iter().zip(&frame.circles) {
            let offset = label.pos - body.center;
            assert!((offset - Vec2::new(10.0, 10.0)).length() < 1e-3, "offset {offset:?}");
        }
    }

    #[test]
    fn test_force_overlay_needs_history() {
        let ps = system();
        let s = stats(&ps, 0.01);
        let flags = DisplayFlags {
            show_force: true,
            ..Default::default()
        };
        let frame = build_frame(&ps, &s, &flags, &Viewport::default(), SCREEN);
        assert!(frame.lines.is_empty());
    }

    #[test]
    fn test_stats_text_targets() {
        let ps = system();
        let text = StatsText::new(&stats(&ps, 0.01));
        let ids: Vec<&str> = text.targets().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["momentum", "energy", "com"]);
        assert!(text.energy.starts_with("Total Energy: "));
        assert!(text.momentum.starts_with("Total Momentum: "));
        assert!(text.com.starts_with("COM: "));
    }
}
