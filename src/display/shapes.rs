//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::frame::{Circle, Frame, Line};
use super::vertex::{Vertex, rgba};

/// Triangles per circle
pub const CIRCLE_SEGMENTS: usize = 24;
/// Width of overlay lines in pixels
pub const LINE_WIDTH: f32 = 1.0;

/// Generate vertices for a filled circle (triangle list)
pub fn circle(c: &Circle) -> Vec<Vertex> {
    if c.radius <= 0.0 {
        return Vec::new();
    }
    let color = rgba(c.color);
    let mut vertices = Vec::with_capacity(CIRCLE_SEGMENTS * 3);

    for i in 0..CIRCLE_SEGMENTS {
        let a1 = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let a2 = (i + 1) as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let p1 = c.center + Vec2::new(a1.cos(), a1.sin()) * c.radius;
        let p2 = c.center + Vec2::new(a2.cos(), a2.sin()) * c.radius;

        vertices.push(Vertex::new(c.center.x, c.center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a line segment as a thin quad
pub fn line(l: &Line, width: f32) -> Vec<Vertex> {
    let dir = (l.to - l.from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let color = rgba(l.color);
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let v1a = l.from + perp;
    let v1b = l.from - perp;
    let v2a = l.to + perp;
    let v2b = l.to - perp;

    vec![
        Vertex::new(v1a.x, v1a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2b.x, v2b.y, color),
    ]
}

/// Flatten a frame into one triangle list: circles first, then lines
///
/// Labels and stat text are left to the host's text renderer.
pub fn tessellate(frame: &Frame) -> Vec<Vertex> {
    frame
        .circles
        .iter()
        .flat_map(circle)
        .chain(frame.lines.iter().flat_map(|l| line(l, LINE_WIDTH)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::frame::StatsText;
    use crate::sim::Stats;
    use glam::DVec2;

    fn empty_stats() -> StatsText {
        StatsText::new(&Stats {
            momentum: DVec2::ZERO,
            energy: 0.0,
            potential_energy: 0.0,
            center_of_mass: DVec2::ZERO,
        })
    }

    #[test]
    fn test_circle_vertex_count() {
        let c = Circle {
            center: Vec2::new(10.0, 10.0),
            radius: 5.0,
            color: [255, 255, 255, 255],
        };
        let verts = circle(&c);
        assert_eq!(verts.len(), CIRCLE_SEGMENTS * 3);
        for v in &verts {
            let d = Vec2::from(v.position).distance(c.center);
            assert!(d <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_degenerate_shapes_are_skipped() {
        let dot = Circle {
            center: Vec2::ZERO,
            radius: 0.0,
            color: [0; 4],
        };
        assert!(circle(&dot).is_empty());

        let point = Line {
            from: Vec2::ONE,
            to: Vec2::ONE,
            color: [0; 4],
        };
        assert!(line(&point, LINE_WIDTH).is_empty());
    }

    #[test]
    fn test_tessellate_frame() {
        let frame = Frame {
            circles: vec![Circle {
                center: Vec2::ZERO,
                radius: 1.0,
                color: [255; 4],
            }],
            lines: vec![Line {
                from: Vec2::ZERO,
                to: Vec2::new(10.0, 0.0),
                color: [100, 100, 100, 255],
            }],
            labels: Vec::new(),
            stats: empty_stats(),
        };
        let verts = tessellate(&frame);
        assert_eq!(verts.len(), CIRCLE_SEGMENTS * 3 + 6);
        // Line quad spans the line's width
        let ys: Vec<f32> = verts[CIRCLE_SEGMENTS * 3..].iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|y| y.abs() == LINE_WIDTH / 2.0));
    }
}
