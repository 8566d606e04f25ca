//! Aggregate statistics, recomputed each frame and never stored

use serde::{Deserialize, Serialize};

use super::particle::Particle;
use super::physics;
use crate::vec2::{self, Vector2, ZERO};

/// Whole-system quantities derived from a particle list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Vector sum of per-particle momentum
    pub momentum: Vector2,
    /// Total kinetic energy
    pub energy: f64,
    /// Sum of pairwise gravitational potential energy
    pub potential_energy: f64,
    /// Mass-weighted average position
    pub center_of_mass: Vector2,
}

impl Stats {
    /// Kinetic plus potential energy
    #[inline]
    pub fn total_energy(&self) -> f64 {
        self.energy + self.potential_energy
    }
}

pub fn stats(particles: &[Particle], g: f64) -> Stats {
    let momentum = particles.iter().map(physics::momentum).fold(ZERO, vec2::sum);
    let energy = particles.iter().map(physics::kinetic_energy).sum();

    let potential_energy = particles
        .iter()
        .enumerate()
        .flat_map(|(i, a)| particles[i + 1..].iter().map(move |b| (a, b)))
        .map(|(a, b)| physics::potential_energy(a, b, g))
        .sum();

    Stats {
        momentum,
        energy,
        potential_energy,
        center_of_mass: center_of_mass(particles),
    }
}

/// `sum(m_i * s_i) / sum(m_i)`, or the origin for an empty system
pub fn center_of_mass(particles: &[Particle]) -> Vector2 {
    let total_mass: f64 = particles.iter().map(|p| p.mass).sum();
    if particles.is_empty() || total_mass == 0.0 {
        return ZERO;
    }
    let weighted = particles
        .iter()
        .map(|p| vec2::scale(p.mass, p.position))
        .fold(ZERO, vec2::sum);
    vec2::scale(1.0 / total_mass, weighted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn body(x: f64, y: f64, vx: f64, vy: f64, m: f64) -> Particle {
        Particle::new(DVec2::new(x, y), DVec2::new(vx, vy), m, [0, 0, 0])
    }

    #[test]
    fn test_stats_of_two_bodies() {
        let ps = vec![body(0.0, 0.0, 1.0, 0.0, 3.0), body(4.0, 0.0, -1.0, 2.0, 1.0)];
        let s = stats(&ps, 1.0);
        assert_eq!(s.momentum, DVec2::new(2.0, 2.0));
        // 0.5*3*1 + 0.5*1*5
        assert!((s.energy - 4.0).abs() < 1e-12);
        assert!((s.potential_energy + 0.75).abs() < 1e-12);
        assert_eq!(s.center_of_mass, DVec2::new(1.0, 0.0));
        assert!((s.total_energy() - 3.25).abs() < 1e-12);
    }

    #[test]
    fn test_empty_system() {
        let s = stats(&[], 1.0);
        assert_eq!(s.momentum, ZERO);
        assert_eq!(s.energy, 0.0);
        assert_eq!(s.center_of_mass, ZERO);
    }
}
