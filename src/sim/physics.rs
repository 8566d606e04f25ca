//! Pairwise Newtonian gravity and per-particle quantities

use super::particle::Particle;
use crate::vec2::{self, Vector2, ZERO};

/// Gravitational force exerted on `p1` by `p2`, pointing from `p1` toward `p2`
///
/// Coincident particles (or a separation small enough that the force
/// overflows) contribute zero force.
pub fn gravity(p1: &Particle, p2: &Particle, g: f64) -> Vector2 {
    let offset = vec2::diff(p2.position, p1.position);
    let distance = vec2::magnitude(offset);
    let force = g * p1.mass * p2.mass / distance.powi(2);

    if force.is_infinite() || distance == 0.0 {
        return ZERO;
    }
    vec2::scale(force, vec2::unit(offset))
}

/// Gravitational potential energy of a pair, zero for degenerate pairs
pub fn potential_energy(p1: &Particle, p2: &Particle, g: f64) -> f64 {
    let distance = vec2::magnitude(vec2::diff(p2.position, p1.position));
    let u = -g * p1.mass * p2.mass / distance;
    if !u.is_finite() || distance == 0.0 {
        return 0.0;
    }
    u
}

#[inline]
pub fn momentum(p: &Particle) -> Vector2 {
    vec2::scale(p.mass, p.velocity)
}

#[inline]
pub fn kinetic_energy(p: &Particle) -> f64 {
    0.5 * p.mass * vec2::magnitude(p.velocity).powi(2)
}

/// Speed of a circular orbit at `radius` around `central`
#[inline]
pub fn orbital_speed(central: &Particle, radius: f64, g: f64) -> f64 {
    (g * central.mass / radius).sqrt()
}
