//! Immutable 2D vector helpers
//!
//! Thin functional layer over [`glam::DVec2`]. Every helper takes vectors by
//! value and returns a new one; nothing is mutated in place.

use glam::DVec2;

/// 2D vector of reals
pub type Vector2 = DVec2;

/// The zero vector
pub const ZERO: Vector2 = DVec2::ZERO;

/// Scale `v` by `k`
#[inline]
pub fn scale(k: f64, v: Vector2) -> Vector2 {
    DVec2::new(k * v.x, k * v.y)
}

/// Component-wise sum
#[inline]
pub fn sum(a: Vector2, b: Vector2) -> Vector2 {
    DVec2::new(a.x + b.x, a.y + b.y)
}

/// `a - b`, expressed as `a + (-1)b`
#[inline]
pub fn diff(a: Vector2, b: Vector2) -> Vector2 {
    sum(a, scale(-1.0, b))
}

#[inline]
pub fn dot(a: Vector2, b: Vector2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Euclidean length, never negative
#[inline]
pub fn magnitude(v: Vector2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Unit vector in the direction of `v`
///
/// The zero vector has no direction and yields non-finite components.
#[inline]
pub fn unit(v: Vector2) -> Vector2 {
    scale(1.0 / magnitude(v).abs(), v)
}

/// A direction perpendicular to `v`, neither unit length nor consistently
/// oriented: `(-y, 0)` when `x == 0`, otherwise `(-y/x, 1)`.
///
/// Orbital velocity initialization relies on this exact output, so pass it
/// through [`unit`] rather than replacing it with a true rotation.
#[inline]
pub fn normal(v: Vector2) -> Vector2 {
    if v.x == 0.0 {
        DVec2::new(-v.y, 0.0)
    } else {
        DVec2::new(-v.y / v.x, 1.0)
    }
}

/// Convert polar (theta, r) to cartesian (x, y)
#[inline]
pub fn from_polar(theta: f64, r: f64) -> Vector2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Exact component equality
#[inline]
pub fn eq(a: Vector2, b: Vector2) -> bool {
    a.x == b.x && a.y == b.y
}
