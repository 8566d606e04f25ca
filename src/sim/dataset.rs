//! Initial particle configurations
//!
//! All randomness is drawn from a caller-provided seeded [`Pcg32`], so the
//! same seed always yields the same particle list.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particle::{Particle, Rgb};
use super::physics::orbital_speed;
use crate::consts::*;
use crate::vec2::{self, Vector2, ZERO};

/// Which starting configuration to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Sun at the origin, planets on random angles, moons around each planet
    #[default]
    Solar,
    /// Planets stacked in a column below a lighter sun
    Column,
}

/// Shape of the generated system
///
/// Fields missing from a settings file fall back to the defaults of the
/// named `kind`, so `{"kind": "column"}` yields [`DatasetConfig::column`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DatasetFile")]
pub struct DatasetConfig {
    pub kind: DatasetKind,
    pub sun_mass: f64,
    pub planets: usize,
    pub planet_spacing: f64,
    /// Moons per planet (solar only)
    pub moons: usize,
    pub moon_spacing: f64,
    /// Upper bound of a child's mass as a fraction of its parent's (solar only)
    pub mass_ratio: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            kind: DatasetKind::Solar,
            sun_mass: SUN_MASS,
            planets: PLANET_COUNT,
            planet_spacing: PLANET_SPACING,
            moons: MOON_COUNT,
            moon_spacing: MOON_SPACING,
            mass_ratio: MASS_RATIO,
        }
    }
}

/// On-disk form of [`DatasetConfig`]: every field except `kind` is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DatasetFile {
    kind: DatasetKind,
    sun_mass: Option<f64>,
    planets: Option<usize>,
    planet_spacing: Option<f64>,
    moons: Option<usize>,
    moon_spacing: Option<f64>,
    mass_ratio: Option<f64>,
}

impl From<DatasetFile> for DatasetConfig {
    fn from(file: DatasetFile) -> Self {
        let base = Self::for_kind(file.kind);
        Self {
            kind: file.kind,
            sun_mass: file.sun_mass.unwrap_or(base.sun_mass),
            planets: file.planets.unwrap_or(base.planets),
            planet_spacing: file.planet_spacing.unwrap_or(base.planet_spacing),
            moons: file.moons.unwrap_or(base.moons),
            moon_spacing: file.moon_spacing.unwrap_or(base.moon_spacing),
            mass_ratio: file.mass_ratio.unwrap_or(base.mass_ratio),
        }
    }
}

impl DatasetConfig {
    /// Defaults of the given layout
    pub fn for_kind(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::Solar => Self::default(),
            DatasetKind::Column => Self::column(),
        }
    }

    /// Defaults of the column layout
    pub fn column() -> Self {
        Self {
            kind: DatasetKind::Column,
            sun_mass: COLUMN_SUN_MASS,
            planet_spacing: COLUMN_STEP,
            moons: 0,
            ..Self::default()
        }
    }
}

/// Build the configured dataset
pub fn generate(cfg: &DatasetConfig, g: f64, rng: &mut Pcg32) -> Vec<Particle> {
    let particles = match cfg.kind {
        DatasetKind::Solar => solar(cfg, g, rng),
        DatasetKind::Column => column(cfg, g, rng),
    };
    log::info!(
        "Generated {:?} dataset: {} particles",
        cfg.kind,
        particles.len()
    );
    particles
}

/// Random color, each channel in 0..255
pub fn random_color(rng: &mut Pcg32) -> Rgb {
    [
        rng.random_range(0..255),
        rng.random_range(0..255),
        rng.random_range(0..255),
    ]
}

/// A body on a circular orbit of radius `r` around `parent`
///
/// The angle is drawn from [0, pi), the tangential direction comes from
/// `unit(normal(offset))` and the mass is a random fraction of
/// `parent.mass * mass_ratio`.
pub fn orbital(parent: &Particle, r: f64, g: f64, mass_ratio: f64, rng: &mut Pcg32) -> Particle {
    let theta = rng.random::<f64>() * std::f64::consts::PI;
    let offset = vec2::from_polar(theta, r);

    let position = vec2::sum(parent.position, offset);
    let tangent = vec2::unit(vec2::normal(offset));
    let velocity = vec2::sum(
        parent.velocity,
        vec2::scale(orbital_speed(parent, r, g), tangent),
    );
    let mass = parent.mass * mass_ratio * rng.random::<f64>();

    Particle::new(position, velocity, mass, random_color(rng))
}

/// `n` orbiting bodies around `center` at radii `spacing, 2*spacing, ...`
pub fn debris_field(
    center: &Particle,
    n: usize,
    spacing: f64,
    g: f64,
    mass_ratio: f64,
    rng: &mut Pcg32,
) -> Vec<Particle> {
    (0..n)
        .map(|k| (1 + k) as f64 * spacing)
        .map(|r| orbital(center, r, g, mass_ratio, rng))
        .collect()
}

/// Sun, then planets, then every planet's moons
pub fn solar(cfg: &DatasetConfig, g: f64, rng: &mut Pcg32) -> Vec<Particle> {
    let sun = Particle::new(ZERO, ZERO, cfg.sun_mass, SUN_COLOR);
    let planets = debris_field(&sun, cfg.planets, cfg.planet_spacing, g, cfg.mass_ratio, rng);
    let moons: Vec<Particle> = planets
        .iter()
        .flat_map(|p| debris_field(p, cfg.moons, cfg.moon_spacing, g, cfg.mass_ratio, rng))
        .collect();

    std::iter::once(sun).chain(planets).chain(moons).collect()
}

/// Planets below the sun at heights `k*spacing + jitter`, moving sideways at
/// orbital speed, then the sun itself
pub fn column(cfg: &DatasetConfig, g: f64, rng: &mut Pcg32) -> Vec<Particle> {
    let center = Vector2::from(COLUMN_CENTER);
    let sun = Particle::new(center, ZERO, cfg.sun_mass, COLUMN_SUN_COLOR);

    let mut particles: Vec<Particle> = (1..=cfg.planets)
        .map(|k| {
            let height = k as f64 * cfg.planet_spacing + rng.random::<f64>() * COLUMN_JITTER;
            let position = vec2::sum(center, Vector2::new(0.0, height));
            let velocity = Vector2::new(orbital_speed(&sun, height, g), 0.0);
            let mass = 1.0 + rng.random::<f64>() * 5.0;
            Particle::new(position, velocity, mass, random_color(rng))
        })
        .collect();
    particles.push(sun);
    particles
}
