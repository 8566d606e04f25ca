//! Simulation settings
//!
//! Persisted as JSON. Every field has a default, so a partial file only
//! overrides what it names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::display::DisplayFlags;
use crate::error::{Error, Result};
use crate::sim::dataset::DatasetConfig;
use crate::sim::integrator::{Integrator, StepParams};

/// Trail length presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HistoryPreset {
    Short,
    #[default]
    Medium,
    Long,
}

impl HistoryPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryPreset::Short => "Short",
            HistoryPreset::Medium => "Medium",
            HistoryPreset::Long => "Long",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "short" => Some(HistoryPreset::Short),
            "medium" | "med" => Some(HistoryPreset::Medium),
            "long" => Some(HistoryPreset::Long),
            _ => None,
        }
    }

    /// Snapshots kept per particle for this preset
    pub fn history_length(&self) -> usize {
        match self {
            HistoryPreset::Short => 50,
            HistoryPreset::Medium => 100,
            HistoryPreset::Long => 500,
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Gravitational constant
    pub gravity: f64,
    /// Integration scheme
    pub integrator: Integrator,
    /// Snapshots kept per particle for trails
    pub history_length: usize,

    // === Dataset ===
    /// RNG seed for dataset generation
    pub seed: u64,
    pub dataset: DatasetConfig,

    // === Display ===
    pub display: DisplayFlags,
    /// Multiplicative zoom factor per scroll notch
    pub zoom_sensitivity: f64,
    /// Start paused
    pub start_paused: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_G,
            integrator: Integrator::PredictorCorrector,
            history_length: DEFAULT_HISTORY_LENGTH,

            seed: 0,
            dataset: DatasetConfig::default(),

            display: DisplayFlags::default(),
            zoom_sensitivity: ZOOM_SENSITIVITY,
            start_paused: false,
        }
    }
}

impl Settings {
    /// Apply a history preset
    pub fn apply_preset(&mut self, preset: HistoryPreset) {
        self.history_length = preset.history_length();
    }

    /// Parameters handed to `evolve` each tick
    pub fn step_params(&self) -> StepParams {
        StepParams {
            g: self.gravity,
            history_length: self.history_length,
            integrator: self.integrator,
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(Error::InvalidSettings(
                "gravity must be finite and > 0".into(),
            ));
        }
        if self.history_length > MAX_HISTORY_LENGTH {
            return Err(Error::InvalidSettings(format!(
                "history_length must be at most {MAX_HISTORY_LENGTH}"
            )));
        }
        let d = &self.dataset;
        if !d.sun_mass.is_finite() || d.sun_mass <= 0.0 {
            return Err(Error::InvalidSettings(
                "dataset.sun_mass must be finite and > 0".into(),
            ));
        }
        if !(d.mass_ratio > 0.0 && d.mass_ratio <= 1.0) {
            return Err(Error::InvalidSettings(
                "dataset.mass_ratio must be in (0, 1]".into(),
            ));
        }
        if !(d.planet_spacing.is_finite() && d.planet_spacing > 0.0)
            || !(d.moon_spacing.is_finite() && d.moon_spacing > 0.0)
        {
            return Err(Error::InvalidSettings(
                "dataset spacings must be finite and > 0".into(),
            ));
        }
        if !(self.zoom_sensitivity > 0.0 && self.zoom_sensitivity < 1.0) {
            return Err(Error::InvalidSettings(
                "zoom_sensitivity must be in (0, 1)".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
