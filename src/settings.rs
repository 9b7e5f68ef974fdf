//! Simulation settings
//!
//! Loaded from an optional JSON file; anything missing or invalid falls back
//! to the defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Params;

/// Startup configuration for the simulation and its driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    /// Half extent of the visible area along x
    pub half_extent_x: f32,
    /// Half extent of the visible area along y
    pub half_extent_y: f32,

    // === Simulation ===
    /// Steps between regenerations, minus one
    pub period: u32,
    /// Drift distance per step
    pub speed: f32,
    /// Cut through the origin instead of a random center
    pub center_pinned: bool,
    /// RNG seed; a random one is chosen when unset
    pub seed: Option<u64>,

    // === Timing ===
    /// Fixed timestep in milliseconds
    pub ms_per_update: u32,
    /// Cap on steps per frame (unlimited when unset)
    pub max_substeps: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            half_extent_x: DEFAULT_HALF_EXTENT_X,
            half_extent_y: DEFAULT_HALF_EXTENT_Y,

            period: DEFAULT_PERIOD,
            speed: DEFAULT_SPEED,
            center_pinned: false,
            seed: None,

            ms_per_update: MS_PER_UPDATE,
            max_substeps: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, without sanitizing
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file
    ///
    /// Read or parse failures are logged and yield the defaults.
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {} - using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings to a JSON file, logging any failure
    pub fn save(&self, path: &Path) {
        match self.to_json() {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not save settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }

    /// Replace out-of-range values with usable ones
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.half_extent_x.is_finite() && self.half_extent_x > 0.0) {
            log::warn!(
                "half_extent_x {} is invalid, using {}",
                self.half_extent_x,
                defaults.half_extent_x
            );
            self.half_extent_x = defaults.half_extent_x;
        }
        if !(self.half_extent_y.is_finite() && self.half_extent_y > 0.0) {
            log::warn!(
                "half_extent_y {} is invalid, using {}",
                self.half_extent_y,
                defaults.half_extent_y
            );
            self.half_extent_y = defaults.half_extent_y;
        }
        if self.period < MIN_PERIOD {
            log::warn!("period {} is below the minimum, using {}", self.period, MIN_PERIOD);
            self.period = MIN_PERIOD;
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            log::warn!("speed {} is invalid, using {}", self.speed, defaults.speed);
            self.speed = defaults.speed;
        }
        if self.ms_per_update == 0 {
            log::warn!("ms_per_update must be positive, using {}", defaults.ms_per_update);
            self.ms_per_update = defaults.ms_per_update;
        }
        if self.max_substeps == Some(0) {
            self.max_substeps = None;
        }

        self
    }

    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.half_extent_x, self.half_extent_y)
    }

    /// Initial runtime parameters
    pub fn params(&self) -> Params {
        Params {
            speed: self.speed,
            period: self.period,
            center_pinned: self.center_pinned,
        }
    }
}
