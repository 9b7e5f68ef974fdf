//! Simulation state and tunable parameters
//!
//! Everything the engine owns lives here: parameters, the phase counter, the
//! last cut, the borders, the seeded RNG and both segment layers.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clip::Borders;
use super::geometry::Point;
use super::layer::{Layer, LineCounts};
use crate::consts::*;
use crate::settings::Settings;

/// Which way a parameter adjustment goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Decrease,
    Increase,
}

/// Parameters that can be changed while the simulation runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Drift distance per step for each layer
    pub speed: f32,
    /// Steps between regenerations, minus one
    pub period: u32,
    /// Cut through the origin instead of a random center
    pub center_pinned: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            period: DEFAULT_PERIOD,
            center_pinned: false,
        }
    }
}

/// Diagnostic summary of the current parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub speed: f32,
    pub period: u32,
    pub center_pinned: bool,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "spd[{:.6}] period[{}] center[{}]",
            self.speed, self.period, self.center_pinned as u8
        )
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub params: Params,
    /// Phase counter, cycles 0..=period; a regeneration fires on 0
    pub phase: u32,
    /// Number of regenerations so far
    pub regenerations: u64,
    /// Angle of the last cut, in [0, π)
    pub theta: f32,
    /// Center of the last cut
    pub center: Point,
    /// Per-step translation of the near layer (far layer gets the negation)
    pub drift: Vec2,
    /// Read-only clipping borders
    pub borders: Borders,
    pub near: Layer,
    pub far: Layer,
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Create an empty simulation; the first step regenerates
    pub fn new(half_extent: Vec2, params: Params, seed: u64) -> Self {
        Self {
            seed,
            params,
            // One past the period, so the first increment wraps to 0
            phase: params.period,
            regenerations: 0,
            theta: 0.0,
            center: Vec2::ZERO,
            drift: Vec2::ZERO,
            borders: Borders::new(half_extent),
            near: Layer::new(),
            far: Layer::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create from loaded settings, picking a fresh seed if none is set
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::new(settings.half_extent(), settings.params(), seed)
    }

    pub fn half_extent(&self) -> Vec2 {
        self.borders.half_extent()
    }

    /// Advance by one fixed step
    pub fn advance(&mut self) {
        super::tick::tick(self);
    }

    /// Move the phase counter on, returning true when it wraps to 0
    pub(crate) fn advance_phase(&mut self) -> bool {
        if self.phase >= self.params.period {
            self.phase = 0;
        } else {
            self.phase += 1;
        }
        self.phase == 0
    }

    /// Change the regeneration period by a fixed step, never below the floor
    pub fn adjust_period(&mut self, direction: Direction) {
        self.params.period = match direction {
            Direction::Decrease => self.params.period.saturating_sub(PERIOD_STEP),
            Direction::Increase => self.params.period.saturating_add(PERIOD_STEP),
        }
        .max(MIN_PERIOD);
    }

    /// Halve or double the drift speed
    ///
    /// The drift vector is only recomputed at the next regeneration.
    pub fn adjust_speed(&mut self, direction: Direction) {
        match direction {
            Direction::Decrease => self.params.speed /= 2.0,
            Direction::Increase => self.params.speed *= 2.0,
        }
    }

    pub fn toggle_center_pin(&mut self) {
        self.params.center_pinned = !self.params.center_pinned;
    }

    /// Current parameters, also written to the log
    pub fn report(&self) -> Report {
        let report = Report {
            speed: self.params.speed,
            period: self.params.period,
            center_pinned: self.params.center_pinned,
        };
        log::info!("{}", report);
        report
    }

    /// Lengths of both layers, also written to the log
    pub fn count_lines(&self) -> LineCounts {
        let counts = self.line_counts();
        log::info!("{}", counts);
        counts
    }

    pub fn line_counts(&self) -> LineCounts {
        LineCounts {
            near: self.near.len(),
            far: self.far.len(),
        }
    }

    pub fn near(&self) -> &Layer {
        &self.near
    }

    pub fn far(&self) -> &Layer {
        &self.far
    }

    /// Every drawable segment, near layer first
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.near.endpoints().chain(self.far.endpoints())
    }

    /// Serializable copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            regenerations: self.regenerations,
            phase: self.phase,
            params: self.params,
            theta: self.theta,
            center: self.center,
            drift: self.drift,
            near: self.near.clone(),
            far: self.far.clone(),
        }
    }
}

/// Point-in-time dump of the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub regenerations: u64,
    pub phase: u32,
    pub params: Params,
    pub theta: f32,
    pub center: Point,
    pub drift: Vec2,
    pub near: Layer,
    pub far: Layer,
}
