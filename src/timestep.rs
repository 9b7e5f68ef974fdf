//! Fixed timestep accumulator
//!
//! Wall-clock time between frames is accumulated as lag and paid out in whole
//! simulation steps, so drift speed does not depend on the frame rate.

use crate::consts::MS_PER_UPDATE;
use crate::settings::Settings;

/// Accumulates frame time and hands out fixed steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimestep {
    step_ms: u32,
    lag_ms: u64,
    max_substeps: Option<u32>,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(MS_PER_UPDATE, None)
    }
}

impl FixedTimestep {
    /// `step_ms` must be positive; zero is treated as one millisecond
    pub fn new(step_ms: u32, max_substeps: Option<u32>) -> Self {
        Self {
            step_ms: step_ms.max(1),
            lag_ms: 0,
            max_substeps,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.ms_per_update, settings.max_substeps)
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    /// Time accumulated but not yet paid out as steps
    pub fn lag_ms(&self) -> u64 {
        self.lag_ms
    }

    /// Add `elapsed_ms` of lag and run `step` once per whole timestep
    ///
    /// While paused the lag is still consumed but `step` is not called, so
    /// unpausing does not replay the paused time. Returns the number of steps
    /// actually run.
    pub fn update<F: FnMut()>(&mut self, elapsed_ms: u32, paused: bool, mut step: F) -> u32 {
        self.lag_ms += u64::from(elapsed_ms);
        let step_ms = u64::from(self.step_ms);

        let mut substeps = 0;
        let mut ran = 0;
        while self.lag_ms >= step_ms {
            if self.max_substeps.is_some_and(|max| substeps >= max) {
                break;
            }
            if !paused {
                step();
                ran += 1;
            }
            self.lag_ms -= step_ms;
            substeps += 1;
        }
        ran
    }
}
