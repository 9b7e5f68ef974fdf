//! Endless Splits - an endless kaleidoscope of splitting line segments
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, clipping, layers, regeneration)
//! - `timestep`: Fixed timestep accumulator driving the simulation
//! - `input`: Key bindings mapped to simulation commands
//! - `renderer`: Line-list vertex export for drawing
//! - `settings`: JSON configuration

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timestep;

pub use settings::Settings;
pub use sim::{SimState, tick};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Default half extent of the viewport along x
    pub const DEFAULT_HALF_EXTENT_X: f32 = 10.0;
    /// Default half extent of the viewport along y
    pub const DEFAULT_HALF_EXTENT_Y: f32 = 10.0;

    /// Fixed simulation timestep in milliseconds
    pub const MS_PER_UPDATE: u32 = 16;

    /// Steps between regenerations, minus one
    pub const DEFAULT_PERIOD: u32 = 10;
    /// Period change per adjustment
    pub const PERIOD_STEP: u32 = 5;
    /// Smallest allowed period
    pub const MIN_PERIOD: u32 = 5;

    /// Drift distance per step
    pub const DEFAULT_SPEED: f32 = 0.02;

    /// Cut half-length as a multiple of (half_x + half_y)
    pub const CUT_REACH: f32 = 2.0;
}

/// Wrap an atan2 angle into [0, 2π)
#[inline]
pub fn wrap_angle_positive(angle: f32) -> f32 {
    if angle < 0.0 {
        angle + std::f32::consts::TAU
    } else {
        angle
    }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_wrap_angle_positive() {
        assert_eq!(wrap_angle_positive(0.0), 0.0);
        assert!((wrap_angle_positive(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-6);
        assert_eq!(wrap_angle_positive(PI), PI);
        assert!(wrap_angle_positive(-PI) < TAU);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let v = polar_to_cartesian(2.0, FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 2.0).abs() < 1e-6);
    }
}
