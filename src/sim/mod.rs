//! Deterministic simulation module
//!
//! All segment logic lives here. This module must stay pure and deterministic:
//! - One fixed step per call, no wall-clock time
//! - Seeded RNG only
//! - Stable layer order (append order)
//! - No rendering or platform dependencies

pub mod clip;
pub mod geometry;
pub mod layer;
pub mod state;
pub mod tick;

pub use clip::{Border, Borders, SAFETY_BUFFER, Side};
pub use geometry::{Line, Point};
pub use layer::{Layer, LineCounts};
pub use state::{Direction, Params, Report, SimState, Snapshot};
pub use tick::{Depth, RegenStats, classify, regenerate, tick};
