//! Fixed timestep simulation tick
//!
//! Each tick moves the phase counter on, regenerates the segment population
//! when the phase wraps to zero, and then drifts both layers apart.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use rand::Rng;

use super::geometry::{Line, Point};
use super::layer::Layer;
use super::state::SimState;
use crate::consts::CUT_REACH;
use crate::{polar_to_cartesian, wrap_angle_positive};

/// Which layer a segment is assigned to after a regeneration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Near,
    Far,
}

/// What a single regeneration did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegenStats {
    pub theta: f32,
    pub center: Point,
    /// Lines carried in from the previous layers
    pub carried: usize,
    /// Lines the new cut split in two
    pub splits: usize,
    /// Lines the clipper rejected
    pub dropped: usize,
    pub near: usize,
    pub far: usize,
}

/// Advance the simulation by one fixed step
///
/// Returns the regeneration summary when this step started a new cycle.
pub fn tick(state: &mut SimState) -> Option<RegenStats> {
    let stats = if state.advance_phase() {
        Some(regenerate(state))
    } else {
        None
    };

    state.near.translate(state.drift);
    state.far.translate(-state.drift);

    stats
}

/// Cut the whole population with a new random line and reclassify it
pub fn regenerate(state: &mut SimState) -> RegenStats {
    let half = state.half_extent();
    let theta = state.rng.random_range(0.0..PI);
    let center = if state.params.center_pinned {
        Vec2::ZERO
    } else {
        random_center(&mut state.rng, half)
    };
    let cut = Line::through(center, theta, CUT_REACH * (half.x + half.y));

    state.theta = theta;
    state.center = center;
    state.drift = polar_to_cartesian(state.params.speed, theta + FRAC_PI_2);

    // Layer distinction is dropped until reclassification
    let mut carried = state.near.take_lines();
    carried.append(&mut state.far.take_lines());
    let carried_len = carried.len();

    let mut working = split_by_cut(carried, &cut);
    let splits = working.len() - carried_len;

    let borders = &state.borders;
    working.retain_mut(|line| borders.line_still_visible(line));
    let dropped = carried_len + splits - working.len();

    let mut near = Layer::seeded(cut);
    let mut far = Layer::seeded(cut);
    for line in working {
        match classify(&line, center, theta) {
            Depth::Near => near.push(line),
            Depth::Far => far.push(line),
        }
    }
    state.near = near;
    state.far = far;
    state.regenerations += 1;

    let stats = RegenStats {
        theta,
        center,
        carried: carried_len,
        splits,
        dropped,
        near: state.near.len(),
        far: state.far.len(),
    };
    log::debug!(
        "Regeneration {}: theta={:.4} center=({:.2}, {:.2}) carried={} splits={} dropped={} near={} far={}",
        state.regenerations,
        theta,
        center.x,
        center.y,
        stats.carried,
        stats.splits,
        stats.dropped,
        stats.near,
        stats.far
    );
    stats
}

/// Near iff the midpoint bearing lies within π counter-clockwise of the cut
pub fn classify(line: &Line, center: Point, theta: f32) -> Depth {
    let relative = wrap_angle_positive(line.bearing_from(center)) - theta;
    if (0.0..PI).contains(&relative) {
        Depth::Near
    } else {
        Depth::Far
    }
}

/// Split every line against `cut`, keeping each tail right after its parent
///
/// Each line is cut at most once; tails are not tested again.
pub(crate) fn split_by_cut(carried: Vec<Line>, cut: &Line) -> Vec<Line> {
    let mut working = Vec::with_capacity(carried.len() * 2);
    for mut line in carried {
        let tail = line.try_split(cut);
        working.push(line);
        if let Some(tail) = tail {
            working.push(tail);
        }
    }
    working
}

fn random_center<R: Rng>(rng: &mut R, half: Vec2) -> Point {
    let x = if half.x > 0.0 {
        rng.random_range(-half.x..half.x)
    } else {
        0.0
    };
    let y = if half.y > 0.0 {
        rng.random_range(-half.y..half.y)
    } else {
        0.0
    };
    Vec2::new(x, y)
}
