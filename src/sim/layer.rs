//! Segment layers
//!
//! Each layer is an append-only, owned sequence of lines that drifts as a
//! unit. Reading a layer never consumes it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Line, Point};

/// One drifting layer of segments, in append order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    lines: Vec<Line>,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A layer whose first line is `head`
    pub fn seeded(head: Line) -> Self {
        Self { lines: vec![head] }
    }

    #[inline]
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn head(&self) -> Option<&Line> {
        self.lines.first()
    }

    pub fn tail(&self) -> Option<&Line> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    pub fn as_slice(&self) -> &[Line] {
        &self.lines
    }

    /// Translate every line by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        for line in &mut self.lines {
            line.translate(delta);
        }
    }

    /// Endpoint pairs in append order
    pub fn endpoints(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.lines.iter().map(|line| (line.a, line.b))
    }

    /// Move every line out, leaving the layer empty
    pub fn take_lines(&mut self) -> Vec<Line> {
        std::mem::take(&mut self.lines)
    }
}

impl<'a> IntoIterator for &'a Layer {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Line counts across both layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub near: usize,
    pub far: usize,
}

impl LineCounts {
    pub fn total(&self) -> usize {
        self.near + self.far
    }
}

impl std::fmt::Display for LineCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "count[{}]+[{}]=[{}]", self.near, self.far, self.total())
    }
}
