//! Line segment geometry for cuts, segments and borders
//!
//! Points are plain values (`glam::Vec2`), so a split never aliases an
//! endpoint: both halves carry their own copy of the seam point.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point in simulation space
pub type Point = Vec2;

/// A line between two endpoints
///
/// Treated as a finite segment everywhere except as the `that` operand of
/// [`Line::intersect`], where it is an infinite line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Build a line from raw coordinates
    pub const fn from_coords(ax: f32, ay: f32, bx: f32, by: f32) -> Self {
        Self::new(Vec2::new(ax, ay), Vec2::new(bx, by))
    }

    /// Line through `center` at angle `theta`, reaching `half_length` to each side
    pub fn through(center: Point, theta: f32, half_length: f32) -> Self {
        let offset = Vec2::new(theta.cos(), theta.sin()) * half_length;
        Self::new(center + offset, center - offset)
    }

    /// Shift both endpoints by the same offset
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.a += delta;
        self.b += delta;
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        (self.a + self.b) * 0.5
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }

    /// True when both endpoints coincide
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Crossing point of this segment with the infinite line through `that`
    ///
    /// Only the parameter along `self` is bounded to [0, 1]; `that` is never
    /// bounded. Returns `None` when the lines are exactly parallel or the
    /// crossing falls off this segment.
    pub fn intersect(&self, that: &Line) -> Option<Point> {
        let den = (self.a.x - self.b.x) * (that.a.y - that.b.y)
            - (self.a.y - self.b.y) * (that.a.x - that.b.x);
        if den == 0.0 {
            return None; // parallel
        }

        let t = ((self.a.x - that.a.x) * (that.a.y - that.b.y)
            - (self.a.y - that.a.y) * (that.a.x - that.b.x))
            / den;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        Some(self.a + t * (self.b - self.a))
    }

    /// Cut this line at `point`
    ///
    /// `self` becomes `(a, point)` and the returned trailing segment is
    /// `(point, b)`.
    pub fn split(&mut self, point: Point) -> Line {
        let tail = Line::new(point, self.b);
        self.b = point;
        tail
    }

    /// Split against the infinite line through `that`, if they cross
    pub fn try_split(&mut self, that: &Line) -> Option<Line> {
        self.intersect(that).map(|point| self.split(point))
    }

    /// Angle (atan2 range) from `origin` to this line's midpoint
    pub fn bearing_from(&self, origin: Point) -> f32 {
        let to_mid = self.midpoint() - origin;
        to_mid.y.atan2(to_mid.x)
    }
}
