//! Visibility clipping against an oversized viewport rectangle
//!
//! The borders sit outside the nominal viewport because drifting segments can
//! be pushed back into view; clipping too tightly would cut off ends that are
//! about to reappear.

use glam::Vec2;

use super::geometry::Line;

/// Border distance from center, as a multiple of the half extent
pub const BORDER_OFFSET: f32 = 1.5;
/// How far each border line reaches along its edge, as a multiple of the half extent
pub const BORDER_REACH: f32 = 10.0;
/// Safety buffer applied to the half extents by the visibility test
pub const SAFETY_BUFFER: f32 = 1.6;

/// Which edge of the viewport a border guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// A fixed clipping line outside one edge of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub side: Side,
    pub line: Line,
}

impl Border {
    /// Whether the trailing piece of a split should replace the line
    ///
    /// Decided by the tail's far endpoint against the nominal edge, not the
    /// border itself.
    fn keeps_tail(&self, tail: &Line, half_extent: Vec2) -> bool {
        match self.side {
            Side::Top => tail.b.y < half_extent.y,
            Side::Bottom => tail.b.y > -half_extent.y,
            Side::Left => tail.b.x > -half_extent.x,
            Side::Right => tail.b.x < half_extent.x,
        }
    }
}

/// The four read-only borders around the viewport
#[derive(Debug, Clone)]
pub struct Borders {
    half_extent: Vec2,
    borders: [Border; 4],
}

impl Borders {
    pub fn new(half_extent: Vec2) -> Self {
        let Vec2 { x: hx, y: hy } = half_extent;
        let (off_x, off_y) = (BORDER_OFFSET * hx, BORDER_OFFSET * hy);
        let (reach_x, reach_y) = (BORDER_REACH * hx, BORDER_REACH * hy);

        let borders = [
            Border {
                side: Side::Top,
                line: Line::from_coords(-reach_x, off_y, reach_x, off_y),
            },
            Border {
                side: Side::Bottom,
                line: Line::from_coords(-reach_x, -off_y, reach_x, -off_y),
            },
            Border {
                side: Side::Left,
                line: Line::from_coords(-off_x, -reach_y, -off_x, reach_y),
            },
            Border {
                side: Side::Right,
                line: Line::from_coords(off_x, -reach_y, off_x, reach_y),
            },
        ];

        Self {
            half_extent,
            borders,
        }
    }

    pub fn half_extent(&self) -> Vec2 {
        self.half_extent
    }

    pub fn iter(&self) -> impl Iterator<Item = &Border> {
        self.borders.iter()
    }

    pub fn get(&self, side: Side) -> &Border {
        match side {
            Side::Top => &self.borders[0],
            Side::Bottom => &self.borders[1],
            Side::Left => &self.borders[2],
            Side::Right => &self.borders[3],
        }
    }

    /// Clip `line` to the inside of `border`, returning whether it was split
    pub fn clip_to(&self, line: &mut Line, border: &Border) -> bool {
        match line.try_split(&border.line) {
            Some(tail) => {
                // `line` is now (a, s); swap in (s, b) if that side is wanted
                if border.keeps_tail(&tail, self.half_extent) {
                    *line = tail;
                }
                true
            }
            None => false,
        }
    }

    /// Clip `line` against every border and report whether it is still visible
    ///
    /// Only the first endpoint is tested after clipping. A line that is
    /// wrongly kept is pushed further out by the drift and caught on a later
    /// regeneration.
    pub fn line_still_visible(&self, line: &mut Line) -> bool {
        for border in &self.borders {
            self.clip_to(line, border);
        }
        self.in_safety_box(line.a)
    }

    /// Strict containment in the buffered viewport rectangle
    pub fn in_safety_box(&self, point: Vec2) -> bool {
        let limit = self.half_extent * SAFETY_BUFFER;
        -limit.y < point.y && point.y < limit.y && -limit.x < point.x && point.x < limit.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn borders() -> Borders {
        Borders::new(Vec2::new(10.0, 10.0))
    }

    #[test]
    fn test_border_placement() {
        let b = borders();
        assert_eq!(b.get(Side::Top).line, Line::from_coords(-100.0, 15.0, 100.0, 15.0));
        assert_eq!(b.get(Side::Bottom).line.a.y, -15.0);
        assert_eq!(b.get(Side::Left).line.a.x, -15.0);
        assert_eq!(b.get(Side::Right).line, Line::from_coords(15.0, -100.0, 15.0, 100.0));
        assert_eq!(b.iter().count(), 4);
    }

    #[test]
    fn test_line_inside_is_visible() {
        let b = borders();
        let mut line = Line::from_coords(-5.0, 5.0, 5.0, 5.0);

        let mut untouched = line;
        assert!(untouched.try_split(&b.get(Side::Top).line).is_none());

        assert!(b.line_still_visible(&mut line));
        assert_eq!(line, Line::from_coords(-5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn test_line_pushed_out_top_is_rejected() {
        let b = borders();
        let mut line = Line::from_coords(-5.0, 5.0, 5.0, 5.0);
        line.translate(Vec2::new(0.0, 20.0));
        assert!(!b.line_still_visible(&mut line));
    }

    #[test]
    fn test_clip_keeps_inner_piece_when_tail_is_inside() {
        let b = borders();
        // Starts above the top border, ends inside: the tail (s, b) is kept
        let mut line = Line::from_coords(0.0, 30.0, 0.0, 0.0);
        assert!(b.clip_to(&mut line, b.get(Side::Top)));
        assert!((line.a.y - 15.0).abs() < 1e-5);
        assert_eq!(line.b, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_clip_keeps_head_when_tail_is_outside() {
        let b = borders();
        // Starts inside, ends above the top border: (a, s) stays
        let mut line = Line::from_coords(0.0, 0.0, 0.0, 30.0);
        assert!(b.clip_to(&mut line, b.get(Side::Top)));
        assert_eq!(line.a, Vec2::new(0.0, 0.0));
        assert!((line.b.y - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_clip_bottom_keeps_inner_tail() {
        let b = borders();
        let mut line = Line::from_coords(0.0, -30.0, 0.0, 0.0);
        assert!(b.clip_to(&mut line, b.get(Side::Bottom)));
        assert!((line.a.y + 15.0).abs() < 1e-5);
        assert_eq!(line.b, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_clip_bottom_keeps_head_when_tail_is_outside() {
        let b = borders();
        let mut line = Line::from_coords(0.0, 0.0, 0.0, -30.0);
        assert!(b.clip_to(&mut line, b.get(Side::Bottom)));
        assert_eq!(line.a, Vec2::new(0.0, 0.0));
        assert!((line.b.y + 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_clip_left_keeps_inner_tail() {
        let b = borders();
        let mut line = Line::from_coords(-30.0, 0.0, 0.0, 0.0);
        assert!(b.clip_to(&mut line, b.get(Side::Left)));
        assert!((line.a.x + 15.0).abs() < 1e-5);
        assert_eq!(line.b, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_clip_left_keeps_head_when_tail_is_outside() {
        let b = borders();
        let mut line = Line::from_coords(0.0, 0.0, -30.0, 0.0);
        assert!(b.clip_to(&mut line, b.get(Side::Left)));
        assert_eq!(line.a, Vec2::new(0.0, 0.0));
        assert!((line.b.x + 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_long_line_clipped_on_both_sides() {
        let b = borders();
        let mut line = Line::from_coords(-40.0, 0.0, 40.0, 0.0);
        assert!(b.line_still_visible(&mut line));
        assert!((line.a.x + 15.0).abs() < 1e-4);
        assert!((line.b.x - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_clip_leaves_first_endpoint_outside() {
        let b = borders();
        // Crosses the right border with its tail reaching past the nominal
        // edge, so the head (a, s) is kept and a is far out of view.
        let mut line = Line::from_coords(20.0, 0.0, 12.0, 0.0);
        assert!(!b.line_still_visible(&mut line));
    }

    #[test]
    fn test_safety_box_is_strict() {
        let b = borders();
        assert!(b.in_safety_box(Vec2::new(15.9, -15.9)));
        assert!(!b.in_safety_box(Vec2::new(16.0, 0.0)));
        assert!(!b.in_safety_box(Vec2::new(0.0, -16.0)));
    }
}
