//! Vertex types for 2D line rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::{Layer, SimState};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` within a vertex
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();
}

/// Colors for drawn elements
pub mod colors {
    pub const SEGMENT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Per-layer colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub near: [f32; 4],
    pub far: [f32; 4],
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            near: colors::SEGMENT,
            far: colors::SEGMENT,
        }
    }
}

/// Two vertices per segment, near layer first
pub fn line_list(state: &SimState, style: &LineStyle) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(2 * state.line_counts().total());
    push_layer(&mut vertices, state.near(), style.near);
    push_layer(&mut vertices, state.far(), style.far);
    vertices
}

fn push_layer(vertices: &mut Vec<Vertex>, layer: &Layer, color: [f32; 4]) {
    for (a, b) in layer.endpoints() {
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::sim::Params;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 8);
        let v = [Vertex::new(1.0, 2.0, colors::SEGMENT)];
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&v).len(), 24);
    }

    #[test]
    fn test_line_list_matches_segments() {
        let mut state = SimState::new(Vec2::new(10.0, 10.0), Params::default(), 99);
        for _ in 0..60 {
            state.advance();
        }
        let style = LineStyle {
            near: [1.0, 0.0, 0.0, 1.0],
            far: [0.0, 0.0, 1.0, 1.0],
        };
        let vertices = line_list(&state, &style);
        assert_eq!(vertices.len(), 2 * state.segments().count());

        let near_vertices = 2 * state.near().len();
        assert!(vertices[..near_vertices].iter().all(|v| v.color == style.near));
        assert!(vertices[near_vertices..].iter().all(|v| v.color == style.far));

        for (pair, (a, b)) in vertices.chunks(2).zip(state.segments()) {
            assert_eq!(pair[0].position, a.to_array());
            assert_eq!(pair[1].position, b.to_array());
        }

        // Reading does not consume the layers
        assert_eq!(line_list(&state, &style), vertices);
    }
}
