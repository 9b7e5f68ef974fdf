//! Drawing export
//!
//! The simulation only produces geometry; a GPU harness uploads the vertex
//! list built here and draws it as a line list.

pub mod vertex;

pub use vertex::{LineStyle, Vertex, line_list};
