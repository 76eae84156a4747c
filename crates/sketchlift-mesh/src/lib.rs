#![warn(missing_docs)]

//! Triangle mesh building blocks for sketchlift.
//!
//! Provides the renderable [`TriangleMesh`] type (flat `f32` vertex and
//! normal arrays plus `u32` indices), ear-clipping triangulation of simple
//! polygons, and miter offsetting of closed polygons for bevel rings.

mod mesh;
mod offset;
mod triangulate;

pub use mesh::TriangleMesh;
pub use offset::offset_polygon;
pub use triangulate::{ear_clip, point_in_triangle, signed_area};
