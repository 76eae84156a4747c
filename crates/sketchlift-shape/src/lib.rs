#![warn(missing_docs)]

//! Shape building for sketchlift: turn captured strokes into a closed
//! planar polygon in model space.
//!
//! The normalization contract: stroke points are translated so the
//! drawing's global bounding-box center maps to the origin, scaled by a
//! fixed divisor (100 pixels = 1 model unit), and the y axis is flipped
//! (pixel y grows downward, model y grows upward). The resulting path is
//! force-closed whether or not the pen returned to its starting point.
//!
//! # Example
//!
//! ```
//! use sketchlift_ink::{Drawing, Stroke};
//! use sketchlift_shape::build_base_path;
//!
//! let mut drawing = Drawing::new();
//! drawing.push_stroke(Stroke::from_coords(
//!     "#000000", 5.0,
//!     &[(100.0, 100.0), (200.0, 100.0), (200.0, 200.0), (100.0, 200.0)],
//! ));
//! let path = build_base_path(&drawing).unwrap();
//! assert_eq!(path.len(), 4);
//! // 100x100 px square centered at (150,150) -> unit square at origin
//! assert!((path.points()[0].x - (-0.5)).abs() < 1e-12);
//! assert!((path.points()[0].y - 0.5).abs() < 1e-12);
//! ```

mod normalize;
mod path;

pub use normalize::{build_base_path, normalize_stroke, PIXELS_PER_UNIT};
pub use path::PlanarPath;

use thiserror::Error;

/// Errors from shape building.
#[derive(Debug, Clone, Error)]
pub enum ShapeError {
    /// The drawing has no strokes to build a shape from.
    #[error("no drawing data")]
    NoStrokeData,
}
