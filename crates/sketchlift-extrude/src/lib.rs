#![warn(missing_docs)]

//! Beveled straight extrusion for sketchlift.
//!
//! Sweeps a closed planar polygon along the z axis into a watertight
//! triangle mesh, with quarter-circle bevel rings at both end caps.
//!
//! # Example
//!
//! ```
//! use sketchlift_math::Point2;
//! use sketchlift_shape::PlanarPath;
//! use sketchlift_extrude::{extrude_path, ExtrudeSettings};
//!
//! let path = PlanarPath::new(vec![
//!     Point2::new(-0.5, 0.5),
//!     Point2::new(0.5, 0.5),
//!     Point2::new(0.5, -0.5),
//!     Point2::new(-0.5, -0.5),
//! ]);
//! let mesh = extrude_path(&path, &ExtrudeSettings::default()).unwrap();
//! assert!(mesh.num_triangles() > 0);
//! ```

mod extrude;

pub use extrude::extrude_path;

use thiserror::Error;

/// Errors from the extrusion operation.
#[derive(Debug, Clone, Error)]
pub enum ExtrudeError {
    /// The path has too few vertices to bound an area.
    #[error("path has fewer than 3 vertices")]
    EmptyPath,

    /// The path could not be triangulated (degenerate or self-intersecting).
    #[error("path triangulation failed")]
    Triangulation,

    /// Extrusion settings are invalid.
    #[error("invalid extrusion settings: {0}")]
    InvalidSettings(String),
}

/// Parameters for the extrusion sweep.
///
/// The defaults are the fixed conversion parameters of the stroke-to-solid
/// pipeline; they are not user-tunable there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeSettings {
    /// Extrusion depth along +z, in model units.
    pub depth: f64,
    /// Number of wall layers between the end caps.
    pub steps: u32,
    /// Whether to generate bevel rings at the end caps.
    pub bevel_enabled: bool,
    /// Bevel extent along z beyond each cap.
    pub bevel_thickness: f64,
    /// Bevel extent outward in the cap plane.
    pub bevel_size: f64,
    /// Number of interpolation rings per bevel.
    pub bevel_segments: u32,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            depth: 0.5,
            steps: 1,
            bevel_enabled: true,
            bevel_thickness: 0.1,
            bevel_size: 0.1,
            bevel_segments: 3,
        }
    }
}

impl ExtrudeSettings {
    /// Total height of the solid including bevels.
    pub fn total_height(&self) -> f64 {
        if self.bevel_enabled {
            self.depth + 2.0 * self.bevel_thickness
        } else {
            self.depth
        }
    }
}
