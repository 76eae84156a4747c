#![warn(missing_docs)]

//! Stroke-to-solid conversion facade for sketchlift.
//!
//! Takes a captured [`Drawing`](sketchlift_ink::Drawing), normalizes its
//! first stroke into a closed planar polygon, extrudes it into a beveled
//! solid, adds one outline polyline per stroke, and hands the resulting
//! [`Model`] to a viewer. The [`Session`] type owns the mutable view state
//! (current drawing, current model, in-flight guard).
//!
//! # Example
//!
//! ```
//! use sketchlift::Session;
//! use sketchlift_ink::{Drawing, Stroke};
//!
//! let mut drawing = Drawing::new();
//! drawing.push_stroke(Stroke::from_coords(
//!     "#000000", 5.0,
//!     &[(100.0, 100.0), (200.0, 100.0), (200.0, 200.0), (100.0, 200.0)],
//! ));
//!
//! let mut session = Session::new();
//! session.set_drawing(drawing);
//! let model = session.request_convert().unwrap();
//! assert!(model.solid.is_some());
//! assert_eq!(model.outlines.len(), 1);
//! ```

pub use sketchlift_extrude;
pub use sketchlift_ink;
pub use sketchlift_math;
pub use sketchlift_mesh;
pub use sketchlift_shape;

mod convert;
mod model;
mod outline;
mod session;

pub use convert::{convert_drawing, MeshBackend, SolidBackend};
pub use model::{
    fit_camera, CameraPose, Material, Model, Polyline3, SolidPart, OUTLINE_COLOR, OUTLINE_LIFT,
    OUTLINE_WIDTH,
};
pub use outline::build_outlines;
pub use session::{HeadlessViewer, Session, Viewer};

use sketchlift_extrude::ExtrudeError;
use sketchlift_shape::ShapeError;
use thiserror::Error;

/// Errors from the conversion pipeline.
#[derive(Debug, Clone, Error)]
pub enum ConvertError {
    /// Conversion was requested with no captured strokes.
    #[error("no stroke data")]
    NoStrokeData,

    /// Triangulation or extrusion failed; no partial model is committed.
    #[error("geometry generation failed: {0}")]
    Geometry(#[from] ExtrudeError),

    /// A prior conversion is still active; the request is a no-op.
    #[error("a conversion is already in flight")]
    ConversionInFlight,

    /// The image-based reconstruction path is not implemented.
    #[error("image-based reconstruction is not implemented")]
    ReconstructionUnimplemented,
}

impl From<ShapeError> for ConvertError {
    fn from(err: ShapeError) -> Self {
        match err {
            ShapeError::NoStrokeData => ConvertError::NoStrokeData,
        }
    }
}
