//! The conversion pipeline: drawing in, model out.

use sketchlift_extrude::{extrude_path, ExtrudeError, ExtrudeSettings};
use sketchlift_ink::Drawing;
use sketchlift_math::Point2;
use sketchlift_mesh::TriangleMesh;
use sketchlift_shape::{build_base_path, PlanarPath};

use crate::model::{Material, Model, SolidPart, OUTLINE_LIFT};
use crate::outline::build_outlines;
use crate::ConvertError;

/// The narrow "planar path to solid" seam.
///
/// The conversion pipeline only needs this one capability from its
/// geometry backend, so normalization and orchestration can be tested
/// against a fake without a real extruder.
pub trait SolidBackend {
    /// Extrude a closed planar path into a triangle mesh.
    fn extrude(
        &self,
        path: &PlanarPath,
        settings: &ExtrudeSettings,
    ) -> Result<TriangleMesh, ExtrudeError>;
}

/// Default backend: the sketchlift-extrude sweep.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshBackend;

impl SolidBackend for MeshBackend {
    fn extrude(
        &self,
        path: &PlanarPath,
        settings: &ExtrudeSettings,
    ) -> Result<TriangleMesh, ExtrudeError> {
        extrude_path(path, settings)
    }
}

/// Convert a drawing into a renderable model.
///
/// Runs synchronously to completion: normalizes the first stroke into the
/// base polygon, extrudes it through `backend`, and builds one outline per
/// drawable stroke at `depth + 0.01`. The solid is skipped (not an error)
/// when the base path has fewer than three vertices; outlines are built
/// regardless.
///
/// Pure with respect to its inputs - no partial output is ever observable.
///
/// # Errors
///
/// * [`ConvertError::NoStrokeData`] - the drawing has no strokes
/// * [`ConvertError::Geometry`] - the extrusion failed; the caller's
///   previously displayed model must stay unchanged
pub fn convert_drawing(
    drawing: &Drawing,
    backend: &dyn SolidBackend,
    settings: &ExtrudeSettings,
) -> Result<Model, ConvertError> {
    let path = build_base_path(drawing)?;

    let solid = if path.is_solid_candidate() {
        Some(SolidPart {
            mesh: backend.extrude(&path, settings)?,
            material: Material::SOLID,
        })
    } else {
        None
    };

    let center = drawing
        .bounding_box()
        .map(|bbox| bbox.center())
        .unwrap_or_else(Point2::origin);
    let outlines = build_outlines(drawing, center, settings.depth + OUTLINE_LIFT);

    Ok(Model { solid, outlines })
}
