//! Stroke normalization into model space.

use sketchlift_ink::{Drawing, Stroke};
use sketchlift_math::Point2;

use crate::{PlanarPath, ShapeError};

/// Fixed normalization divisor: 100 pixels map to 1 model unit.
pub const PIXELS_PER_UNIT: f64 = 100.0;

/// Map one stroke's points into model space.
///
/// Each point `p` becomes `((p.x - center.x) / 100, -(p.y - center.y) / 100)`.
/// The y axis is negated because pixel-space y grows downward while
/// model-space y grows upward. `center` is the drawing's *global*
/// bounding-box center so that all strokes land in one coordinate frame.
pub fn normalize_stroke(stroke: &Stroke, center: Point2) -> Vec<Point2> {
    stroke
        .points
        .iter()
        .map(|p| {
            Point2::new(
                (p.x - center.x) / PIXELS_PER_UNIT,
                -(p.y - center.y) / PIXELS_PER_UNIT,
            )
        })
        .collect()
}

/// Build the closed base polygon for the solid from a drawing.
///
/// The bounding box is computed over all points of all strokes, but only
/// the first stroke contributes vertices to the base path. The returned
/// path is force-closed by representation.
///
/// # Errors
///
/// Returns [`ShapeError::NoStrokeData`] when the drawing has no strokes.
/// A first stroke with zero points yields an empty path; the caller skips
/// the solid but may still generate outlines for other strokes.
pub fn build_base_path(drawing: &Drawing) -> Result<PlanarPath, ShapeError> {
    let first = drawing.strokes.first().ok_or(ShapeError::NoStrokeData)?;

    let center = drawing
        .bounding_box()
        .map(|bbox| bbox.center())
        .unwrap_or_else(Point2::origin);

    Ok(PlanarPath::new(normalize_stroke(first, center)))
}
