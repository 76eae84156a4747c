//! Outline accent generation.

use sketchlift_ink::Drawing;
use sketchlift_math::{Point2, Point3};
use sketchlift_shape::normalize_stroke;

use crate::model::{Polyline3, OUTLINE_COLOR, OUTLINE_WIDTH};

/// Build one outline polyline per drawable stroke, lifted to height `z`.
///
/// Every stroke uses the same `center` (the drawing's global bounding-box
/// center) so outlines and the solid share one coordinate frame. Strokes
/// with fewer than two points cannot form a line and are skipped. This
/// step is purely additive and never fails.
pub fn build_outlines(drawing: &Drawing, center: Point2, z: f64) -> Vec<Polyline3> {
    drawing
        .strokes
        .iter()
        .filter(|stroke| stroke.is_drawable())
        .map(|stroke| Polyline3 {
            points: normalize_stroke(stroke, center)
                .into_iter()
                .map(|p| Point3::new(p.x, p.y, z))
                .collect(),
            color: OUTLINE_COLOR,
            width: OUTLINE_WIDTH,
        })
        .collect()
}
