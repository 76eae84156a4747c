#![warn(missing_docs)]

//! Captured stroke data model for sketchlift.
//!
//! This crate defines the serializable types exchanged with the stroke
//! capture layer: a [`Drawing`] is an ordered list of [`Stroke`]s, each an
//! ordered list of points in pixel space with a cosmetic color and width.
//! The wire format matches the capture layer's JSON exactly — a bare array
//! of `{color, width, points: [{x, y}, ...]}` objects.
//!
//! # Example
//!
//! ```
//! use sketchlift_ink::Drawing;
//!
//! let json = r##"[{"color":"#000000","width":5,
//!                 "points":[{"x":100,"y":100},{"x":200,"y":100}]}]"##;
//! let drawing = Drawing::from_json(json).unwrap();
//! assert_eq!(drawing.strokes.len(), 1);
//! assert_eq!(drawing.point_count(), 2);
//! ```

use serde::{Deserialize, Serialize};
use sketchlift_math::{BoundingBox2, Point2};

/// A single captured point in pixel space.
///
/// Pixel-space y grows downward; the shape builder flips it when mapping
/// into model space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InkPoint {
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate (down is positive).
    pub y: f64,
}

impl InkPoint {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// View this point as a math [`Point2`].
    pub fn to_point2(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// One continuous pen/touch drag: an ordered point sequence plus the pen
/// color and width that drew it.
///
/// Color and width are cosmetic; they carry through to outline accents but
/// never influence the 3D geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// CSS-style pen color, e.g. `"#000000"`.
    pub color: String,
    /// Pen width in pixels.
    pub width: f64,
    /// Ordered points in drawing order.
    pub points: Vec<InkPoint>,
}

impl Stroke {
    /// Create a stroke from raw coordinate pairs.
    pub fn from_coords(color: &str, width: f64, coords: &[(f64, f64)]) -> Self {
        Self {
            color: color.to_string(),
            width,
            points: coords.iter().map(|&(x, y)| InkPoint::new(x, y)).collect(),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke needs at least two points to describe a line.
    ///
    /// The capture layer discards single-point strokes, but data arriving
    /// over the wire is not trusted to have done so.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// A full capture session: the ordered strokes of one drawing.
///
/// Serializes as a bare array of strokes, matching the capture layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drawing {
    /// Strokes in capture order.
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    /// Create an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a drawing from the capture layer's JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize back to the capture layer's JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Append a stroke.
    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Drop all strokes (the capture layer's "clear" action).
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Whether the drawing has no strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total number of points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|s| s.points.len()).sum()
    }

    /// Axis-aligned bounding box over all points of all strokes, in pixel
    /// space. `None` when no stroke has any points.
    pub fn bounding_box(&self) -> Option<BoundingBox2> {
        BoundingBox2::from_points(
            self.strokes
                .iter()
                .flat_map(|s| s.points.iter().map(|p| p.to_point2())),
        )
    }
}

/// A raster snapshot of the drawing canvas.
///
/// Reserved input for a future image-based reconstruction path; the
/// extrusion pipeline never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterSnapshot {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 pixel data, row-major.
    pub rgba: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_capture_json() {
        let json = r##"[
            {"color":"#000000","width":5,"points":[
                {"x":100,"y":100},{"x":200,"y":100},{"x":200,"y":200}
            ]},
            {"color":"#ff0000","width":2,"points":[{"x":10,"y":10}]}
        ]"##;
        let drawing = Drawing::from_json(json).unwrap();
        assert_eq!(drawing.strokes.len(), 2);
        assert_eq!(drawing.strokes[0].color, "#000000");
        assert_eq!(drawing.strokes[0].points[1], InkPoint::new(200.0, 100.0));
        assert!(drawing.strokes[0].is_drawable());
        assert!(!drawing.strokes[1].is_drawable());
    }

    #[test]
    fn test_json_round_trip_is_array() {
        let mut drawing = Drawing::new();
        drawing.push_stroke(Stroke::from_coords("#123456", 3.0, &[(0.0, 0.0), (1.0, 2.0)]));
        let json = drawing.to_json().unwrap();
        assert!(json.starts_with('['), "drawing must serialize as a bare array: {json}");
        let back = Drawing::from_json(&json).unwrap();
        assert_eq!(back, drawing);
    }

    #[test]
    fn test_bounding_box_spans_all_strokes() {
        let mut drawing = Drawing::new();
        drawing.push_stroke(Stroke::from_coords("#000", 5.0, &[(100.0, 100.0), (200.0, 200.0)]));
        drawing.push_stroke(Stroke::from_coords("#000", 5.0, &[(50.0, 300.0)]));
        let bbox = drawing.bounding_box().unwrap();
        assert!((bbox.min.x - 50.0).abs() < 1e-12);
        assert!((bbox.min.y - 100.0).abs() < 1e-12);
        assert!((bbox.max.x - 200.0).abs() < 1e-12);
        assert!((bbox.max.y - 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_drawing() {
        let mut drawing = Drawing::new();
        assert!(drawing.is_empty());
        assert!(drawing.bounding_box().is_none());
        drawing.push_stroke(Stroke::from_coords("#000", 1.0, &[(0.0, 0.0)]));
        assert!(!drawing.is_empty());
        drawing.clear();
        assert!(drawing.is_empty());
        assert_eq!(drawing.point_count(), 0);
    }
}
