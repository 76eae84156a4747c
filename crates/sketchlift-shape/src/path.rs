//! Closed planar polygon type.

use sketchlift_math::{BoundingBox2, Point2};

/// A closed planar polygon in model space.
///
/// The closure is part of the representation: only the distinct vertices
/// are stored, and [`PlanarPath::segments`] always yields a final edge from
/// the last vertex back to the first. A path built from an already-closed
/// stroke therefore never carries a duplicated vertex, and a path built
/// from an open stroke is closed regardless.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarPath {
    points: Vec<Point2>,
}

impl PlanarPath {
    /// Create a path from vertices in order. The closing edge is implied.
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// The vertices, in order, without the implied closing repeat.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of distinct vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the path has enough vertices to bound an area.
    pub fn is_solid_candidate(&self) -> bool {
        self.points.len() >= 3
    }

    /// Every edge of the closed path, including the forced closing edge
    /// from the last vertex back to the first.
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        let count = if n >= 2 { n } else { 0 };
        (0..count).map(move |i| {
            let j = (i + 1) % n;
            (self.points[i], self.points[j])
        })
    }

    /// Signed area of the closed polygon (positive for counter-clockwise).
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.points[i].x * self.points[j].y;
            area -= self.points[j].x * self.points[i].y;
        }
        area / 2.0
    }

    /// Bounding box of the vertices, or `None` for an empty path.
    pub fn bounding_box(&self) -> Option<BoundingBox2> {
        BoundingBox2::from_points(self.points.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> PlanarPath {
        PlanarPath::new(vec![
            Point2::new(-0.5, 0.5),
            Point2::new(0.5, 0.5),
            Point2::new(0.5, -0.5),
            Point2::new(-0.5, -0.5),
        ])
    }

    #[test]
    fn test_segments_include_closing_edge() {
        let path = unit_square();
        let segs: Vec<_> = path.segments().collect();
        assert_eq!(segs.len(), 4);
        let (last_start, last_end) = segs[3];
        assert!((last_start - Point2::new(-0.5, -0.5)).norm() < 1e-12);
        assert!((last_end - Point2::new(-0.5, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_two_point_path_closes_both_ways() {
        let path = PlanarPath::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        let segs: Vec<_> = path.segments().collect();
        assert_eq!(segs.len(), 2);
        assert!((segs[1].1 - segs[0].0).norm() < 1e-12);
    }

    #[test]
    fn test_signed_area_winding() {
        // unit_square winds clockwise in model space (top edge first)
        let path = unit_square();
        assert!((path.signed_area() - (-1.0)).abs() < 1e-12);
        let mut rev: Vec<_> = path.points().to_vec();
        rev.reverse();
        assert!((PlanarPath::new(rev).signed_area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_degenerate() {
        let empty = PlanarPath::new(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.segments().count(), 0);
        assert!(empty.bounding_box().is_none());

        let single = PlanarPath::new(vec![Point2::new(1.0, 1.0)]);
        assert!(!single.is_solid_candidate());
        assert_eq!(single.segments().count(), 0);
    }
}
