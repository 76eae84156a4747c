#![warn(missing_docs)]

//! Math types for the sketchlift stroke-to-solid pipeline.
//!
//! Thin wrappers around nalgebra providing the 2D and 3D point/vector
//! types used across the pipeline, axis-aligned bounding boxes, and
//! tolerance constants for geometric comparisons.

use nalgebra::{Vector2, Vector3};

/// A point in 2D space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in model units.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-6 linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        angular: 1e-9,
    };

    /// Check if two 2D points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Axis-aligned bounding box in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl BoundingBox2 {
    /// Bounding box of a single point.
    pub fn from_point(p: Point2) -> Self {
        Self { min: p, max: p }
    }

    /// Bounding box of an iterator of points, or `None` if it is empty.
    pub fn from_points<I: IntoIterator<Item = Point2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self::from_point(first);
        for p in iter {
            bbox.expand(p);
        }
        Some(bbox)
    }

    /// Grow the box to contain `p`.
    pub fn expand(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Union of two boxes.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        out.expand(other.min);
        out.expand(other.max);
        out
    }

    /// Center of the box: min plus half the extent, per axis.
    pub fn center(&self) -> Point2 {
        Point2::new(
            self.min.x + (self.max.x - self.min.x) / 2.0,
            self.min.y + (self.max.y - self.min.y) / 2.0,
        )
    }

    /// Width and height of the box.
    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl BoundingBox3 {
    /// Bounding box of a single point.
    pub fn from_point(p: Point3) -> Self {
        Self { min: p, max: p }
    }

    /// Bounding box of an iterator of points, or `None` if it is empty.
    pub fn from_points<I: IntoIterator<Item = Point3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self::from_point(first);
        for p in iter {
            bbox.expand(p);
        }
        Some(bbox)
    }

    /// Grow the box to contain `p`.
    pub fn expand(&mut self, p: Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Union of two boxes.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        out.expand(other.min);
        out.expand(other.max);
        out
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        Point3::new(
            self.min.x + (self.max.x - self.min.x) / 2.0,
            self.min.y + (self.max.y - self.min.y) / 2.0,
            self.min.z + (self.max.z - self.min.z) / 2.0,
        )
    }

    /// Diagonal vector of the box (used for camera framing distance).
    pub fn diagonal(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox2_from_points() {
        let pts = [
            Point2::new(100.0, 100.0),
            Point2::new(200.0, 100.0),
            Point2::new(200.0, 200.0),
            Point2::new(100.0, 200.0),
        ];
        let bbox = BoundingBox2::from_points(pts).unwrap();
        assert!((bbox.min - Point2::new(100.0, 100.0)).norm() < 1e-12);
        assert!((bbox.max - Point2::new(200.0, 200.0)).norm() < 1e-12);
        assert!((bbox.center() - Point2::new(150.0, 150.0)).norm() < 1e-12);
        assert!((bbox.extent() - Vec2::new(100.0, 100.0)).norm() < 1e-12);
    }

    #[test]
    fn test_bbox2_empty() {
        assert!(BoundingBox2::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_bbox2_union() {
        let a = BoundingBox2::from_point(Point2::new(0.0, 0.0));
        let b = BoundingBox2::from_point(Point2::new(3.0, -2.0));
        let u = a.union(&b);
        assert!((u.min - Point2::new(0.0, -2.0)).norm() < 1e-12);
        assert!((u.max - Point2::new(3.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_bbox3_center_and_diagonal() {
        let pts = [Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 0.5)];
        let bbox = BoundingBox3::from_points(pts).unwrap();
        assert!((bbox.center() - Point3::new(0.0, 0.0, 0.25)).norm() < 1e-12);
        let d = bbox.diagonal();
        assert!((d.norm() - (4.0 + 4.0 + 0.25f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + 1e-7, 2.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point2::new(1.001, 2.0);
        assert!(!tol.points_equal(&a, &c));
    }
}
