//! Miter offsetting of closed polygons.

use sketchlift_math::{Point2, Vec2};

use crate::triangulate::signed_area;

/// Offset a closed polygon outward (positive distance) or inward
/// (negative) along the bisector at each vertex.
///
/// Works for either winding order; the output keeps the input winding.
/// The miter length is adjusted for the corner angle and clamped at sharp
/// corners to avoid spikes. Returns `None` if the input has fewer than 3
/// points or the offset polygon collapses to zero area.
pub fn offset_polygon(points: &[Point2], distance: f64) -> Option<Vec<Point2>> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    // Outward normal of an edge: rotate the edge direction -90 deg for a
    // CCW polygon, +90 deg for CW.
    let sign = if signed_area(points) >= 0.0 { -1.0 } else { 1.0 };

    let mut offset_points = Vec::with_capacity(n);
    for i in 0..n {
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;

        let p0 = points[prev];
        let p1 = points[i];
        let p2 = points[next];

        let e1 = p1 - p0;
        let e2 = p2 - p1;
        let l1 = e1.norm();
        let l2 = e2.norm();
        if l1 < 1e-12 || l2 < 1e-12 {
            // Duplicate vertex - keep it where it is
            offset_points.push(p1);
            continue;
        }
        let e1 = e1 / l1;
        let e2 = e2 / l2;

        let n1 = Vec2::new(-e1.y * sign, e1.x * sign);
        let n2 = Vec2::new(-e2.y * sign, e2.x * sign);

        let bisector_raw = n1 + n2;
        let bisector = if bisector_raw.norm() > 1e-12 {
            bisector_raw.normalize()
        } else {
            // 180 degree reversal - fall back to the edge normal
            n1
        };

        // Miter length grows with corner sharpness; clamp it.
        let dot = n1.dot(&bisector);
        let miter = if dot.abs() > 1e-3 { distance / dot } else { distance };
        let max_miter = distance.abs() * 2.0;
        let miter = miter.clamp(-max_miter, max_miter);

        offset_points.push(p1 + bisector * miter);
    }

    // A collapsed inward offset either vanishes or passes through the
    // center and flips winding.
    let area_in = signed_area(points);
    let area_out = signed_area(&offset_points);
    if area_out.abs() < 1e-10 || area_out.signum() != area_in.signum() {
        return None;
    }

    Some(offset_points)
}
