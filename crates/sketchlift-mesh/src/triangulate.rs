//! Ear-clipping triangulation of simple polygons.

use sketchlift_math::Point2;

/// Signed area of a 2D polygon (positive for counter-clockwise).
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    area / 2.0
}

/// Check if a point is inside a triangle using barycentric coordinates.
pub fn point_in_triangle(p: Point2, a: Point2, b: Point2, c: Point2) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < 1e-18 {
        return false;
    }
    let inv_denom = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    // Small epsilon to avoid boundary issues
    let eps = 1e-10;
    u > eps && v > eps && (u + v) < 1.0 - eps
}

/// Triangulate a simple polygon by ear clipping.
///
/// Works for either winding order; output triangles index into `points`
/// and follow the input winding. Degenerate remainders (collinear runs,
/// self-intersections that leave no clippable ear) are abandoned rather
/// than looping forever, so the result may cover less than the full
/// polygon for malformed input. Fewer than 3 points yield no triangles.
pub fn ear_clip(points: &[Point2]) -> Vec<[usize; 3]> {
    let n = points.len();
    let mut triangles = Vec::new();
    if n < 3 {
        return triangles;
    }

    let ccw = signed_area(points) >= 0.0;
    let mut remaining: Vec<usize> = (0..n).collect();

    while remaining.len() > 3 {
        let m = remaining.len();
        let mut found_ear = false;

        for i in 0..m {
            let prev = (i + m - 1) % m;
            let next = (i + 1) % m;

            let a = points[remaining[prev]];
            let b = points[remaining[i]];
            let c = points[remaining[next]];

            let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
            let is_convex = if ccw { cross > 0.0 } else { cross < 0.0 };
            if !is_convex {
                continue;
            }

            let mut is_ear = true;
            for j in 0..m {
                if j == prev || j == i || j == next {
                    continue;
                }
                if point_in_triangle(points[remaining[j]], a, b, c) {
                    is_ear = false;
                    break;
                }
            }

            if is_ear {
                triangles.push([remaining[prev], remaining[i], remaining[next]]);
                remaining.remove(i);
                found_ear = true;
                break;
            }
        }

        if !found_ear {
            // No clippable ear left - degenerate input
            break;
        }
    }

    if remaining.len() == 3 {
        triangles.push([remaining[0], remaining[1], remaining[2]]);
    }

    triangles
}
