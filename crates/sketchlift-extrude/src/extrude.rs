//! Extrude operation: sweep a closed planar polygon along +z.

use std::f64::consts::FRAC_PI_2;

use sketchlift_math::{Point2, Point3};
use sketchlift_mesh::{ear_clip, offset_polygon, signed_area, TriangleMesh};
use sketchlift_shape::PlanarPath;

use crate::{ExtrudeError, ExtrudeSettings};

/// One horizontal ring of the sweep: a contour offset and a z height.
#[derive(Debug, Clone, Copy)]
struct Ring {
    offset: f64,
    z: f64,
}

/// Extrude a closed planar path along +z into a watertight triangle mesh.
///
/// The body spans `z = 0 .. depth`. With beveling enabled, quarter-circle
/// bevel rings extend the solid to `z = -bevel_thickness` below and
/// `depth + bevel_thickness` above, with the wall contour pushed outward
/// by `bevel_size` between the caps; the caps themselves keep the original
/// contour. A bevel ring whose outward offset collapses (very thin shapes)
/// falls back to the original contour instead of failing.
///
/// # Errors
///
/// * [`ExtrudeError::EmptyPath`] - fewer than 3 vertices
/// * [`ExtrudeError::InvalidSettings`] - non-positive depth
/// * [`ExtrudeError::Triangulation`] - the cap polygon could not be
///   triangulated (fully degenerate input)
pub fn extrude_path(
    path: &PlanarPath,
    settings: &ExtrudeSettings,
) -> Result<TriangleMesh, ExtrudeError> {
    if settings.depth <= 0.0 {
        return Err(ExtrudeError::InvalidSettings(format!(
            "depth must be positive, got {}",
            settings.depth
        )));
    }
    if !path.is_solid_candidate() {
        return Err(ExtrudeError::EmptyPath);
    }

    // Normalize to counter-clockwise so all winding decisions below are fixed.
    let mut contour: Vec<Point2> = path.points().to_vec();
    let area = signed_area(&contour);
    if area.abs() < 1e-12 {
        // Collinear input bounds no area
        return Err(ExtrudeError::Triangulation);
    }
    if area < 0.0 {
        contour.reverse();
    }

    let cap_triangles = ear_clip(&contour);
    if cap_triangles.is_empty() {
        return Err(ExtrudeError::Triangulation);
    }

    let rings = build_rings(settings);
    let n = contour.len();
    let mut mesh = TriangleMesh::new();

    // One vertex ring per sweep layer.
    for ring in &rings {
        let ring_contour = offset_contour(&contour, ring.offset);
        for p in &ring_contour {
            mesh.push_vertex(Point3::new(p.x, p.y, ring.z));
        }
    }

    // Walls: quads between consecutive rings, wound outward for a CCW contour.
    for r in 0..rings.len() - 1 {
        let base_lo = (r * n) as u32;
        let base_hi = ((r + 1) * n) as u32;
        for i in 0..n as u32 {
            let j = (i + 1) % n as u32;
            mesh.push_triangle(base_lo + i, base_lo + j, base_hi + j);
            mesh.push_triangle(base_lo + i, base_hi + j, base_hi + i);
        }
    }

    // Caps reuse the first and last vertex rings, which always carry the
    // unoffset contour. Bottom cap faces -z (reversed winding).
    let top_base = ((rings.len() - 1) * n) as u32;
    for tri in &cap_triangles {
        mesh.push_triangle(tri[0] as u32, tri[2] as u32, tri[1] as u32);
        mesh.push_triangle(
            top_base + tri[0] as u32,
            top_base + tri[1] as u32,
            top_base + tri[2] as u32,
        );
    }

    mesh.compute_vertex_normals();
    Ok(mesh)
}

/// Sweep layers from bottom cap to top cap.
fn build_rings(settings: &ExtrudeSettings) -> Vec<Ring> {
    let steps = settings.steps.max(1);
    let mut rings = Vec::new();

    if settings.bevel_enabled && settings.bevel_segments > 0 {
        let bt = settings.bevel_thickness;
        let bs = settings.bevel_size;
        let segs = settings.bevel_segments;

        // Bottom bevel: from the unoffset cap contour at -bt up to the
        // wall contour (offset bs) at z = 0, on a quarter-circle profile.
        for i in 0..=segs {
            let t = f64::from(i) / f64::from(segs);
            rings.push(Ring {
                offset: bs * (t * FRAC_PI_2).sin(),
                z: -bt * (t * FRAC_PI_2).cos(),
            });
        }
        // Straight walls.
        for s in 1..=steps {
            rings.push(Ring {
                offset: bs,
                z: settings.depth * f64::from(s) / f64::from(steps),
            });
        }
        // Top bevel, mirrored.
        for i in 1..=segs {
            let t = f64::from(i) / f64::from(segs);
            rings.push(Ring {
                offset: bs * (t * FRAC_PI_2).cos(),
                z: settings.depth + bt * (t * FRAC_PI_2).sin(),
            });
        }
    } else {
        for s in 0..=steps {
            rings.push(Ring {
                offset: 0.0,
                z: settings.depth * f64::from(s) / f64::from(steps),
            });
        }
    }

    rings
}

fn offset_contour(contour: &[Point2], distance: f64) -> Vec<Point2> {
    if distance.abs() < 1e-12 {
        return contour.to_vec();
    }
    // Fall back to the unoffset contour if the ring collapses
    offset_polygon(contour, distance).unwrap_or_else(|| contour.to_vec())
}
