//! Renderable model assembled by the conversion pipeline.

use sketchlift_math::{BoundingBox3, Point3, Vec3};
use sketchlift_mesh::TriangleMesh;

/// Outline accent color (dark slate, matches the capture UI theme).
pub const OUTLINE_COLOR: u32 = 0x2c3e50;

/// Outline line width in pixels.
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Height of the outline plane above the solid's front face.
pub const OUTLINE_LIFT: f64 = 0.01;

/// Surface material parameters handed to the renderer.
///
/// Cosmetic only; geometry correctness never depends on these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Packed RGB color (0xRRGGBB).
    pub color: u32,
    /// Roughness in `[0, 1]`.
    pub roughness: f32,
    /// Metalness in `[0, 1]`.
    pub metalness: f32,
}

impl Material {
    /// The fixed wood-tone material of the extruded solid.
    pub const SOLID: Self = Self {
        color: 0xcd853f,
        roughness: 0.8,
        metalness: 0.2,
    };
}

/// The extruded solid with its material.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidPart {
    /// Extruded, beveled triangle mesh.
    pub mesh: TriangleMesh,
    /// Render material.
    pub material: Material,
}

/// A 3D line strip at a fixed height above the solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline3 {
    /// Points of the strip, in stroke order.
    pub points: Vec<Point3>,
    /// Packed RGB line color.
    pub color: u32,
    /// Line width in pixels.
    pub width: f32,
}

/// The renderable output of one conversion: at most one solid mesh plus
/// one outline polyline per drawable stroke, all in one coordinate frame.
///
/// Handed to the viewer as a unit; a new model entirely replaces the
/// previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    /// The extruded solid; `None` when the first stroke had too few points.
    pub solid: Option<SolidPart>,
    /// Outline accents, one per stroke with at least two points.
    pub outlines: Vec<Polyline3>,
}

impl Model {
    /// Whether the model has nothing to render.
    pub fn is_empty(&self) -> bool {
        self.solid.is_none() && self.outlines.is_empty()
    }

    /// Bounding box over the solid mesh and all outline points.
    pub fn bounding_box(&self) -> Option<BoundingBox3> {
        let solid_bbox = self.solid.as_ref().and_then(|s| s.mesh.bounding_box());
        let outline_bbox = BoundingBox3::from_points(
            self.outlines.iter().flat_map(|l| l.points.iter().copied()),
        );
        match (solid_bbox, outline_bbox) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (a, b) => a.or(b),
        }
    }
}

/// Camera placement that frames a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position.
    pub position: Point3,
    /// Point the camera looks at (the model's center).
    pub target: Point3,
}

/// Auto-fit camera placement: distance proportional to the model's
/// bounding-box diagonal, offset to look slightly down and from the side.
///
/// Returns `None` for an empty model.
pub fn fit_camera(model: &Model) -> Option<CameraPose> {
    let bbox = model.bounding_box()?;
    let center = bbox.center();
    let size = bbox.diagonal().norm();
    Some(CameraPose {
        position: center + Vec3::new(size / 2.0, size / 5.0, size * 1.5),
        target: center,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_only_model() -> Model {
        let mut mesh = TriangleMesh::new();
        let a = mesh.push_vertex(Point3::new(-1.0, -1.0, 0.0));
        let b = mesh.push_vertex(Point3::new(1.0, -1.0, 0.0));
        let c = mesh.push_vertex(Point3::new(0.0, 1.0, 0.5));
        mesh.push_triangle(a, b, c);
        Model {
            solid: Some(SolidPart {
                mesh,
                material: Material::SOLID,
            }),
            outlines: Vec::new(),
        }
    }

    #[test]
    fn test_bounding_box_spans_solid_and_outlines() {
        let mut model = solid_only_model();
        model.outlines.push(Polyline3 {
            points: vec![Point3::new(0.0, 0.0, 2.0), Point3::new(3.0, 0.0, 2.0)],
            color: OUTLINE_COLOR,
            width: OUTLINE_WIDTH,
        });
        let bbox = model.bounding_box().unwrap();
        assert!((bbox.max.x - 3.0).abs() < 1e-9);
        assert!((bbox.max.z - 2.0).abs() < 1e-9);
        assert!((bbox.min.x - (-1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_model() {
        let model = Model::default();
        assert!(model.is_empty());
        assert!(model.bounding_box().is_none());
        assert!(fit_camera(&model).is_none());
    }

    #[test]
    fn test_fit_camera_looks_at_center() {
        let model = solid_only_model();
        let pose = fit_camera(&model).unwrap();
        let bbox = model.bounding_box().unwrap();
        let center = bbox.center();
        let size = bbox.diagonal().norm();
        assert!((pose.target - center).norm() < 1e-9);
        assert!((pose.position.z - (center.z + size * 1.5)).abs() < 1e-9);
        // Camera sits away from the model, not inside it.
        assert!((pose.position - center).norm() > size);
    }
}
