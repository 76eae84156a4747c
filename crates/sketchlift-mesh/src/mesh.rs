//! Renderable triangle mesh.

use sketchlift_math::{BoundingBox3, Point3};

/// Output triangle mesh for rendering and export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
    /// Flat array of vertex normals: `[nx0, ny0, nz0, ...]` (f32). Same length as vertices.
    pub normals: Vec<f32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Append a vertex, returning its index.
    pub fn push_vertex(&mut self, p: Point3) -> u32 {
        let idx = self.num_vertices() as u32;
        self.vertices.push(p.x as f32);
        self.vertices.push(p.y as f32);
        self.vertices.push(p.z as f32);
        idx
    }

    /// Append a triangle by vertex indices.
    pub fn push_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Read back a vertex position.
    pub fn vertex(&self, i: u32) -> Point3 {
        let i = i as usize * 3;
        Point3::new(
            self.vertices[i] as f64,
            self.vertices[i + 1] as f64,
            self.vertices[i + 2] as f64,
        )
    }

    /// Merge another mesh into this one.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.num_vertices() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Bounding box of all vertices, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<BoundingBox3> {
        BoundingBox3::from_points((0..self.num_vertices() as u32).map(|i| self.vertex(i)))
    }

    /// Recompute per-vertex normals by area-weighted accumulation of face
    /// normals. Replaces any existing normals.
    pub fn compute_vertex_normals(&mut self) {
        let mut acc = vec![0.0f64; self.vertices.len()];

        for tri in self.indices.chunks(3) {
            let (i0, i1, i2) = (tri[0], tri[1], tri[2]);
            let v0 = self.vertex(i0);
            let v1 = self.vertex(i1);
            let v2 = self.vertex(i2);
            // Cross product magnitude is twice the triangle area, so the
            // unnormalized sum is area-weighted.
            let n = (v1 - v0).cross(&(v2 - v0));
            for &i in &[i0, i1, i2] {
                let base = i as usize * 3;
                acc[base] += n.x;
                acc[base + 1] += n.y;
                acc[base + 2] += n.z;
            }
        }

        self.normals.clear();
        self.normals.reserve(self.vertices.len());
        for chunk in acc.chunks(3) {
            let len = (chunk[0] * chunk[0] + chunk[1] * chunk[1] + chunk[2] * chunk[2]).sqrt();
            if len > 1e-12 {
                self.normals.push((chunk[0] / len) as f32);
                self.normals.push((chunk[1] / len) as f32);
                self.normals.push((chunk[2] / len) as f32);
            } else {
                self.normals.push(0.0);
                self.normals.push(0.0);
                self.normals.push(1.0);
            }
        }
    }

    /// Signed volume of the mesh (meaningful for closed meshes).
    pub fn signed_volume(&self) -> f64 {
        let mut vol = 0.0;
        for tri in self.indices.chunks(3) {
            let v0 = self.vertex(tri[0]);
            let v1 = self.vertex(tri[1]);
            let v2 = self.vertex(tri[2]);
            vol += v0.coords.dot(&v1.coords.cross(&v2.coords));
        }
        vol / 6.0
    }
}
