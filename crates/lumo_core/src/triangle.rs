//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then accepts the hit with a
//! barycentric inside test.

use crate::plane::intersect_plane;
use crate::primitive::Geometry;
use lumo_math::{Ray, Vec3};

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices, in the order given (no winding is enforced)
    vertices: [Vec3; 3],
    /// (v1 - v0) x (v2 - v0), NOT normalized: its length is twice the area
    normal: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(vertices: [Vec3; 3]) -> Self {
        let [v0, v1, v2] = vertices;
        let normal = (v1 - v0).cross(v2 - v0);
        Self { vertices, normal }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        self.vertices
    }

    /// The unnormalized face normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Barycentric weights `(u, v)` of `point` along edges v0->v1 and v0->v2.
    ///
    /// `point` is assumed to lie on the triangle's plane. The denominator is
    /// -|normal|^2, so degenerate triangles never reach this (their plane test
    /// already misses).
    fn barycentric(&self, point: Vec3) -> (f32, f32) {
        let [p0, p1, p2] = self.vertices;
        let v0 = p1 - p0;
        let v1 = p2 - p0;
        let v2 = point - p0;

        let v00 = v0.dot(v0);
        let v01 = v0.dot(v1);
        let v11 = v1.dot(v1);
        let v20 = v2.dot(v0);
        let v21 = v2.dot(v1);

        let inter = v01 * v01 - v00 * v11;
        let u = (v01 * v21 - v11 * v20) / inter;
        let v = (v01 * v20 - v00 * v21) / inter;
        (u, v)
    }
}

impl Geometry for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let t = intersect_plane(ray, self.vertices[0], self.normal)?;
        let (u, v) = self.barycentric(ray.at(t));

        // Near edges inclusive, far edge (u + v == 1) exclusive.
        if u >= 0.0 && v >= 0.0 && u + v < 1.0 {
            Some(t)
        } else {
            None
        }
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}
