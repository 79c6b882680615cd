use crate::Vec3;

/// Offset applied along the surface normal when spawning secondary rays,
/// so a ray does not immediately re-hit the surface it left.
pub const SURFACE_EPSILON: f32 = 1e-4;

/// A half-line in 3D space.
///
/// `direction` is expected to be unit length; the constructors do not
/// normalize it for you.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Mirror this ray about `normal` at `point`.
    ///
    /// The new origin is lifted off the surface by [`SURFACE_EPSILON`] along
    /// the normal. `normal` must be unit length.
    pub fn reflect(&self, point: Vec3, normal: Vec3) -> Ray {
        let d = self.direction;
        let mirrored = d - 2.0 * d.dot(normal) * normal;
        Ray::new(point + normal * SURFACE_EPSILON, mirrored.normalize())
    }
}
