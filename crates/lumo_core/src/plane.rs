//! Infinite plane primitive.

use crate::primitive::{Geometry, PARALLEL_EPSILON};
use lumo_math::{Interval, Ray, Vec3};

/// An infinite plane through `position` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    position: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a new plane. `normal` should be unit length.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

/// Distance along `ray` to the plane `(position, normal)`.
///
/// `normal` does not need to be unit length; its magnitude cancels out of the
/// distance. Near-parallel rays (|D.N| < 1e-6) and planes behind the origin miss.
pub(crate) fn intersect_plane(ray: &Ray, position: Vec3, normal: Vec3) -> Option<f32> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (position - ray.origin).dot(normal) / denom;
    Interval::FORWARD.contains(t).then_some(t)
}

impl Geometry for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        intersect_plane(ray, self.position, self.normal)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3::ZERO, Vec3::Y)
    }

    #[test]
    fn test_plane_hit_from_above() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(floor().intersect(&ray), Some(1.0));
    }

    #[test]
    fn test_plane_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(floor().intersect(&ray), None);
    }

    #[test]
    fn test_plane_parallel_ray() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert_eq!(floor().intersect(&ray), None);

        // Within the epsilon band still counts as parallel
        let grazing = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, -1e-7, 0.0));
        assert_eq!(floor().intersect(&grazing), None);
    }

    #[test]
    fn test_plane_hit_from_below() {
        // The plane is two-sided
        let ray = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y);
        assert_eq!(floor().intersect(&ray), Some(2.0));
    }

    #[test]
    fn test_plane_normal_is_constant() {
        let plane = floor();
        assert_eq!(plane.normal_at(Vec3::new(3.0, 0.0, -7.0)), Vec3::Y);
    }

    #[test]
    fn test_plane_intersection_is_pure() {
        let plane = Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::Y);
        let ray = Ray::new(Vec3::new(0.1, 0.35, -1.0), Vec3::new(0.3, -0.7, 1.0).normalize());

        let first = plane.intersect(&ray).map(f32::to_bits);
        let second = plane.intersect(&ray).map(f32::to_bits);
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
