//! Sphere primitive.

use crate::primitive::Geometry;
use lumo_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Geometry for Sphere {
    /// Solves |O + tD - C|^2 = R^2 for the nearest non-negative root.
    ///
    /// Both roots come from `q` (t0 = q/a, t1 = c/q) so only one of them goes
    /// through the subtraction. When the origin is inside the sphere the exit
    /// root is returned. An origin on the surface reports the far side, or
    /// nothing when the ray points outward.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let d = ray.direction;
        let oc = ray.origin - self.center;

        let a = d.dot(d);
        let b = 2.0 * d.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let disc = b * b - 4.0 * a * c;
        if disc <= 0.0 {
            return None;
        }

        let sqrt_disc = disc.sqrt();
        let q = if b < 0.0 {
            (-b - sqrt_disc) / 2.0
        } else {
            (-b + sqrt_disc) / 2.0
        };
        // Origin exactly on the surface (c == 0): the roots are 0 and -b/a,
        // and c / q would be 0 / 0. Only the far side counts as a hit.
        if q == 0.0 {
            let far = -b / a;
            return (far > 0.0).then_some(far);
        }

        let (t0, t1) = {
            let (r0, r1) = (q / a, c / q);
            if r0 <= r1 {
                (r0, r1)
            } else {
                (r1, r0)
            }
        };

        if t1 < 0.0 {
            return None;
        }
        Some(if t0 < 0.0 { t1 } else { t0 })
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
