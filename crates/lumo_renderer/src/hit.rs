//! Per-bounce hit record.

use lumo_core::{Color, Primitive};
use lumo_math::Vec3;

/// What one trace step found: the primitive, where it was hit, and the
/// locally shaded color at that point.
///
/// Built fresh on every bounce and consumed by the tracer.
#[derive(Debug, Clone)]
pub struct RayHit<'a> {
    /// Index of the primitive in scene order
    pub index: usize,
    /// The primitive itself
    pub primitive: &'a Primitive,
    /// Distance along the ray
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Unit surface normal
    pub normal: Vec3,
    /// Shaded color of this bounce alone
    pub color: Color,
}
