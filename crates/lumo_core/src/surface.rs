//! Material attributes shared by every primitive.

use crate::color::{Color, ColorSource};
use lumo_math::Vec3;

/// Local illumination attributes of a primitive.
///
/// `diffuse` and `specular` fall back to the scene-wide coefficients when unset.
/// An unset `reflectivity` means a perfect mirror contribution (1.0).
#[derive(Clone, Debug)]
pub struct Surface {
    /// Base color (constant or procedural)
    pub color: ColorSource,

    /// Lambert coefficient override
    pub diffuse: Option<f32>,

    /// Blinn-Phong coefficient override
    pub specular: Option<f32>,

    /// Fraction of the next bounce carried back, in [0, 1]
    pub reflectivity: Option<f32>,
}

impl Surface {
    /// A surface with a base color and no overrides.
    pub fn new(color: impl Into<ColorSource>) -> Self {
        Self {
            color: color.into(),
            diffuse: None,
            specular: None,
            reflectivity: None,
        }
    }

    pub fn diffuse_or(&self, default: f32) -> f32 {
        self.diffuse.unwrap_or(default)
    }

    pub fn specular_or(&self, default: f32) -> f32 {
        self.specular.unwrap_or(default)
    }

    pub fn reflectivity(&self) -> f32 {
        self.reflectivity.unwrap_or(1.0)
    }

    /// Base color at a world-space point.
    pub fn color_at(&self, point: Vec3) -> Color {
        self.color.at(point)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(Color::new(0.5, 0.5, 0.5))
    }
}
