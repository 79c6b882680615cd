//! Scene model: primitives, lights and global shading constants.
//!
//! A `Scene` is built once and then only read. Renderers share it across
//! threads by reference.

use thiserror::Error;

use crate::fan::FanError;
use crate::light::Lights;
use crate::primitive::Primitive;
use lumo_math::{Ray, Vec3};

/// Errors that can occur while assembling or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Scene file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Fan error: {0}")]
    Fan(#[from] FanError),

    #[error("Light count mismatch: {positions} positions, {colors} colors")]
    LightCountMismatch { positions: usize, colors: usize },

    #[error("Invalid object #{index}: {reason}")]
    InvalidObject { index: usize, reason: String },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Scene-wide shading parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingConstants {
    /// Ambient term, added equally to all three channels
    pub ambient: f32,

    /// Lambert coefficient for primitives without an override
    pub diffuse: f32,

    /// Blinn-Phong coefficient for primitives without an override
    pub specular: f32,

    /// Blinn-Phong exponent
    pub specular_exponent: i32,
}

impl Default for ShadingConstants {
    fn default() -> Self {
        Self {
            ambient: 0.05,
            diffuse: 1.0,
            specular: 1.0,
            specular_exponent: 50,
        }
    }
}

/// An ordered list of primitives plus lights and shading constants.
///
/// Primitive order only matters for ties in [`Scene::nearest_hit`], where the
/// earlier primitive wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Lights,
    constants: ShadingConstants,
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>, lights: Lights, constants: ShadingConstants) -> Self {
        log::info!(
            "Scene built: {} primitives, {} lights",
            primitives.len(),
            lights.len()
        );
        Self {
            primitives,
            lights,
            constants,
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn primitive(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    pub fn constants(&self) -> &ShadingConstants {
        &self.constants
    }

    /// Find the closest primitive along `ray`.
    ///
    /// Linear scan in scene order; returns `(index, distance)`. On equal
    /// distances the first primitive in order is kept.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(usize, f32)> {
        let mut nearest: Option<(usize, f32)> = None;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(t) = primitive.intersect(ray) {
                if nearest.map_or(true, |(_, best)| t < best) {
                    nearest = Some((index, t));
                }
            }
        }

        nearest
    }

    /// Shadow query: does any primitive other than `exclude` intersect the ray
    /// from `origin` along `direction`?
    ///
    /// There is no upper bound on the distance, so geometry beyond the light
    /// still blocks it. With no other primitives nothing is blocked.
    pub fn is_occluded(&self, origin: Vec3, direction: Vec3, exclude: usize) -> bool {
        let ray = Ray::new(origin, direction);
        self.primitives
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != exclude)
            .any(|(_, primitive)| primitive.intersect(&ray).is_some())
    }
}
