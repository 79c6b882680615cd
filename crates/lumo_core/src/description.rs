//! TOML scene descriptions.
//!
//! A scene file lists lights and objects plus optional shading, camera and
//! render sections. Fans are expanded into triangles when the description is
//! built, and their triangles go in front of every other object.
//!
//! ```toml
//! [[lights]]
//! position = [5.0, 4.0, -5.0]
//! color = [2.0, 1.0, 1.0]
//!
//! [[objects]]
//! type = "plane"
//! position = [0.0, -0.5, 0.0]
//! normal = [0.0, 1.0, 0.0]
//! ```

use std::path::Path;

use rand::RngCore;
use serde::Deserialize;

use crate::color::{Color, ColorSource};
use crate::fan::{build_fan_seeded, DEFAULT_FAN_SEED_COLOR, DEFAULT_PALETTE};
use crate::light::Lights;
use crate::primitive::Primitive;
use crate::scene::{Scene, SceneError, SceneResult, ShadingConstants};
use lumo_math::Vec3;

type Triple = [f32; 3];

/// `[shading]` section. Missing keys keep the defaults.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ShadingSection {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub specular_exponent: i32,
}

impl Default for ShadingSection {
    fn default() -> Self {
        let constants = ShadingConstants::default();
        Self {
            ambient: constants.ambient,
            diffuse: constants.diffuse,
            specular: constants.specular,
            specular_exponent: constants.specular_exponent,
        }
    }
}

impl From<ShadingSection> for ShadingConstants {
    fn from(section: ShadingSection) -> Self {
        Self {
            ambient: section.ambient,
            diffuse: section.diffuse,
            specular: section.specular,
            specular_exponent: section.specular_exponent,
        }
    }
}

/// `[camera]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CameraSection {
    pub eye: Option<Triple>,
}

/// `[render]` section. Every key is optional so the CLI can fill gaps.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RenderSection {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_depth: Option<u32>,
    pub seed: Option<u64>,
}

/// One `[[lights]]` entry.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LightSection {
    pub position: Triple,
    #[serde(default = "white")]
    pub color: Triple,
}

fn white() -> Triple {
    [1.0, 1.0, 1.0]
}

/// Optional material overrides shared by every object kind.
#[derive(Debug, Clone, Copy, Default)]
struct MaterialOverrides {
    diffuse: Option<f32>,
    specular: Option<f32>,
    reflectivity: Option<f32>,
}

/// One `[[objects]]` entry, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectSection {
    Plane {
        position: Triple,
        normal: Triple,
        color: Option<Triple>,
        checker: Option<[Triple; 2]>,
        diffuse: Option<f32>,
        specular: Option<f32>,
        reflectivity: Option<f32>,
    },
    Sphere {
        position: Triple,
        radius: f32,
        color: Triple,
        diffuse: Option<f32>,
        specular: Option<f32>,
        reflectivity: Option<f32>,
    },
    Triangle {
        vertices: [Triple; 3],
        color: Triple,
        diffuse: Option<f32>,
        specular: Option<f32>,
        reflectivity: Option<f32>,
    },
    Fan {
        points: Vec<Triple>,
        seed_color: Option<Triple>,
        palette: Option<Vec<Triple>>,
    },
}

/// A parsed scene file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub shading: ShadingSection,

    #[serde(default)]
    pub camera: CameraSection,

    #[serde(default)]
    pub render: RenderSection,

    #[serde(default)]
    pub lights: Vec<LightSection>,

    #[serde(default)]
    pub objects: Vec<ObjectSection>,
}

/// Load a scene description from a TOML file.
pub fn load_scene_file<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SceneError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let description = SceneDescription::from_toml_str(&content)?;

    log::info!(
        "Loaded scene file {}: {} objects, {} lights",
        path.display(),
        description.objects.len(),
        description.lights.len()
    );
    Ok(description)
}

impl SceneDescription {
    /// Parse a description from TOML text.
    pub fn from_toml_str(content: &str) -> SceneResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Camera eye, if the file sets one.
    pub fn eye(&self) -> Option<Vec3> {
        self.camera.eye.map(Vec3::from_array)
    }

    /// Expand fans and assemble the scene.
    ///
    /// `rng` is only used for fan palette draws.
    pub fn build(&self, rng: &mut dyn RngCore) -> SceneResult<Scene> {
        let mut fans = Vec::new();
        let mut others = Vec::new();

        for (index, object) in self.objects.iter().enumerate() {
            match object {
                ObjectSection::Fan {
                    points,
                    seed_color,
                    palette,
                } => {
                    let points: Vec<Vec3> = points.iter().copied().map(Vec3::from_array).collect();
                    let seed_color = seed_color.map_or(DEFAULT_FAN_SEED_COLOR, Vec3::from_array);
                    let palette: Vec<Color> = match palette {
                        Some(colors) => colors.iter().copied().map(Vec3::from_array).collect(),
                        None => DEFAULT_PALETTE.to_vec(),
                    };
                    fans.extend(build_fan_seeded(&points, seed_color, &palette, rng)?);
                }
                other => others.push(build_object(index, other)?),
            }
        }

        let mut lights = Lights::default();
        for light in &self.lights {
            lights.push(Vec3::from_array(light.position), Vec3::from_array(light.color));
        }

        fans.extend(others);
        Ok(Scene::new(fans, lights, self.shading.into()))
    }
}

fn build_object(index: usize, object: &ObjectSection) -> SceneResult<Primitive> {
    let primitive = match *object {
        ObjectSection::Plane {
            position,
            normal,
            color,
            checker,
            diffuse,
            specular,
            reflectivity,
        } => {
            let normal = Vec3::from_array(normal);
            let length = normal.length();
            if length == 0.0 || !length.is_finite() {
                return Err(SceneError::InvalidObject {
                    index,
                    reason: "plane normal must be a non-zero vector".to_string(),
                });
            }
            if (length - 1.0).abs() > 1e-4 {
                log::warn!("Object #{}: plane normal is not unit length, normalizing", index);
            }

            let color = match (color, checker) {
                (Some(_), Some(_)) => {
                    return Err(SceneError::InvalidObject {
                        index,
                        reason: "plane takes either `color` or `checker`, not both".to_string(),
                    });
                }
                (Some(color), None) => ColorSource::Constant(Vec3::from_array(color)),
                (None, Some([even, odd])) => {
                    ColorSource::checkerboard(Vec3::from_array(even), Vec3::from_array(odd))
                }
                (None, None) => ColorSource::checkerboard(Color::ONE, Color::ZERO),
            };

            let plane = Primitive::plane_with_color(Vec3::from_array(position), normal / length, color);
            apply_overrides(plane, MaterialOverrides { diffuse, specular, reflectivity })
        }
        ObjectSection::Sphere {
            position,
            radius,
            color,
            diffuse,
            specular,
            reflectivity,
        } => {
            if radius < 0.0 {
                return Err(SceneError::InvalidObject {
                    index,
                    reason: format!("sphere radius must be non-negative, got {}", radius),
                });
            }
            let sphere = Primitive::sphere(Vec3::from_array(position), radius, Vec3::from_array(color));
            apply_overrides(sphere, MaterialOverrides { diffuse, specular, reflectivity })
        }
        ObjectSection::Triangle {
            vertices,
            color,
            diffuse,
            specular,
            reflectivity,
        } => {
            let triangle = Primitive::triangle(vertices.map(Vec3::from_array), Vec3::from_array(color));
            apply_overrides(triangle, MaterialOverrides { diffuse, specular, reflectivity })
        }
        ObjectSection::Fan { .. } => unreachable!("fans are expanded by the caller"),
    };

    if let Some(r) = primitive.surface.reflectivity {
        if !(0.0..=1.0).contains(&r) {
            return Err(SceneError::InvalidObject {
                index,
                reason: format!("reflectivity must be within [0, 1], got {}", r),
            });
        }
    }

    Ok(primitive)
}

fn apply_overrides(mut primitive: Primitive, overrides: MaterialOverrides) -> Primitive {
    if let Some(diffuse) = overrides.diffuse {
        primitive = primitive.with_diffuse(diffuse);
    }
    if let Some(specular) = overrides.specular {
        primitive = primitive.with_specular(specular);
    }
    if let Some(reflectivity) = overrides.reflectivity {
        primitive = primitive.with_reflectivity(reflectivity);
    }
    primitive
}
