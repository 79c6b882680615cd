//! Recursive ray tracer.
//!
//! Each pixel runs a bounded loop: find the nearest hit, shade it, add it to
//! the running color scaled by the product of the reflectivities seen so far,
//! then continue along the mirror direction. The loop stops on a miss or after
//! `max_depth` bounces.

use crate::hit::RayHit;
use crate::shading::shade;
use lumo_core::{Color, Scene};
use lumo_math::{Ray, Vec3};

/// Bounce limit used by [`trace`].
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Why a trace stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The last ray left the scene
    Miss,
    /// `max_depth` bounces were followed
    DepthExhausted,
}

/// One followed bounce and the weight it was added with.
#[derive(Debug, Clone)]
pub struct Bounce<'a> {
    pub hit: RayHit<'a>,
    /// Product of the reflectivities of all earlier bounces (1.0 for the first)
    pub attenuation: f32,
}

/// Full record of a traced path.
#[derive(Debug, Clone)]
pub struct TracePath<'a> {
    pub bounces: Vec<Bounce<'a>>,
    pub termination: Termination,
}

impl TracePath<'_> {
    /// Sum of every bounce's shaded color times its attenuation (unclamped).
    pub fn color(&self) -> Color {
        self.bounces
            .iter()
            .fold(Color::ZERO, |acc, bounce| acc + bounce.attenuation * bounce.hit.color)
    }

    /// True if the primary ray hit nothing.
    pub fn is_miss(&self) -> bool {
        self.bounces.is_empty()
    }
}

/// Trace a ray from `origin` along `direction`, keeping every bounce.
///
/// `direction` is normalized here. The specular half-vector always uses
/// `origin` as the eye, including on reflected bounces.
pub fn trace_path(origin: Vec3, direction: Vec3, scene: &Scene, max_depth: u32) -> TracePath<'_> {
    let eye = origin;
    let mut ray = Ray::new(origin, direction.normalize_or_zero());
    let mut attenuation = 1.0;
    let mut bounces = Vec::with_capacity(max_depth as usize);

    for _ in 0..max_depth {
        let Some((index, distance)) = scene.nearest_hit(&ray) else {
            return TracePath {
                bounces,
                termination: Termination::Miss,
            };
        };

        let primitive = &scene.primitives()[index];
        let point = ray.at(distance);
        // Triangle normals are stored unnormalized
        let normal = primitive.normal_at(point).normalize();
        let color = shade(scene, eye, index, point, normal);

        bounces.push(Bounce {
            hit: RayHit {
                index,
                primitive,
                distance,
                point,
                normal,
                color,
            },
            attenuation,
        });

        attenuation *= primitive.reflectivity();
        ray = ray.reflect(point, normal);
    }

    TracePath {
        bounces,
        termination: Termination::DepthExhausted,
    }
}

/// Trace with an explicit bounce limit.
///
/// Returns `None` when nothing was hit, otherwise the accumulated color.
/// Clamping to a displayable range is left to the caller.
pub fn trace_with_depth(origin: Vec3, direction: Vec3, scene: &Scene, max_depth: u32) -> Option<Color> {
    let path = trace_path(origin, direction, scene, max_depth);
    if path.is_miss() {
        None
    } else {
        Some(path.color())
    }
}

/// Trace with [`DEFAULT_MAX_DEPTH`] bounces.
pub fn trace(origin: Vec3, direction: Vec3, scene: &Scene) -> Option<Color> {
    trace_with_depth(origin, direction, scene, DEFAULT_MAX_DEPTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_core::{Lights, Primitive, ShadingConstants};

    /// Two facing mirrors at z = +1 and z = -1 with a constant color.
    fn mirror_box(reflectivity: f32) -> Scene {
        let wall = |z: f32, normal: Vec3| {
            Primitive::plane_with_color(Vec3::new(0.0, 0.0, z), normal, Color::new(0.2, 0.4, 0.6).into())
                .with_reflectivity(reflectivity)
        };

        let mut lights = Lights::default();
        lights.push(Vec3::new(0.0, 0.0, 0.0), Color::ONE);
        Scene::new(
            vec![wall(1.0, -Vec3::Z), wall(-1.0, Vec3::Z)],
            lights,
            ShadingConstants::default(),
        )
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::default();
        assert_eq!(trace(Vec3::ZERO, Vec3::Z, &scene), None);

        let path = trace_path(Vec3::ZERO, Vec3::Z, &scene, DEFAULT_MAX_DEPTH);
        assert!(path.is_miss());
        assert_eq!(path.termination, Termination::Miss);
    }

    #[test]
    fn test_single_sphere_then_miss() {
        let scene = Scene::new(
            vec![Primitive::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Color::ONE)],
            Lights::default(),
            ShadingConstants::default(),
        );

        let path = trace_path(Vec3::ZERO, Vec3::Z, &scene, DEFAULT_MAX_DEPTH);
        assert_eq!(path.bounces.len(), 1);
        assert_eq!(path.termination, Termination::Miss);

        let hit = &path.bounces[0].hit;
        assert_eq!(hit.index, 0);
        assert!((hit.distance - 4.0).abs() < 1e-6);
        assert!((hit.normal + Vec3::Z).length() < 1e-6);

        // No lights: only the ambient term survives
        assert_eq!(trace(Vec3::ZERO, Vec3::Z, &scene), Some(Color::splat(0.05)));
    }

    #[test]
    fn test_depth_exhausted_between_mirrors() {
        let scene = mirror_box(0.5);
        let path = trace_path(Vec3::ZERO, Vec3::Z, &scene, DEFAULT_MAX_DEPTH);

        assert_eq!(path.termination, Termination::DepthExhausted);
        assert_eq!(path.bounces.len(), DEFAULT_MAX_DEPTH as usize);

        // Bounces alternate between the two walls
        let indices: Vec<_> = path.bounces.iter().map(|b| b.hit.index).collect();
        assert_eq!(indices, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_reflection_attenuation() {
        let r = 0.5;
        let attenuated = mirror_box(r);
        let unattenuated = mirror_box(1.0);

        let path = trace_path(Vec3::ZERO, Vec3::Z, &attenuated, DEFAULT_MAX_DEPTH);
        let reference = trace_path(Vec3::ZERO, Vec3::Z, &unattenuated, DEFAULT_MAX_DEPTH);

        for k in 0..3 {
            let expected = r.powi(k as i32);
            assert_eq!(path.bounces[k].attenuation, expected);
            assert_eq!(reference.bounces[k].attenuation, 1.0);

            // Same geometry, same local shading; only the weight differs
            let contribution = path.bounces[k].attenuation * path.bounces[k].hit.color;
            let unweighted = reference.bounces[k].attenuation * reference.bounces[k].hit.color;
            assert!((contribution - unweighted * expected).length() < 1e-6);
        }
    }

    #[test]
    fn test_color_is_weighted_sum() {
        let scene = mirror_box(0.5);
        let path = trace_path(Vec3::ZERO, Vec3::Z, &scene, 3);

        let mut expected = Color::ZERO;
        let mut weight = 1.0;
        for bounce in &path.bounces {
            expected += weight * bounce.hit.color;
            weight *= 0.5;
        }
        assert!((path.color() - expected).length() < 1e-6);
        assert_eq!(trace_with_depth(Vec3::ZERO, Vec3::Z, &scene, 3), Some(path.color()));
    }

    #[test]
    fn test_zero_depth_traces_nothing() {
        let scene = mirror_box(0.5);
        let path = trace_path(Vec3::ZERO, Vec3::Z, &scene, 0);

        assert!(path.bounces.is_empty());
        assert_eq!(path.termination, Termination::DepthExhausted);
        assert_eq!(trace_with_depth(Vec3::ZERO, Vec3::Z, &scene, 0), None);
    }

    #[test]
    fn test_triangle_normal_is_normalized() {
        let big = Primitive::triangle(
            [
                Vec3::new(-10.0, -10.0, 5.0),
                Vec3::new(10.0, -10.0, 5.0),
                Vec3::new(0.0, 10.0, 5.0),
            ],
            Color::ONE,
        );
        let scene = Scene::new(vec![big], Lights::default(), ShadingConstants::default());

        let path = trace_path(Vec3::ZERO, Vec3::Z, &scene, 1);
        let hit = &path.bounces[0].hit;
        assert!((hit.normal.length() - 1.0).abs() < 1e-6);
        assert!((hit.distance - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_direction_is_normalized() {
        let scene = Scene::new(
            vec![Primitive::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Color::ONE)],
            Lights::default(),
            ShadingConstants::default(),
        );

        let path = trace_path(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), &scene, 1);
        assert!((path.bounces[0].hit.distance - 4.0).abs() < 1e-6);
    }
}
