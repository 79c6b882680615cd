//! Local illumination: ambient, Lambert diffuse and Blinn-Phong specular with
//! binary shadows.

use lumo_core::{Color, Scene};
use lumo_math::{Vec3, SURFACE_EPSILON};

/// Shade the point `point` on primitive `index`.
///
/// `normal` must be unit length and `index` must be a valid primitive index
/// (as returned by [`Scene::nearest_hit`]). `eye` is the viewer position used
/// for the specular half-vector.
///
/// Each light contributes only if the shadow ray from just above the surface
/// reaches no other primitive. The diffuse term is tinted by the surface color,
/// the specular term by the light color.
pub fn shade(scene: &Scene, eye: Vec3, index: usize, point: Vec3, normal: Vec3) -> Color {
    let primitive = &scene.primitives()[index];
    let constants = scene.constants();

    let base = primitive.color_at(point);
    let diffuse = primitive.diffuse_coefficient(constants.diffuse);
    let specular = primitive.specular_coefficient(constants.specular);

    let shadow_origin = point + normal * SURFACE_EPSILON;
    let to_eye = (eye - point).normalize();

    let mut color = Color::splat(constants.ambient);
    for (light_position, light_color) in scene.lights().iter() {
        let to_light = (light_position - point).normalize();

        if scene.is_occluded(shadow_origin, to_light, index) {
            continue;
        }

        // Lambert
        color += diffuse * normal.dot(to_light).max(0.0) * base;

        // Blinn-Phong
        let half = (to_light + to_eye).normalize_or_zero();
        color += specular
            * normal.dot(half).max(0.0).powi(constants.specular_exponent)
            * light_color;
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_core::{Lights, Primitive, ShadingConstants};

    const EYE: Vec3 = Vec3::new(0.0, 1.0, -1.0);

    fn lit_floor(extra: Vec<Primitive>) -> Scene {
        let mut primitives = vec![Primitive::plane_with_color(
            Vec3::ZERO,
            Vec3::Y,
            Color::new(0.5, 0.5, 0.5).into(),
        )];
        primitives.extend(extra);

        let mut lights = Lights::default();
        lights.push(Vec3::new(0.0, 5.0, 0.0), Color::ONE);
        Scene::new(primitives, lights, ShadingConstants::default())
    }

    #[test]
    fn test_no_lights_is_ambient() {
        let scene = Scene::new(
            vec![Primitive::sphere(Vec3::ZERO, 1.0, Color::ONE)],
            Lights::default(),
            ShadingConstants::default(),
        );
        let color = shade(&scene, EYE, 0, Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert_eq!(color, Color::splat(0.05));
    }

    #[test]
    fn test_light_overhead() {
        let scene = lit_floor(vec![]);
        let color = shade(&scene, EYE, 0, Vec3::ZERO, Vec3::Y);

        // ambient + 0.75 * 1 * 0.5 + specular
        let without_specular = 0.05 + 0.75 * 0.5;
        assert!(color.x > without_specular);
        assert!((color.x - color.y).abs() < 1e-6);
        assert!((color.y - color.z).abs() < 1e-6);
    }

    #[test]
    fn test_light_below_surface_adds_nothing() {
        let mut lights = Lights::default();
        lights.push(Vec3::new(0.0, -5.0, 0.0), Color::ONE);
        let scene = Scene::new(
            vec![Primitive::plane_with_color(Vec3::ZERO, Vec3::Y, Color::ONE.into())],
            lights,
            ShadingConstants::default(),
        );

        // Both dot products clamp to zero; the point is not shadowed but unlit
        let color = shade(&scene, Vec3::new(0.0, 1.0, 0.0), 0, Vec3::ZERO, Vec3::Y);
        assert_eq!(color, Color::splat(0.05));
    }

    #[test]
    fn test_blocker_never_brightens() {
        let open = lit_floor(vec![]);
        let blocked = lit_floor(vec![Primitive::sphere(
            Vec3::new(0.0, 2.5, 0.0),
            0.5,
            Color::ONE,
        )]);

        let point = Vec3::ZERO;
        let lit = shade(&open, EYE, 0, point, Vec3::Y);
        let shadowed = shade(&blocked, EYE, 0, point, Vec3::Y);

        assert!(shadowed.x <= lit.x && shadowed.y <= lit.y && shadowed.z <= lit.z);
        assert_eq!(shadowed, Color::splat(0.05));
    }

    #[test]
    fn test_blocker_off_the_shadow_ray() {
        let open = lit_floor(vec![]);
        let aside = lit_floor(vec![Primitive::sphere(
            Vec3::new(3.0, 2.5, 0.0),
            0.5,
            Color::ONE,
        )]);

        let lit = shade(&open, EYE, 0, Vec3::ZERO, Vec3::Y);
        let still_lit = shade(&aside, EYE, 0, Vec3::ZERO, Vec3::Y);
        assert_eq!(lit, still_lit);
    }

    #[test]
    fn test_self_is_not_a_blocker() {
        // A point on top of a sphere lit from above
        let mut lights = Lights::default();
        lights.push(Vec3::new(0.0, 10.0, 0.0), Color::ONE);
        let scene = Scene::new(
            vec![Primitive::sphere(Vec3::ZERO, 1.0, Color::ONE)],
            lights,
            ShadingConstants::default(),
        );

        let color = shade(&scene, Vec3::new(0.0, 5.0, 0.0), 0, Vec3::Y, Vec3::Y);
        assert!(color.x > 1.0);
    }
}
