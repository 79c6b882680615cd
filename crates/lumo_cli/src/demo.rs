//! Built-in demo scene, used when no scene file is given.

use lumo_core::{
    build_fan, Color, Lights, Primitive, Scene, SceneResult, ShadingConstants,
    DEFAULT_PALETTE,
};
use lumo_math::Vec3;
use rand::RngCore;

/// Boundary of the zig-zag fan standing at z = 1.
const FAN_POINTS: [Vec3; 5] = [
    Vec3::new(-1.0, -0.5, 1.0),
    Vec3::new(-0.5, 0.5, 1.0),
    Vec3::new(0.0, -0.5, 1.0),
    Vec3::new(0.5, 0.5, 1.0),
    Vec3::new(1.0, -0.5, 1.0),
];

/// A colored triangle fan over a checkerboard floor, lit by three lights.
pub fn demo_scene(rng: &mut dyn RngCore) -> SceneResult<Scene> {
    let mut primitives = build_fan(&FAN_POINTS, &DEFAULT_PALETTE, rng)?;
    primitives.push(Primitive::plane(Vec3::new(0.0, -0.5, 0.0), Vec3::Y));

    let lights = Lights::new(
        vec![
            Vec3::new(5.0, 4.0, -5.0),
            Vec3::new(5.0, 5.0, 0.0),
            Vec3::new(-20.0, 8.0, -25.0),
        ],
        vec![
            Color::new(2.0, 1.0, 1.0),
            Color::new(1.0, 2.0, 3.0),
            Color::new(1.0, 1.0, 1.0),
        ],
    )?;

    Ok(Scene::new(primitives, lights, ShadingConstants::default()))
}
