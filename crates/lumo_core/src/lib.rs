//! lumo core - scene model and geometry for the lumo ray tracer.
//!
//! This crate provides:
//!
//! - **Primitive geometry**: `Plane`, `Sphere`, `Triangle` and the `Primitive`
//!   union that pairs a shape with its `Surface` attributes
//! - **Scene model**: `Scene`, `Lights`, `ShadingConstants`
//! - **Fan triangulation**: `build_fan` turns an ordered boundary into triangles
//! - **Scene files**: TOML scene descriptions
//!
//! # Example
//!
//! ```ignore
//! use lumo_core::{load_scene_file, Scene};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let description = load_scene_file("scenes/fan_checkerboard.toml")?;
//! let scene = description.build(&mut StdRng::seed_from_u64(7))?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitive_count(),
//!     scene.lights().len());
//! ```

pub mod color;
pub mod description;
pub mod fan;
pub mod light;
pub mod plane;
pub mod primitive;
pub mod scene;
pub mod sphere;
pub mod surface;
pub mod triangle;

// Re-export commonly used types
pub use color::{Color, ColorSource};
pub use description::{load_scene_file, SceneDescription};
pub use fan::{
    build_fan, build_fan_seeded, fan_topology, FanError, DEFAULT_FAN_SEED_COLOR, DEFAULT_PALETTE,
};
pub use light::Lights;
pub use plane::Plane;
pub use primitive::{Geometry, Primitive, Shape, PARALLEL_EPSILON};
pub use scene::{Scene, SceneError, SceneResult, ShadingConstants};
pub use sphere::Sphere;
pub use surface::Surface;
pub use triangle::Triangle;

/// Re-export Vec3 and Ray from lumo_math
pub use lumo_math::{Ray, Vec3};
