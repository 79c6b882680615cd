//! lumo renderer - recursive Whitted-style ray tracing.
//!
//! Traces one ray per pixel, shades every hit with ambient + Lambert +
//! Blinn-Phong terms gated by hard shadows, and follows mirror reflections up
//! to a fixed depth.

mod camera;
mod hit;
mod renderer;
mod shading;
mod tracer;

pub use camera::ScreenCamera;
pub use hit::RayHit;
pub use renderer::{
    color_to_rgb, render, render_pixel, ImageBuffer, RenderConfig, RenderError, RenderResult,
    MAX_DIMENSION,
};
pub use shading::shade;
pub use tracer::{trace, trace_path, trace_with_depth, Bounce, Termination, TracePath, DEFAULT_MAX_DEPTH};

/// Re-export the scene types the renderer consumes
pub use lumo_core::{Color, Scene};
pub use lumo_math::{Interval, Ray, Vec3};
