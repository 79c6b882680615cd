//! Pinhole camera looking through a flat screen window at z = 0.

use lumo_math::{Ray, Vec3};

/// Maps pixels to primary rays.
///
/// The screen is the rectangle `window = (x0, y0, x1, y1)` on the z = 0 plane.
/// Pixel columns sample x0..=x1 evenly, rows sample y1..=y0 from the top down,
/// and every ray starts at `eye`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenCamera {
    pub eye: Vec3,
    pub window: [f32; 4],
}

impl ScreenCamera {
    /// Default eye position, slightly above the floor and behind the screen.
    pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 0.35, -1.0);

    pub fn new(eye: Vec3, window: [f32; 4]) -> Self {
        Self { eye, window }
    }

    /// Window spanning x in [-1, 1] with the image aspect ratio, shifted up
    /// by 0.25.
    pub fn for_aspect(eye: Vec3, width: u32, height: u32) -> Self {
        let r = width as f32 / height.max(1) as f32;
        Self::new(eye, [-1.0, -1.0 / r + 0.25, 1.0, 1.0 / r + 0.25])
    }

    /// Point on the screen for pixel (x, y), with y = 0 the top row.
    pub fn screen_point(&self, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        let [x0, y0, x1, y1] = self.window;
        let sx = linspace(x0, x1, width, x);
        let sy = linspace(y0, y1, height, height.saturating_sub(1).saturating_sub(y));
        Vec3::new(sx, sy, 0.0)
    }

    /// Primary ray through pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let target = self.screen_point(x, y, width, height);
        Ray::new(self.eye, (target - self.eye).normalize())
    }
}

impl Default for ScreenCamera {
    fn default() -> Self {
        Self::for_aspect(Self::DEFAULT_EYE, 400, 300)
    }
}

/// The `index`-th of `count` evenly spaced samples from `start` to `end`
/// inclusive.
fn linspace(start: f32, end: f32, count: u32, index: u32) -> f32 {
    if count <= 1 {
        return start;
    }
    start + (end - start) * index as f32 / (count - 1) as f32
}
