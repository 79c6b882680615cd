//! Whole-image rendering and output.
//!
//! The tracer itself knows nothing about pixels. This module owns the image:
//! it asks the camera for one primary ray per pixel, traces it, clamps the
//! result and writes PNG files.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use thiserror::Error;

use crate::camera::ScreenCamera;
use crate::tracer::{trace_with_depth, DEFAULT_MAX_DEPTH};
use lumo_core::{Color, Scene};
use lumo_math::Interval;

/// Largest accepted image edge in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Errors from image allocation and output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },

    #[error("Image size {width}x{height} exceeds the {max}x{max} limit")]
    TooLarge { width: u32, height: u32, max: u32 },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum number of bounces per pixel
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Clamp a color to [0, 1] per channel and convert to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Color of a single pixel. Rays that hit nothing are black.
pub fn render_pixel(
    scene: &Scene,
    camera: &ScreenCamera,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.get_ray(x, y, config.width, config.height);
    trace_with_depth(ray.origin, ray.direction, scene, config.max_depth).unwrap_or(Color::ZERO)
}

/// Row-major color buffer, row 0 at the top.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Allocate a black image.
    ///
    /// Fails when either edge is larger than [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let too_large = RenderError::TooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        };
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(too_large);
        }
        let len = (width as usize).checked_mul(height as usize).ok_or(too_large)?;

        Ok(Self {
            width,
            height,
            pixels: vec![Color::ZERO; len],
        })
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Convert to clamped 8-bit RGB bytes, row-major from the top.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|color| color_to_rgb(*color)).collect()
    }

    /// Encode as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let image = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8()).ok_or(
            RenderError::BufferSize {
                width: self.width,
                height: self.height,
            },
        )?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

/// Render the entire scene, scanlines in parallel.
///
/// Pixels are independent; workers only read the scene and each owns the
/// row it writes.
pub fn render(
    scene: &Scene,
    camera: &ScreenCamera,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    let mut image = ImageBuffer::new(config.width, config.height)?;
    if image.pixels.is_empty() {
        return Ok(image);
    }

    let start = Instant::now();
    let rows = config.height as usize;
    let report_every = (rows / 10).max(1);
    let done = AtomicUsize::new(0);

    log::info!(
        "Rendering {}x{}, max depth {}",
        config.width,
        config.height,
        config.max_depth
    );

    image
        .pixels
        .par_chunks_mut(config.width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(scene, camera, x as u32, y as u32, config);
            }

            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            if finished % report_every == 0 || finished == rows {
                log::info!("{:.0}%", finished as f32 / rows as f32 * 100.0);
            }
        });

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
