//! Surface color sources.

use std::fmt;
use std::sync::Arc;

use lumo_math::Vec3;

/// Color type alias (RGB, components may exceed 1.0 for bright lights)
pub type Color = Vec3;

/// Where a surface gets its base color from.
///
/// Most primitives carry a fixed color. Procedural sources are evaluated at the
/// world-space hit point, which is how the ground plane draws its checkerboard.
#[derive(Clone)]
pub enum ColorSource {
    Constant(Color),
    Procedural(Arc<dyn Fn(Vec3) -> Color + Send + Sync>),
}

impl ColorSource {
    /// Wrap a closure as a procedural color.
    pub fn procedural<F>(f: F) -> Self
    where
        F: Fn(Vec3) -> Color + Send + Sync + 'static,
    {
        Self::Procedural(Arc::new(f))
    }

    /// Checkerboard on the XZ plane with squares half a unit wide.
    ///
    /// A point gets `even` when `floor(2x)` and `floor(2z)` share parity,
    /// `odd` otherwise.
    pub fn checkerboard(even: Color, odd: Color) -> Self {
        Self::procedural(move |p| if same_checker_parity(p) { even } else { odd })
    }

    /// Evaluate the color at a world-space point.
    pub fn at(&self, point: Vec3) -> Color {
        match self {
            ColorSource::Constant(color) => *color,
            ColorSource::Procedural(f) => f(point),
        }
    }
}

impl From<Color> for ColorSource {
    fn from(color: Color) -> Self {
        ColorSource::Constant(color)
    }
}

impl fmt::Debug for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSource::Constant(color) => f.debug_tuple("Constant").field(color).finish(),
            ColorSource::Procedural(_) => f.write_str("Procedural(..)"),
        }
    }
}

fn same_checker_parity(p: Vec3) -> bool {
    let x = (p.x * 2.0).floor().rem_euclid(2.0);
    let z = (p.z * 2.0).floor().rem_euclid(2.0);
    x == z
}
