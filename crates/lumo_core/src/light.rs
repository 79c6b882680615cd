//! Point lights.

use crate::color::Color;
use crate::scene::{SceneError, SceneResult};
use lumo_math::Vec3;

/// Point lights stored as two parallel lists.
///
/// `positions[i]` is lit with `colors[i]`; the lists always have equal length.
/// Color components may exceed 1.0 to make a light brighter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lights {
    positions: Vec<Vec3>,
    colors: Vec<Color>,
}

impl Lights {
    /// Pair up positions and colors. Fails if the lists differ in length.
    pub fn new(positions: Vec<Vec3>, colors: Vec<Color>) -> SceneResult<Self> {
        if positions.len() != colors.len() {
            return Err(SceneError::LightCountMismatch {
                positions: positions.len(),
                colors: colors.len(),
            });
        }
        Ok(Self { positions, colors })
    }

    /// Add a single light.
    pub fn push(&mut self, position: Vec3, color: Color) {
        self.positions.push(position);
        self.colors.push(color);
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate `(position, color)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, Color)> + '_ {
        self.positions.iter().copied().zip(self.colors.iter().copied())
    }
}
