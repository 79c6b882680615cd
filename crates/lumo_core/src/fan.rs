//! Triangulated fan construction from an ordered boundary.
//!
//! The fan starts with a seed triangle over the first three points. Every later
//! point is joined to its two nearest predecessors, scanning all of them, not
//! just its neighbours along the boundary. The result is greedy and depends on
//! point order; it is not a Delaunay triangulation.

use rand::{Rng, RngCore};
use thiserror::Error;

use crate::color::Color;
use crate::primitive::Primitive;
use lumo_math::Vec3;

/// Errors from fan construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FanError {
    #[error("A fan needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("Fan palette is empty")]
    EmptyPalette,
}

/// Color of the seed triangle when none is given.
pub const DEFAULT_FAN_SEED_COLOR: Color = Color::new(0.0, 0.0, 2.0);

/// Fill colors drawn for every triangle after the seed.
pub const DEFAULT_PALETTE: [Color; 6] = [
    Color::new(1.0, 0.0, 0.0),
    Color::new(1.0, 1.0, 0.0),
    Color::new(0.0, 1.0, 0.0),
    Color::new(0.0, 1.0, 1.0),
    Color::new(0.0, 0.0, 1.0),
    Color::new(1.0, 0.0, 1.0),
];

/// Indices of the nearest and second-nearest of `candidates` to `target`.
///
/// Single pass with strict `<`, so the first of equally distant points wins.
fn nearest_two(candidates: &[Vec3], target: Vec3) -> (usize, usize) {
    let mut nearest = (f32::INFINITY, 0);
    let mut second = (f32::INFINITY, 0);

    for (index, point) in candidates.iter().enumerate() {
        let distance = target.distance(*point);
        if distance < nearest.0 {
            second = nearest;
            nearest = (distance, index);
        } else if distance < second.0 {
            second = (distance, index);
        }
    }

    (nearest.1, second.1)
}

/// Vertex index triples of the fan over `points`, seed triangle first.
///
/// For point `i >= 3` with nearest `d1` and second-nearest `d2` among
/// `points[..i]`, odd `i` yields `(i, d2, d1)` and even `i` yields
/// `(d1, d2, i)`, which keeps the winding consistent as the fan zig-zags.
pub fn fan_topology(points: &[Vec3]) -> Result<Vec<[usize; 3]>, FanError> {
    if points.len() < 3 {
        return Err(FanError::TooFewPoints {
            count: points.len(),
        });
    }

    let mut triples = Vec::with_capacity(points.len() - 2);
    triples.push([0, 1, 2]);

    for i in 3..points.len() {
        let (d1, d2) = nearest_two(&points[..i], points[i]);
        let triple = if i % 2 == 1 { [i, d2, d1] } else { [d1, d2, i] };
        triples.push(triple);
    }

    Ok(triples)
}

/// Build the fan with [`DEFAULT_FAN_SEED_COLOR`] for the seed triangle.
pub fn build_fan(
    points: &[Vec3],
    palette: &[Color],
    rng: &mut dyn RngCore,
) -> Result<Vec<Primitive>, FanError> {
    build_fan_seeded(points, DEFAULT_FAN_SEED_COLOR, palette, rng)
}

/// Build the fan as triangle primitives.
///
/// The seed triangle gets `seed_color`; every other triangle gets a color drawn
/// uniformly from `palette`. The random draw only affects colors, never which
/// vertices are joined or their order.
pub fn build_fan_seeded(
    points: &[Vec3],
    seed_color: Color,
    palette: &[Color],
    rng: &mut dyn RngCore,
) -> Result<Vec<Primitive>, FanError> {
    if palette.is_empty() {
        return Err(FanError::EmptyPalette);
    }

    let triples = fan_topology(points)?;
    let mut triangles = Vec::with_capacity(triples.len());

    for (n, [a, b, c]) in triples.into_iter().enumerate() {
        let color = if n == 0 {
            seed_color
        } else {
            palette[rng.gen_range(0..palette.len())]
        };
        log::debug!("Fan triangle {}: ({}, {}, {})", n, a, b, c);
        triangles.push(Primitive::triangle([points[a], points[b], points[c]], color));
    }

    Ok(triangles)
}
