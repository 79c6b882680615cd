//! The `Primitive` union and the `Geometry` interface shared by all shapes.

use crate::color::{Color, ColorSource};
use crate::plane::Plane;
use crate::sphere::Sphere;
use crate::surface::Surface;
use crate::triangle::Triangle;
use lumo_math::{Ray, Vec3};

/// Below this |D.N| a ray is treated as parallel to a plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Ray intersection and normal queries.
///
/// Implementations are pure: the same ray against the same shape always
/// gives bit-identical results.
pub trait Geometry {
    /// Distance along the ray to the nearest hit at or in front of the origin.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Surface normal at a point on the shape. Not necessarily unit length.
    fn normal_at(&self, point: Vec3) -> Vec3;
}

/// The closed set of shapes lumo can render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Geometry for Shape {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Shape::Plane(plane) => plane.intersect(ray),
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Triangle(triangle) => triangle.intersect(ray),
        }
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Plane(plane) => plane.normal_at(point),
            Shape::Sphere(sphere) => sphere.normal_at(point),
            Shape::Triangle(triangle) => triangle.normal_at(point),
        }
    }
}

/// A renderable object: a shape plus its surface attributes.
#[derive(Debug, Clone)]
pub struct Primitive {
    pub shape: Shape,
    pub surface: Surface,
}

impl Primitive {
    pub fn new(shape: Shape, surface: Surface) -> Self {
        Self { shape, surface }
    }

    /// Checkerboard ground plane (white/black), diffuse 0.75, specular 0.5,
    /// reflectivity 0.25.
    pub fn plane(position: Vec3, normal: Vec3) -> Self {
        Self::plane_with_color(
            position,
            normal,
            ColorSource::checkerboard(Color::ONE, Color::ZERO),
        )
    }

    /// Plane with the standard plane coefficients and a caller-chosen color.
    pub fn plane_with_color(position: Vec3, normal: Vec3, color: ColorSource) -> Self {
        Self::new(
            Shape::Plane(Plane::new(position, normal)),
            Surface {
                color,
                diffuse: Some(0.75),
                specular: Some(0.5),
                reflectivity: Some(0.25),
            },
        )
    }

    /// Sphere with reflectivity 0.5 and scene-default coefficients.
    pub fn sphere(center: Vec3, radius: f32, color: Color) -> Self {
        Self::new(
            Shape::Sphere(Sphere::new(center, radius)),
            Surface {
                reflectivity: Some(0.5),
                ..Surface::new(color)
            },
        )
    }

    /// Triangle with reflectivity 0.5 and scene-default coefficients.
    pub fn triangle(vertices: [Vec3; 3], color: Color) -> Self {
        Self::new(
            Shape::Triangle(Triangle::new(vertices)),
            Surface {
                reflectivity: Some(0.5),
                ..Surface::new(color)
            },
        )
    }

    pub fn with_diffuse(mut self, diffuse: f32) -> Self {
        self.surface.diffuse = Some(diffuse);
        self
    }

    pub fn with_specular(mut self, specular: f32) -> Self {
        self.surface.specular = Some(specular);
        self
    }

    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.surface.reflectivity = Some(reflectivity);
        self
    }

    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.shape.intersect(ray)
    }

    /// Raw normal from the shape. Triangles return their unnormalized normal.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        self.shape.normal_at(point)
    }

    #[inline]
    pub fn color_at(&self, point: Vec3) -> Color {
        self.surface.color_at(point)
    }

    pub fn diffuse_coefficient(&self, default: f32) -> f32 {
        self.surface.diffuse_or(default)
    }

    pub fn specular_coefficient(&self, default: f32) -> f32 {
        self.surface.specular_or(default)
    }

    pub fn reflectivity(&self) -> f32 {
        self.surface.reflectivity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_defaults() {
        let plane = Primitive::plane(Vec3::new(0.0, -0.5, 0.0), Vec3::Y);
        assert_eq!(plane.diffuse_coefficient(1.0), 0.75);
        assert_eq!(plane.specular_coefficient(1.0), 0.5);
        assert_eq!(plane.reflectivity(), 0.25);
        assert_eq!(plane.color_at(Vec3::new(0.1, -0.5, 0.1)), Color::ONE);
        assert_eq!(plane.color_at(Vec3::new(0.6, -0.5, 0.1)), Color::ZERO);
    }

    #[test]
    fn test_sphere_and_triangle_defaults() {
        let sphere = Primitive::sphere(Vec3::ZERO, 1.0, Color::new(1.0, 0.0, 0.0));
        assert_eq!(sphere.reflectivity(), 0.5);
        assert_eq!(sphere.diffuse_coefficient(1.0), 1.0);
        assert_eq!(sphere.specular_coefficient(0.8), 0.8);
        assert_eq!(sphere.color_at(Vec3::X), Color::new(1.0, 0.0, 0.0));

        let tri = Primitive::triangle([Vec3::ZERO, Vec3::X, Vec3::Y], Color::ONE);
        assert_eq!(tri.reflectivity(), 0.5);
        assert_eq!(tri.normal_at(Vec3::ZERO), Vec3::Z);
    }

    #[test]
    fn test_builder_overrides() {
        let sphere = Primitive::sphere(Vec3::ZERO, 1.0, Color::ONE)
            .with_diffuse(0.2)
            .with_specular(0.1)
            .with_reflectivity(0.0);
        assert_eq!(sphere.diffuse_coefficient(1.0), 0.2);
        assert_eq!(sphere.specular_coefficient(1.0), 0.1);
        assert_eq!(sphere.reflectivity(), 0.0);
    }

    #[test]
    fn test_shape_dispatch() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let sphere = Primitive::sphere(Vec3::ZERO, 1.0, Color::ONE);
        let t = sphere.intersect(&ray).expect("ray should hit");
        assert!((t - 4.0).abs() < 1e-6);

        let n = sphere.normal_at(ray.at(t));
        assert!((n + Vec3::Z).length() < 1e-6);
    }
}
