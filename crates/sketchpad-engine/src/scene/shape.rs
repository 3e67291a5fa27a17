use crate::coords::Vec2;
use crate::paint::Color;

use super::mesh;
use super::Primitive;

/// Default half canvas extent in device pixels (half of a 400 px canvas).
///
/// Shape sizes are divided by this to enter rendering space.
pub const DEFAULT_HALF_EXTENT: f32 = 200.0;

/// Brush shape selector.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    /// Square point sprite.
    #[default]
    Point,
    Triangle,
    Circle,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] =
        [ShapeKind::Point, ShapeKind::Triangle, ShapeKind::Circle, ShapeKind::Star];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Star => "star",
        }
    }
}

/// A placed shape.
///
/// `position` is in rendering space; `size` is in device pixels. Counts are
/// stored exactly as supplied, including zero or negative values; they are
/// floored only when the shape is expanded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Point { position: Vec2, color: Color, size: f32 },
    Triangle { position: Vec2, color: Color, size: f32 },
    Circle { position: Vec2, color: Color, size: f32, segments: i32 },
    Star { position: Vec2, color: Color, size: f32, points: i32 },
}

impl Shape {
    #[inline]
    pub fn point(position: Vec2, color: Color, size: f32) -> Self {
        Shape::Point { position, color, size }
    }

    #[inline]
    pub fn triangle(position: Vec2, color: Color, size: f32) -> Self {
        Shape::Triangle { position, color, size }
    }

    #[inline]
    pub fn circle(position: Vec2, color: Color, size: f32, segments: i32) -> Self {
        Shape::Circle { position, color, size, segments }
    }

    #[inline]
    pub fn star(position: Vec2, color: Color, size: f32, points: i32) -> Self {
        Shape::Star { position, color, size, points }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point { .. } => ShapeKind::Point,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Star { .. } => ShapeKind::Star,
        }
    }

    pub fn position(&self) -> Vec2 {
        match *self {
            Shape::Point { position, .. }
            | Shape::Triangle { position, .. }
            | Shape::Circle { position, .. }
            | Shape::Star { position, .. } => position,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Shape::Point { color, .. }
            | Shape::Triangle { color, .. }
            | Shape::Circle { color, .. }
            | Shape::Star { color, .. } => color,
        }
    }

    pub fn size(&self) -> f32 {
        match *self {
            Shape::Point { size, .. }
            | Shape::Triangle { size, .. }
            | Shape::Circle { size, .. }
            | Shape::Star { size, .. } => size,
        }
    }
}

/// Expands a shape into its drawable primitive.
///
/// `half_extent` converts pixel sizes into rendering-space radii
/// (`size / half_extent`). Points keep their pixel size; the rasterizer
/// sizes them on screen.
pub fn expand(shape: &Shape, half_extent: f32) -> Primitive {
    match *shape {
        Shape::Point { position, color, size } => Primitive::Point { position, color, size },

        Shape::Triangle { position, color, size } => Primitive::Triangles {
            vertices: mesh::isoceles(position, size / half_extent).to_vec(),
            color,
        },

        Shape::Circle { position, color, size, segments } => Primitive::Triangles {
            vertices: mesh::circle_fan(position, size / half_extent, segments),
            color,
        },

        Shape::Star { position, color, size, points } => Primitive::Triangles {
            vertices: mesh::star_fan(position, size / half_extent, points),
            color,
        },
    }
}
