use crate::coords::Vec2;
use crate::paint::Color;

/// Drawable output of shape expansion.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A single point drawn as a screen-space square of `size` device pixels.
    Point { position: Vec2, color: Color, size: f32 },
    /// Solid triangles; every three consecutive vertices form one triangle.
    Triangles { vertices: Vec<Vec2>, color: Color },
}

impl Primitive {
    /// Number of triangles; `0` for points.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        match self {
            Primitive::Point { .. } => 0,
            Primitive::Triangles { vertices, .. } => vertices.len() / 3,
        }
    }
}
