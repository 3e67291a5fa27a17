use crate::coords::Vec2;
use crate::paint::Color;

use super::{Shape, ShapeKind};

/// Immutable brush snapshot applied when a shape is placed.
///
/// The host owns the live controls and hands a fresh snapshot to each
/// placement, so later control changes never reach shapes already placed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BrushSettings {
    pub kind: ShapeKind,
    pub color: Color,
    /// Device pixels.
    pub size: f32,
    /// Circle slice count or star point count.
    pub segments: i32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Point,
            color: Color::white(),
            size: 10.0,
            segments: 12,
        }
    }
}

impl BrushSettings {
    #[inline]
    pub fn new(kind: ShapeKind, color: Color, size: f32, segments: i32) -> Self {
        Self { kind, color, size, segments }
    }

    #[inline]
    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn with_segments(mut self, segments: i32) -> Self {
        self.segments = segments;
        self
    }

    /// Creates a shape at `position` (rendering space) from this snapshot.
    pub fn place(&self, position: Vec2) -> Shape {
        let Self { kind, color, size, segments } = *self;
        match kind {
            ShapeKind::Point => Shape::point(position, color, size),
            ShapeKind::Triangle => Shape::triangle(position, color, size),
            ShapeKind::Circle => Shape::circle(position, color, size, segments),
            ShapeKind::Star => Shape::star(position, color, size, segments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_copies_every_setting() {
        let brush = BrushSettings::new(ShapeKind::Circle, Color::rgb(0.2, 0.4, 0.6), 33.0, 7);
        let shape = brush.place(Vec2::new(0.5, -0.5));
        assert_eq!(
            shape,
            Shape::circle(Vec2::new(0.5, -0.5), Color::rgb(0.2, 0.4, 0.6), 33.0, 7)
        );
    }

    #[test]
    fn star_takes_segments_as_points() {
        let brush = BrushSettings::default().with_kind(ShapeKind::Star).with_segments(9);
        assert_eq!(
            brush.place(Vec2::zero()),
            Shape::star(Vec2::zero(), Color::white(), 10.0, 9)
        );
    }

    #[test]
    fn placed_shape_is_unaffected_by_later_brush_changes() {
        let mut brush = BrushSettings::default().with_kind(ShapeKind::Triangle);
        let shape = brush.place(Vec2::zero());

        brush = brush.with_color(Color::black()).with_size(99.0).with_kind(ShapeKind::Star);

        assert_eq!(shape.color(), Color::white());
        assert_eq!(shape.size(), 10.0);
        assert_eq!(shape.kind(), ShapeKind::Triangle);
        assert_eq!(brush.kind, ShapeKind::Star);
    }
}
