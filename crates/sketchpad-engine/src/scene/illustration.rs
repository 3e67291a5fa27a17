//! Static illustration: a cat face built from solid triangles.

use crate::coords::Vec2;
use crate::paint::Color;

/// A triangle already in rendering space, drawn without expansion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleRecord {
    pub vertices: [Vec2; 3],
    pub color: Color,
}

impl TriangleRecord {
    #[inline]
    pub const fn new(vertices: [Vec2; 3], color: Color) -> Self {
        Self { vertices, color }
    }
}

const OUTLINE: Color = Color::rgb(0.05, 0.05, 0.05);
const FACE: Color = Color::rgb(0.75, 0.78, 0.85);
const EYE: Color = Color::rgb(0.90, 0.95, 1.00);
const PUPIL: Color = Color::rgb(0.05, 0.05, 0.05);
const NOSE: Color = Color::rgb(0.95, 0.55, 0.65);
const TOOTH: Color = Color::rgb(0.95, 0.95, 0.95);

/// `(x1, y1, x2, y2, x3, y3, color)` in paint order.
#[rustfmt::skip]
const CAT_FACE: [(f32, f32, f32, f32, f32, f32, Color); 25] = [
    // left ear
    (-0.75,  0.55, -0.45,  0.55, -0.60,  0.88, FACE),
    (-0.68,  0.58, -0.52,  0.58, -0.60,  0.74, OUTLINE),
    (-0.86,  0.42, -0.62,  0.42, -0.75,  0.55, FACE),
    (-0.58,  0.42, -0.34,  0.42, -0.45,  0.55, FACE),
    // right ear
    ( 0.45,  0.55,  0.75,  0.55,  0.60,  0.88, FACE),
    ( 0.52,  0.58,  0.68,  0.58,  0.60,  0.74, OUTLINE),
    ( 0.62,  0.42,  0.86,  0.42,  0.75,  0.55, FACE),
    ( 0.34,  0.42,  0.58,  0.42,  0.45,  0.55, FACE),
    // left eye
    (-0.55,  0.10, -0.25,  0.10, -0.40,  0.32, EYE),
    (-0.58, -0.08, -0.40,  0.10, -0.70,  0.10, EYE),
    (-0.22, -0.08, -0.10,  0.10, -0.40,  0.10, EYE),
    (-0.43,  0.07, -0.37,  0.07, -0.40,  0.16, PUPIL),
    // right eye
    ( 0.25,  0.10,  0.55,  0.10,  0.40,  0.32, EYE),
    ( 0.10,  0.10,  0.40,  0.10,  0.22, -0.08, EYE),
    ( 0.40,  0.10,  0.70,  0.10,  0.58, -0.08, EYE),
    ( 0.37,  0.07,  0.43,  0.07,  0.40,  0.16, PUPIL),
    // nose and cheeks
    (-0.06, -0.05,  0.06, -0.05,  0.00, -0.16, NOSE),
    (-0.35, -0.10,  0.00, -0.16, -0.55, -0.32, FACE),
    ( 0.35, -0.10,  0.55, -0.32,  0.00, -0.16, FACE),
    // teeth
    (-0.42, -0.52, -0.30, -0.52, -0.36, -0.40, TOOTH),
    (-0.30, -0.52, -0.18, -0.52, -0.24, -0.40, TOOTH),
    (-0.12, -0.52,  0.00, -0.52, -0.06, -0.40, TOOTH),
    ( 0.06, -0.52,  0.18, -0.52,  0.12, -0.40, TOOTH),
    ( 0.24, -0.52,  0.36, -0.52,  0.30, -0.40, TOOTH),
    // chin
    (-0.65, -0.30,  0.65, -0.30,  0.00, -0.75, FACE),
];

/// The cat face illustration in paint order.
pub fn cat_face() -> Vec<TriangleRecord> {
    CAT_FACE
        .iter()
        .map(|&(x1, y1, x2, y2, x3, y3, color)| {
            TriangleRecord::new([Vec2::new(x1, y1), Vec2::new(x2, y2), Vec2::new(x3, y3)], color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cat_face_is_fixed_and_non_empty() {
        let face = cat_face();
        assert_eq!(face.len(), 25);
        assert_eq!(face, cat_face());
    }

    #[test]
    fn cat_face_stays_on_canvas() {
        for tri in cat_face() {
            for v in tri.vertices {
                assert!(v.x.abs() <= 1.0 && v.y.abs() <= 1.0, "{v:?}");
            }
            assert_eq!(tri.color.a, 1.0);
        }
    }

    #[test]
    fn cat_face_is_mirrored_left_to_right() {
        let face = cat_face();
        let left_ear_tip = face[0].vertices[2];
        let right_ear_tip = face[4].vertices[2];
        assert_eq!(left_ear_tip.x, -right_ear_tip.x);
        assert_eq!(left_ear_tip.y, right_ear_tip.y);
    }

    #[test]
    fn chin_is_painted_last() {
        let face = cat_face();
        let chin = face[face.len() - 1];
        assert_eq!(chin.vertices[2], Vec2::new(0.0, -0.75));
        assert_eq!(chin.color, FACE);
    }
}
