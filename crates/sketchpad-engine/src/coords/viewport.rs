/// Canvas size in pixels.
///
/// Used both as the coordinate basis for pointer mapping and for sizing
/// pixel-based primitives (points) in rendering space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Half of each dimension, i.e. the pixel distance from the center to an edge.
    #[inline]
    pub fn half(self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Rendering-space half width and half height of a square `size` pixels
    /// across.
    ///
    /// `None` when either the square or the canvas has no area.
    pub fn point_half_extents(self, size: f32) -> Option<(f32, f32)> {
        if !(size > 0.0) || !self.is_valid() {
            return None;
        }
        Some((size / self.width, size / self.height))
    }
}
