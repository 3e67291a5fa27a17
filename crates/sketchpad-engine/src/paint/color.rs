/// Straight-alpha RGBA color.
///
/// Channels are nominally in `[0, 1]`. `Color::new` stores values as given;
/// coercion of user input happens in [`Color::from_percent`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Opaque color from slider levels given in percent (`0`–`100`).
    ///
    /// Each level goes through [`percent_to_unit`], so garbage input yields a
    /// valid color instead of an error.
    #[inline]
    pub fn from_percent(r: f32, g: f32, b: f32) -> Self {
        Self::rgb(percent_to_unit(r), percent_to_unit(g), percent_to_unit(b))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Converts a percentage into a `[0, 1]` channel value.
///
/// Non-finite input maps to `0.0`; everything else is clamped.
#[inline]
pub fn percent_to_unit(pct: f32) -> f32 {
    if !pct.is_finite() {
        return 0.0;
    }
    (pct / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── percent_to_unit ───────────────────────────────────────────────────

    #[test]
    fn percent_scales_into_unit_range() {
        assert_eq!(percent_to_unit(0.0), 0.0);
        assert_eq!(percent_to_unit(50.0), 0.5);
        assert_eq!(percent_to_unit(100.0), 1.0);
    }

    #[test]
    fn percent_out_of_range_is_clamped() {
        assert_eq!(percent_to_unit(-20.0), 0.0);
        assert_eq!(percent_to_unit(250.0), 1.0);
    }

    #[test]
    fn percent_non_finite_becomes_zero() {
        assert_eq!(percent_to_unit(f32::NAN), 0.0);
        assert_eq!(percent_to_unit(f32::INFINITY), 0.0);
        assert_eq!(percent_to_unit(f32::NEG_INFINITY), 0.0);
    }

    // ── Color ─────────────────────────────────────────────────────────────

    #[test]
    fn from_percent_is_opaque() {
        let c = Color::from_percent(100.0, 0.0, 50.0);
        assert_eq!(c, Color::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn new_stores_channels_as_given() {
        let c = Color::new(1.5, -0.25, 0.0, 0.5);
        assert_eq!(c.to_array(), [1.5, -0.25, 0.0, 0.5]);
    }
}
