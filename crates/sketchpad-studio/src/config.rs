use sketchpad_engine::coords::Viewport;
use sketchpad_engine::paint::Color;
use sketchpad_engine::scene::DEFAULT_HALF_EXTENT;
use sketchpad_engine::window::RuntimeConfig;

/// Window settings for the studio.
///
/// The canvas is a fixed 400×400 window: shape radii are scaled by one half
/// extent for both axes, so a non-square canvas would stretch circles into
/// ellipses.
pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        resizable: false,
        ..RuntimeConfig::default()
    }
}

/// Canvas configuration for the studio host.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Fixed pixels-per-unit divisor for shape sizes. When `None` (or not a
    /// positive finite number), half the canvas width is used.
    pub half_extent: Option<f32>,

    /// Color every frame is cleared to.
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            half_extent: None,
            background: Color::black(),
        }
    }
}

impl CanvasConfig {
    /// Resolves the half extent for a canvas of the given size.
    ///
    /// Falls back to `DEFAULT_HALF_EXTENT` while the canvas has no area
    /// (e.g. minimized windows).
    pub fn half_extent_for(&self, canvas: Viewport) -> f32 {
        match self.half_extent {
            Some(fixed) if fixed.is_finite() && fixed > 0.0 => fixed,
            Some(bad) => {
                log::warn!("half extent override {bad} is not usable; deriving from canvas");
                derived_half_extent(canvas)
            }
            None => derived_half_extent(canvas),
        }
    }
}

fn derived_half_extent(canvas: Viewport) -> f32 {
    if canvas.is_valid() {
        canvas.width / 2.0
    } else {
        DEFAULT_HALF_EXTENT
    }
}
