//! Coordinate and geometry types shared by the scene, renderers and host.
//!
//! Two spaces are in play:
//! - Device space: logical pixels, origin top-left, +X right, +Y down.
//!   Pointer events and the canvas rectangle live here.
//! - Rendering space: normalized `[-1, 1]` on both axes, origin at the canvas
//!   center, +Y up. Shapes are positioned in this space and rasterizers
//!   consume it directly.

mod mapper;
mod rect;
mod vec2;
mod viewport;

pub use mapper::to_render_space;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
