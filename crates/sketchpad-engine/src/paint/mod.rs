//! Paint model shared between the scene and rasterizers.
//!
//! Shapes are filled with a single solid color; there are no gradients or
//! images. Geometry types remain in `coords`.

pub mod color;

pub use color::{percent_to_unit, Color};
