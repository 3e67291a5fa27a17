//! Rendering subsystem.
//!
//! The scene talks to the graphics backend only through the [`Rasterizer`]
//! trait. [`FillPipeline`] is the wgpu implementation: it owns the cached
//! pipeline and hands out a per-frame [`GpuRasterizer`].
//!
//! Convention:
//! - vertex data arrives in rendering space (NDC), so shaders pass it through
//! - point sizes are logical pixels, converted with the frame viewport

mod common;
mod ctx;
mod gpu;
mod rasterizer;

pub use ctx::{RenderCtx, RenderTarget};
pub use gpu::{FillPipeline, GpuRasterizer};
pub use rasterizer::{check_triangle_data, DrawError, Rasterizer};
