//! Sketchpad engine crate.
//!
//! Retained shape scene, mesh generation and the wgpu/winit runtime that
//! draws it.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
