//! Shared GPU types for the fill pipeline.

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

// ── fill uniform ──────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct FillUniform {
    pub color: [f32; 4],
}

impl FillUniform {
    #[inline]
    pub(super) fn new(color: Color) -> Self {
        Self { color: color.to_array() }
    }
}

/// Returns the `wgpu` minimum binding size for the fill uniform buffer.
///
/// `FillUniform` is a `[f32; 4]` (16 bytes) so its size is always non-zero.
pub(super) fn fill_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<FillUniform>() as u64)
        .expect("FillUniform has non-zero size by construction")
}

// ── vertex layout ─────────────────────────────────────────────────────────

/// Bytes per vertex: interleaved `x, y` as `f32`.
pub(super) const VERTEX_STRIDE: u64 = 2 * std::mem::size_of::<f32>() as u64;

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

pub(super) fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

// ── clear color ───────────────────────────────────────────────────────────

#[inline]
pub(super) fn to_wgpu_color(c: Color) -> wgpu::Color {
    wgpu::Color {
        r: c.r as f64,
        g: c.g as f64,
        b: c.b as f64,
        a: c.a as f64,
    }
}
