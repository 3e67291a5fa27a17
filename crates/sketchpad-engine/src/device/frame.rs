/// One acquired swapchain frame.
///
/// Consumed by [`Gpu::submit`](super::Gpu::submit), which presents it; holding
/// it blocks acquisition of the next frame.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
