use wgpu::util::DeviceExt;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::mesh::{flatten, point_quad};

use super::common::{
    fill_ubo_min_binding_size, position_layout, to_wgpu_color, FillUniform, VERTEX_STRIDE,
};
use super::rasterizer::{check_triangle_data, DrawError, Rasterizer};

/// Cached wgpu pipeline for solid-color triangle fills.
///
/// The pipeline is rebuilt only when the surface format changes. Per-draw
/// resources (vertex buffer, color uniform) are created by [`GpuRasterizer`]
/// for each draw and dropped right after it.
pub struct FillPipeline {
    background: Color,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
}

impl Default for FillPipeline {
    fn default() -> Self {
        Self::new(Color::black())
    }
}

impl FillPipeline {
    /// Creates a pipeline cache that clears frames to `background`.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
        }
    }

    /// Prepares the pipeline for `ctx` and returns a rasterizer recording into `target`.
    pub fn begin<'a, 't>(
        &'a mut self,
        ctx: &'a RenderCtx<'a>,
        target: &'a mut RenderTarget<'t>,
    ) -> GpuRasterizer<'a, 't> {
        self.ensure_pipeline(ctx);

        GpuRasterizer {
            fill: self,
            ctx,
            target,
            color: Color::white(),
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        log::debug!("building fill pipeline for {:?}", ctx.surface_format);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sketchpad fill shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/fill.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("sketchpad fill bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(fill_ubo_min_binding_size()),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("sketchpad fill pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sketchpad fill pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[position_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // Later draws overwrite earlier ones; no depth, no blending.
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
    }
}

/// Per-frame wgpu [`Rasterizer`].
///
/// Every draw records its own render pass that loads the previous contents,
/// so draws composite in call order (painter's algorithm).
pub struct GpuRasterizer<'a, 't> {
    fill: &'a FillPipeline,
    ctx: &'a RenderCtx<'a>,
    target: &'a mut RenderTarget<'t>,

    color: Color,
}

impl GpuRasterizer<'_, '_> {
    fn vertex_buffer(&self, vertices: &[f32]) -> Result<wgpu::Buffer, DrawError> {
        let bytes = std::mem::size_of_val(vertices) as u64;
        if bytes > self.ctx.device.limits().max_buffer_size {
            return Err(DrawError::BufferAllocation { bytes });
        }

        Ok(self.ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sketchpad vertex buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }))
    }

    /// Uploads `vertices` and records one pass drawing them with the current color.
    fn draw(&mut self, vertices: &[f32]) -> Result<(), DrawError> {
        let (Some(pipeline), Some(bgl)) =
            (self.fill.pipeline.as_ref(), self.fill.bind_group_layout.as_ref())
        else {
            return Err(DrawError::PipelineUnavailable);
        };

        let vbo = self.vertex_buffer(vertices)?;
        let vertex_count = (vbo.size() / VERTEX_STRIDE) as u32;

        let ubo = self.ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sketchpad fill ubo"),
            contents: bytemuck::bytes_of(&FillUniform::new(self.color)),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group = self.ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sketchpad fill bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        let mut rpass = self.target.pass("sketchpad fill pass", wgpu::LoadOp::Load);

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..vertex_count, 0..1);

        Ok(())
    }
}

impl Rasterizer for GpuRasterizer<'_, '_> {
    fn clear_frame(&mut self) {
        let clear = wgpu::LoadOp::Clear(to_wgpu_color(self.fill.background));
        let _rpass = self.target.pass("sketchpad clear", clear);
    }

    fn set_uniform_color(&mut self, color: Color) {
        self.color = color;
    }

    // Points are quads sized per call in `draw_single_point`.
    fn set_point_size(&mut self, _size: f32) {}

    fn upload_and_draw_triangles(
        &mut self,
        vertices: &[f32],
        triangle_count: usize,
    ) -> Result<(), DrawError> {
        check_triangle_data(vertices, triangle_count)?;
        self.draw(vertices)
    }

    fn draw_single_point(
        &mut self,
        position: Vec2,
        color: Color,
        size: f32,
    ) -> Result<(), DrawError> {
        // wgpu point primitives are always one pixel wide, so the square is
        // drawn as two triangles covering `size` x `size` logical pixels.
        let (half_w, half_h) = self
            .ctx
            .viewport
            .point_half_extents(size)
            .ok_or(DrawError::EmptyGeometry)?;

        self.color = color;
        self.draw(&flatten(&point_quad(position, half_w, half_h)))
    }
}
