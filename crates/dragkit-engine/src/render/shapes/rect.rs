use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    GrowableBuffer, PipelineDesc, QUAD_INDICES, QUAD_VERTICES, QuadVertex, UniformBinding, ViewportUniform,
    load_pass, snap_to_physical, solid_pipeline,
};

/// Instanced solid-rect renderer for the control panel.
///
/// Geometry is in logical pixels, converted to NDC in the vertex shader using
/// the viewport uniform. Colors are linear premultiplied RGBA. Rects ignore
/// depth and always land on top of whatever is already drawn.
#[derive(Default)]
pub struct RectRenderer {
    pipeline: Option<(wgpu::TextureFormat, wgpu::RenderPipeline)>,
    viewport: Option<UniformBinding>,
    quad: Option<(wgpu::Buffer, wgpu::Buffer)>,

    instances: Vec<RectInstance>,
    instance_vbo: Option<GrowableBuffer>,
}

impl RectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws every rect in `draw_list`, back to front, over the current target.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &mut DrawList) {
        self.instances.clear();
        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Rect(cmd) = &item.cmd;
            let r = snap_to_physical(cmd.rect.normalized(), ctx.scale_factor);
            if r.is_empty() {
                continue;
            }
            self.instances.push(RectInstance {
                origin: r.origin.to_array(),
                size: r.size.to_array(),
                color: cmd.color.to_array(),
            });
        }
        if self.instances.is_empty() {
            return;
        }

        self.prepare(ctx);

        let instance_vbo = self
            .instance_vbo
            .get_or_insert_with(|| GrowableBuffer::new("dragkit rect instances", wgpu::BufferUsages::VERTEX));
        if !instance_vbo.write(ctx.device, ctx.queue, bytemuck::cast_slice(&self.instances)) {
            return;
        }

        let (Some((_, pipeline)), Some(viewport), Some((quad_vbo, quad_ibo)), Some(instance_vbo)) = (
            self.pipeline.as_ref(),
            self.viewport.as_ref(),
            self.quad.as_ref(),
            instance_vbo.get(),
        ) else {
            return;
        };

        let mut rpass = load_pass(target.encoder, target.color_view, None, "dragkit rect pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &viewport.bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..self.instances.len() as u32);
    }

    /// Creates GPU state on first use (and the pipeline again if the surface
    /// format changed), then uploads the viewport.
    fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        let viewport = self.viewport.get_or_insert_with(|| {
            UniformBinding::new::<ViewportUniform>(ctx.device, "dragkit rect viewport", wgpu::ShaderStages::VERTEX)
        });

        let u = ViewportUniform {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(&viewport.buffer, 0, bytemuck::bytes_of(&u));

        if self.pipeline.as_ref().map(|(format, _)| *format) != Some(ctx.surface_format) {
            let pipeline = solid_pipeline(
                ctx.device,
                PipelineDesc {
                    label: "dragkit rect pipeline",
                    wgsl: include_str!("shaders/rect.wgsl"),
                    bind_group_layout: &viewport.layout,
                    buffers: &[QuadVertex::layout(), RectInstance::layout()],
                    color_format: ctx.surface_format,
                    depth_stencil: None,
                },
            );
            self.pipeline = Some((ctx.surface_format, pipeline));
        }

        if self.quad.is_none() {
            let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("dragkit rect quad vbo"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("dragkit rect quad ibo"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });
            self.quad = Some((vbo, ibo));
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct RectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
