use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::common::{GrowableBuffer, PipelineDesc, UniformBinding, load_pass, solid_pipeline};

/// One mesh to draw: local-space vertices, a triangle index list, and the
/// matrices the caller used for hit-testing this frame.
#[derive(Debug, Copy, Clone)]
pub struct MeshDraw<'a> {
    pub vertices: &'a [Vec3],
    pub indices: &'a [u16],
    /// Model-view-projection; must be the same matrix the drag controller saw.
    pub mvp: Mat4,
    /// Model-view, used for face shading only.
    pub model_view: Mat4,
    pub color: Color,
    /// Depth comparison on/off. Ignored when the target has no depth attachment.
    pub depth_test: bool,
}

/// Draws single-color meshes, one draw call per mesh.
///
/// Pipelines are cached per (surface format, depth format, depth test) so the
/// cuboid demo can flip depth testing every frame without rebuilding state.
#[derive(Default)]
pub struct MeshRenderer {
    uniform: Option<UniformBinding>,
    pipelines: Vec<(PipelineKey, wgpu::RenderPipeline)>,

    vbo: Option<GrowableBuffer>,
    ibo: Option<GrowableBuffer>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct PipelineKey {
    color_format: wgpu::TextureFormat,
    depth: Option<(wgpu::TextureFormat, bool)>,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, mesh: &MeshDraw<'_>) {
        let index_count = mesh.indices.len() - mesh.indices.len() % 3;
        if mesh.vertices.is_empty() || index_count == 0 {
            return;
        }

        let key = PipelineKey {
            color_format: ctx.surface_format,
            depth: target.depth.map(|d| (d.format, mesh.depth_test)),
        };
        let pipeline_index = self.prepare(ctx, key);

        let Some(uniform) = self.uniform.as_ref() else { return };
        let data = MeshUniform {
            mvp: mesh.mvp.to_cols_array_2d(),
            model_view: mesh.model_view.to_cols_array_2d(),
            color: mesh.color.to_array(),
        };
        ctx.queue.write_buffer(&uniform.buffer, 0, bytemuck::bytes_of(&data));

        let vertices: Vec<[f32; 3]> = mesh.vertices.iter().map(|v| v.to_array()).collect();
        let vbo = self
            .vbo
            .get_or_insert_with(|| GrowableBuffer::new("dragkit mesh vbo", wgpu::BufferUsages::VERTEX));
        let ibo = self
            .ibo
            .get_or_insert_with(|| GrowableBuffer::new("dragkit mesh ibo", wgpu::BufferUsages::INDEX));
        if !vbo.write(ctx.device, ctx.queue, bytemuck::cast_slice(&vertices))
            || !ibo.write(ctx.device, ctx.queue, bytemuck::cast_slice(&mesh.indices[..index_count]))
        {
            return;
        }

        let (Some((_, pipeline)), Some(vbo), Some(ibo)) =
            (self.pipelines.get(pipeline_index), vbo.get(), ibo.get())
        else {
            return;
        };

        let mut rpass = load_pass(target.encoder, target.color_view, target.depth, "dragkit mesh pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &uniform.bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..index_count as u32, 0, 0..1);
    }

    /// Creates the uniform binding on first use and returns the index of the
    /// pipeline for `key`, building it if this combination is new.
    fn prepare(&mut self, ctx: &RenderCtx<'_>, key: PipelineKey) -> usize {
        let uniform = self.uniform.get_or_insert_with(|| {
            UniformBinding::new::<MeshUniform>(
                ctx.device,
                "dragkit mesh uniform",
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )
        });

        if let Some(i) = self.pipelines.iter().position(|(k, _)| *k == key) {
            return i;
        }

        log::debug!("building mesh pipeline for {key:?}");

        const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
        let pipeline = solid_pipeline(
            ctx.device,
            PipelineDesc {
                label: "dragkit mesh pipeline",
                wgsl: include_str!("shaders/mesh.wgsl"),
                bind_group_layout: &uniform.layout,
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &ATTRS,
                }],
                color_format: key.color_format,
                depth_stencil: key.depth.map(|(format, test)| depth_state(format, test)),
            },
        );

        self.pipelines.push((key, pipeline));
        self.pipelines.len() - 1
    }
}

/// Depth state for a pass that has a depth attachment. With testing off the
/// mesh neither reads nor writes depth, so draw order decides visibility.
fn depth_state(format: wgpu::TextureFormat, test: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format,
        depth_write_enabled: test,
        depth_compare: if test {
            wgpu::CompareFunction::Less
        } else {
            wgpu::CompareFunction::Always
        },
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshUniform {
    mvp: [[f32; 4]; 4],
    model_view: [[f32; 4]; 4],
    color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_state_follows_toggle() {
        let on = depth_state(wgpu::TextureFormat::Depth32Float, true);
        assert!(on.depth_write_enabled);
        assert_eq!(on.depth_compare, wgpu::CompareFunction::Less);

        let off = depth_state(wgpu::TextureFormat::Depth32Float, false);
        assert!(!off.depth_write_enabled);
        assert_eq!(off.depth_compare, wgpu::CompareFunction::Always);
    }

    #[test]
    fn uniform_layout_matches_wgsl() {
        // mat4x4 + mat4x4 + vec4, no padding needed.
        assert_eq!(std::mem::size_of::<MeshUniform>(), 144);
    }
}
