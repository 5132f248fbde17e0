//! GPU types and helpers shared by the renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;
use crate::render::DepthAttachment;

// ── blend ─────────────────────────────────────────────────────────────────

fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

// ── uniforms ──────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

/// `min_binding_size` for a uniform of type `T`.
pub(super) fn uniform_binding_size<T>() -> Option<wgpu::BufferSize> {
    wgpu::BufferSize::new(std::mem::size_of::<T>() as u64)
}

fn uniform_layout_entry<T>(visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: uniform_binding_size::<T>(),
        },
        count: None,
    }
}

// ── pipelines ─────────────────────────────────────────────────────────────

/// The parts that differ between the solid-color pipelines.
pub(super) struct PipelineDesc<'a> {
    pub label: &'static str,
    pub wgsl: &'static str,
    pub bind_group_layout: &'a wgpu::BindGroupLayout,
    pub buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub color_format: wgpu::TextureFormat,
    pub depth_stencil: Option<wgpu::DepthStencilState>,
}

/// Triangle-list pipeline with `vs_main`/`fs_main` entry points, premultiplied
/// blending and no culling (winding flips under drag rotations).
pub(super) fn solid_pipeline(device: &wgpu::Device, desc: PipelineDesc<'_>) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(desc.label),
        source: wgpu::ShaderSource::Wgsl(desc.wgsl.into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(desc.label),
        bind_group_layouts: &[desc.bind_group_layout],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: desc.buffers,
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.color_format,
                blend: Some(premul_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: desc.depth_stencil,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// A single uniform buffer bound at binding 0, plus its layout.
pub(super) struct UniformBinding {
    pub layout: wgpu::BindGroupLayout,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl UniformBinding {
    pub(super) fn new<T>(device: &wgpu::Device, label: &'static str, visibility: wgpu::ShaderStages) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[uniform_layout_entry::<T>(visibility)],
        });
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<T>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self {
            layout,
            buffer,
            bind_group,
        }
    }
}

// ── unit quad ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── pixel snapping ────────────────────────────────────────────────────────

/// Rounds a logical rect's edges to whole physical pixels.
///
/// Keeps thin panel lines (slider tracks, checkbox borders) crisp at
/// fractional scale factors. Returns the rect in logical px again.
pub(super) fn snap_to_physical(rect: Rect, scale: f32) -> Rect {
    if !(scale > 0.0 && scale.is_finite()) {
        return rect;
    }
    let min = (rect.origin * scale).round() / scale;
    let max = (rect.max() * scale).round() / scale;
    Rect::from_origin_size(min, max - min)
}

// ── buffers ───────────────────────────────────────────────────────────────

/// A GPU buffer that grows to fit whatever is written into it.
///
/// Writes are padded to `COPY_BUFFER_ALIGNMENT`, so odd-length `u16` index
/// lists are fine.
pub(super) struct GrowableBuffer {
    label: &'static str,
    usage: wgpu::BufferUsages,
    buffer: Option<wgpu::Buffer>,
    capacity: u64,
}

impl GrowableBuffer {
    pub(super) fn new(label: &'static str, usage: wgpu::BufferUsages) -> Self {
        Self {
            label,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            buffer: None,
            capacity: 0,
        }
    }

    /// Uploads `bytes`, reallocating if needed. Returns `false` for empty
    /// input, leaving the previous contents in place.
    pub(super) fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return false;
        }

        let padded_len = padded_size(bytes.len() as u64);
        if self.buffer.is_none() || padded_len > self.capacity {
            let capacity = padded_len.next_power_of_two().max(256);
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: capacity,
                usage: self.usage,
                mapped_at_creation: false,
            }));
            self.capacity = capacity;
        }

        let Some(buffer) = self.buffer.as_ref() else {
            return false;
        };
        if padded_len == bytes.len() as u64 {
            queue.write_buffer(buffer, 0, bytes);
        } else {
            let mut padded = bytes.to_vec();
            padded.resize(padded_len as usize, 0);
            queue.write_buffer(buffer, 0, &padded);
        }
        true
    }

    #[inline]
    pub(super) fn get(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }
}

fn padded_size(len: u64) -> u64 {
    let align = wgpu::COPY_BUFFER_ALIGNMENT;
    len.div_ceil(align) * align
}

// ── passes ────────────────────────────────────────────────────────────────

/// Begins a pass that draws over the existing color (and depth) contents.
pub(super) fn load_pass<'e>(
    encoder: &'e mut wgpu::CommandEncoder,
    color_view: &wgpu::TextureView,
    depth: Option<DepthAttachment<'_>>,
    label: &'static str,
) -> wgpu::RenderPass<'e> {
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: depth.map(|d| wgpu::RenderPassDepthStencilAttachment {
            view: d.view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }),
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_rounds_up_to_copy_alignment() {
        assert_eq!(padded_size(6), 8);
        assert_eq!(padded_size(8), 8);
        assert_eq!(padded_size(1), 4);
    }

    #[test]
    fn snapping_at_fractional_scale() {
        let r = snap_to_physical(Rect::new(10.3, 4.9, 2.2, 1.0), 1.5);
        // 10.3*1.5 = 15.45 -> 15 -> 10.0; 12.5*1.5 = 18.75 -> 19 -> 12.666..
        assert!((r.origin.x - 10.0).abs() < 1e-5);
        assert!((r.max().x - 19.0 / 1.5).abs() < 1e-5);
    }

    #[test]
    fn snapping_ignores_bad_scale() {
        let r = Rect::new(0.3, 0.3, 1.0, 1.0);
        assert_eq!(snap_to_physical(r, 0.0), r);
        assert_eq!(snap_to_physical(r, f32::NAN), r);
    }

    #[test]
    fn uniform_size_is_nonzero() {
        assert_eq!(uniform_binding_size::<ViewportUniform>().map(|s| s.get()), Some(16));
    }
}
