/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// FIFO is available everywhere and is what the demos use.
    pub present_mode: wgpu::PresentMode,

    /// If set but unsupported by the surface, a supported mode is picked instead.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint only; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,

    /// Format of the depth target. `None` means no depth attachment at all.
    pub depth_format: Option<wgpu::TextureFormat>,
}

impl GpuInit {
    pub const DEFAULT_DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Same settings with a [`Self::DEFAULT_DEPTH_FORMAT`] depth target.
    pub fn with_depth(mut self) -> Self {
        self.depth_format = Some(Self::DEFAULT_DEPTH_FORMAT);
        self
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            depth_format: None,
        }
    }
}
