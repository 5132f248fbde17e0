//! GPU device + surface management.
//!
//! - creates the wgpu Instance/Adapter/Device/Queue
//! - creates & configures the Surface (swapchain)
//! - owns the optional depth target, sized with the surface
//! - acquires frames and provides encoders/views for rendering

mod depth;
mod gpu;
mod init;
mod surface;

pub use depth::DepthTarget;
pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
