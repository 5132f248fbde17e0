//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers) and records its
//! own render pass that loads the existing color target.
//!
//! Coordinate conventions:
//! - `RectRenderer`: logical pixels (top-left origin, +Y down), mapped to NDC
//!   in the vertex shader through a viewport uniform.
//! - `MeshRenderer`: local-space vertices transformed by a caller-supplied MVP
//!   into clip space.

mod ctx;
pub mod shapes;

pub use ctx::{DepthAttachment, RenderCtx, RenderTarget};
