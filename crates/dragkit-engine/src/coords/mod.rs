//! Pixel-space geometry shared by the panel and the rect renderer.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Points and sizes are `glam::Vec2`. Shape geometry lives in NDC/world space
//! and never goes through these types.

mod rect;
mod viewport;

pub use glam::Vec2;
pub use rect::Rect;
pub use viewport::Viewport;
