//! dragkit engine crate.
//!
//! Platform and GPU runtime shared by the dragkit demos: one window, a wgpu
//! surface with an optional depth target, polled input, a 2D draw list for
//! panel widgets, and renderers for solid rects and transformed meshes.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
