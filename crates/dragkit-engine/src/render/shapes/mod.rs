//! Renderers.

mod common;

pub mod mesh;
pub mod rect;
