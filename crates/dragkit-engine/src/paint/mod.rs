//! Colors shared between the demos and renderers.
//!
//! All colors are linear premultiplied RGBA; renderers blend with
//! `One, OneMinusSrcAlpha`.

pub mod color;

pub use color::Color;
