//! Contract between the runtime loop and the application.
//!
//! The runtime owns the window, GPU and input; the app sees them once per
//! frame through [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
