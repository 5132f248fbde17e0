//! Draggable-shape demos.
//!
//! Every binary under `src/bin` builds a [`DemoConfig`] and hands it to
//! [`run`]. The demos differ only in shape, camera, drag policy and which
//! panel controls they show.

pub mod app;
pub mod config;
pub mod panel;

use anyhow::Result;
use dragkit_engine::device::GpuInit;
use dragkit_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

pub use app::ShapeDemo;
pub use config::{Camera, DemoConfig};

/// Opens the demo window and runs until it is closed.
pub fn run(config: DemoConfig) -> Result<()> {
    let config = config.with_env_overrides();

    let gpu_init = if config.depth_test.is_some() {
        GpuInit::default().with_depth()
    } else {
        GpuInit::default()
    };
    let runtime = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(config.size.x as f64, config.size.y as f64),
    };

    log::info!("starting '{}' with {} drag", config.title, config.policy);
    Runtime::run(runtime, gpu_init, ShapeDemo::new(config))
}
