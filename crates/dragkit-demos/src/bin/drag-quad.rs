//! A small quad whose center jumps to the pointer while held.

use anyhow::Result;
use dragkit_core::{DragPolicy, Shape};
use dragkit_demos::DemoConfig;
use dragkit_engine::logging::{LoggingConfig, init_logging};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::new("dragkit: drag quad", Shape::quad(0.1)).policy(DragPolicy::AbsoluteFollow);

    dragkit_demos::run(config)
}
