//! A larger blue triangle that moves by the pointer delta each frame.

use anyhow::Result;
use dragkit_core::{DragPolicy, Shape};
use dragkit_demos::DemoConfig;
use dragkit_engine::logging::{LoggingConfig, init_logging};
use dragkit_engine::paint::Color;
use glam::Vec3;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let shape = Shape::triangle(
        Vec3::new(-0.5, -0.5, 0.0),
        Vec3::new(0.5, -0.5, 0.0),
        Vec3::new(0.0, 0.5, 0.0),
    );
    let config = DemoConfig::new("dragkit: drag triangle", shape)
        .shape_color(Color::rgb(0.2, 0.4, 1.0))
        .policy(DragPolicy::DeltaAccumulate { gain: 1.0 });

    dragkit_demos::run(config)
}
