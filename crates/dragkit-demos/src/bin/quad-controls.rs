//! Quad with translation, rotation and scale sliders.

use anyhow::Result;
use dragkit_core::{DragPolicy, Shape};
use dragkit_demos::DemoConfig;
use dragkit_demos::panel::{AngleUnit, Axis, Control, Field};
use dragkit_engine::logging::{LoggingConfig, init_logging};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::new("dragkit: quad controls", Shape::quad(0.2))
        .policy(DragPolicy::AbsoluteFollow)
        .controls([
            Control::slider(Field::Translation(Axis::X), -1.0, 1.0),
            Control::slider(Field::Translation(Axis::Y), -1.0, 1.0),
            Control::slider(Field::Rotation(Axis::Z, AngleUnit::Degrees), 0.0, 360.0),
            Control::slider(Field::Scale(Axis::X), 0.1, 3.0),
            Control::slider(Field::Scale(Axis::Y), 0.1, 3.0),
        ]);

    dragkit_demos::run(config)
}
