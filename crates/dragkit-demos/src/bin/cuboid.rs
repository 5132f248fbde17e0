//! Perspective cuboid dragged across the plane it sits on, with a depth-test
//! toggle and a reset button.

use anyhow::Result;
use dragkit_core::{DragPolicy, Shape};
use dragkit_demos::panel::{Action, AngleUnit, Axis, Control, Field, Toggle};
use dragkit_demos::{Camera, DemoConfig};
use dragkit_engine::logging::{LoggingConfig, init_logging};
use dragkit_engine::paint::Color;
use glam::Vec3;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::new("dragkit: cuboid", Shape::cuboid(Vec3::new(0.5, 0.3, 0.4)))
        .size(1024.0, 768.0)
        .shape_color(Color::rgb(0.3, 0.75, 0.6))
        .camera(Camera::default_perspective())
        .policy(DragPolicy::OffsetAnchor)
        .depth_test(true)
        .controls([
            Control::slider(Field::Translation(Axis::X), -2.0, 2.0),
            Control::slider(Field::Translation(Axis::Y), -2.0, 2.0),
            Control::slider(Field::Translation(Axis::Z), -2.0, 1.0),
            Control::slider(Field::Rotation(Axis::X, AngleUnit::Degrees), 0.0, 360.0),
            Control::slider(Field::Rotation(Axis::Y, AngleUnit::Degrees), 0.0, 360.0),
            Control::slider(Field::Rotation(Axis::Z, AngleUnit::Degrees), 0.0, 360.0),
            Control::Checkbox(Toggle::DepthTest),
            Control::Button(Action::Reset),
        ]);

    dragkit_demos::run(config)
}
