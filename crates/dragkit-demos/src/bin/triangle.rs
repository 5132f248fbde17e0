//! Right-drag the small triangle; sliders set rotation, position and color.

use std::f32::consts::TAU;

use anyhow::Result;
use dragkit_core::{DragPolicy, Shape};
use dragkit_demos::DemoConfig;
use dragkit_demos::panel::{AngleUnit, Axis, Channel, Control, Field};
use dragkit_engine::input::MouseButton;
use dragkit_engine::logging::{LoggingConfig, init_logging};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::new("dragkit: triangle", Shape::reference_triangle())
        .drag_button(MouseButton::Right)
        .policy(DragPolicy::OffsetAnchor)
        .controls([
            Control::slider(Field::Rotation(Axis::Z, AngleUnit::Radians), 0.0, TAU),
            Control::slider(Field::Translation(Axis::X), -1.0, 1.0),
            Control::slider(Field::Translation(Axis::Y), -1.0, 1.0),
            Control::slider(Field::Color(Channel::R), 0.0, 1.0),
            Control::slider(Field::Color(Channel::G), 0.0, 1.0),
            Control::slider(Field::Color(Channel::B), 0.0, 1.0),
        ]);

    dragkit_demos::run(config)
}
