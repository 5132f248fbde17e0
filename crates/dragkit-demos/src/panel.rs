//! Left-side control panel: sliders, checkboxes and buttons drawn as solid
//! rects.
//!
//! The panel polls the left button like the drag controller does. A press on
//! a slider captures the pointer until release, so the value keeps following
//! the cursor even after it leaves the panel. The panel has no text; each
//! slider's fill color says which axis or channel it drives.

use dragkit_engine::coords::{Rect, Vec2, Viewport};
use dragkit_engine::paint::Color;
use dragkit_engine::scene::{DrawList, ZIndex};

pub const PANEL_WIDTH: f32 = 220.0;
pub const ROW_HEIGHT: f32 = 28.0;
const PADDING: f32 = 12.0;

const TRACK_HEIGHT: f32 = 4.0;
const THUMB_SIZE: Vec2 = Vec2::new(8.0, 16.0);
const CHECKBOX_SIZE: f32 = 16.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AngleUnit {
    Radians,
    Degrees,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::R => 0,
            Channel::G => 1,
            Channel::B => 2,
        }
    }
}

/// A scalar of the demo model a slider can drive.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Field {
    Translation(Axis),
    Rotation(Axis, AngleUnit),
    Scale(Axis),
    Color(Channel),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Toggle {
    DepthTest,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Reset,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Control {
    Slider { field: Field, min: f32, max: f32 },
    Checkbox(Toggle),
    Button(Action),
}

impl Control {
    pub fn slider(field: Field, min: f32, max: f32) -> Self {
        Control::Slider { field, min, max }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PanelEvent {
    Changed(Field, f32),
    Toggled(Toggle, bool),
    Clicked(Action),
}

#[derive(Debug, Clone)]
struct Row {
    control: Control,
    value: f32,
    checked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Panel {
    rows: Vec<Row>,
    /// Slider row holding the pointer.
    capture: Option<usize>,
    /// Button row pressed and not yet released; only drives the highlight.
    held_button: Option<usize>,
    was_pressed: bool,
}

impl Panel {
    pub fn new(controls: impl IntoIterator<Item = Control>) -> Self {
        Self {
            rows: controls
                .into_iter()
                .map(|control| Row {
                    control,
                    value: 0.0,
                    checked: false,
                })
                .collect(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Panel area in logical px; empty when there are no controls.
    pub fn bounds(&self, viewport: Viewport) -> Rect {
        if self.is_empty() {
            return Rect::default();
        }
        Rect::new(0.0, 0.0, PANEL_WIDTH, viewport.height.max(0.0))
    }

    pub fn contains(&self, p: Vec2, viewport: Viewport) -> bool {
        self.bounds(viewport).contains(p)
    }

    /// Pulls current values from the model so the panel shows edits made
    /// elsewhere (drags, resets).
    pub fn sync(&mut self, value_of: impl Fn(Field) -> f32, is_on: impl Fn(Toggle) -> bool) {
        for row in &mut self.rows {
            match row.control {
                Control::Slider { field, .. } => row.value = value_of(field),
                Control::Checkbox(toggle) => row.checked = is_on(toggle),
                Control::Button(_) => {}
            }
        }
    }

    /// Feeds one polled sample of the pointer and the left button.
    pub fn update(&mut self, pointer: Vec2, pressed: bool, viewport: Viewport) -> Vec<PanelEvent> {
        let press_edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;

        let mut events = Vec::new();
        if !pressed {
            self.capture = None;
            self.held_button = None;
            return events;
        }

        if press_edge && self.contains(pointer, viewport) {
            if let Some(index) = self.row_at(pointer) {
                let row = &mut self.rows[index];
                match row.control {
                    Control::Slider { .. } => self.capture = Some(index),
                    Control::Checkbox(toggle) => {
                        row.checked = !row.checked;
                        events.push(PanelEvent::Toggled(toggle, row.checked));
                    }
                    Control::Button(action) => {
                        self.held_button = Some(index);
                        events.push(PanelEvent::Clicked(action));
                    }
                }
            }
        }

        if let Some(index) = self.capture {
            let track = Self::row_rect(index);
            let row = &mut self.rows[index];
            if let Control::Slider { field, min, max } = row.control {
                let value = value_at(pointer.x, track, min, max);
                if press_edge || value != row.value {
                    row.value = value;
                    events.push(PanelEvent::Changed(field, value));
                }
            }
        }

        events
    }

    pub fn paint(&self, list: &mut DrawList, viewport: Viewport) {
        if self.is_empty() {
            return;
        }
        list.push_solid_rect(ZIndex(0), self.bounds(viewport), Color::rgb(0.16, 0.17, 0.2));

        for (index, row) in self.rows.iter().enumerate() {
            let rect = Self::row_rect(index);
            let cy = rect.center().y;

            match row.control {
                Control::Slider { field, min, max } => {
                    let track = Rect::new(rect.origin.x, cy - TRACK_HEIGHT * 0.5, rect.size.x, TRACK_HEIGHT);
                    list.push_solid_rect(ZIndex(1), track, Color::rgb(0.3, 0.32, 0.36));

                    let fill_w = normalized(row.value, min, max) * track.size.x;
                    if fill_w > 0.0 {
                        let fill = Rect::new(track.origin.x, track.origin.y, fill_w, track.size.y);
                        list.push_solid_rect(ZIndex(2), fill, field_color(field));
                    }

                    let thumb = Rect::from_origin_size(
                        Vec2::new(track.origin.x + fill_w, cy) - THUMB_SIZE * 0.5,
                        THUMB_SIZE,
                    );
                    let thumb_color = if self.capture == Some(index) {
                        field_color(field)
                    } else {
                        Color::WHITE
                    };
                    list.push_solid_rect(ZIndex(3), thumb, thumb_color);
                }

                Control::Checkbox(_) => {
                    let outer = Rect::new(rect.origin.x, cy - CHECKBOX_SIZE * 0.5, CHECKBOX_SIZE, CHECKBOX_SIZE);
                    list.push_solid_rect(ZIndex(1), outer, Color::rgb(0.7, 0.72, 0.76));
                    list.push_solid_rect(ZIndex(2), outer.inset(2.0), Color::rgb(0.16, 0.17, 0.2));
                    if row.checked {
                        list.push_solid_rect(ZIndex(3), outer.inset(4.0), Color::rgb(0.3, 0.7, 1.0));
                    }
                }

                Control::Button(_) => {
                    let color = if self.held_button == Some(index) {
                        Color::rgb(0.5, 0.55, 0.62)
                    } else {
                        Color::rgb(0.34, 0.37, 0.42)
                    };
                    list.push_solid_rect(ZIndex(1), rect.inset(3.0), color);
                }
            }
        }
    }

    fn row_rect(index: usize) -> Rect {
        Rect::new(
            PADDING,
            PADDING + index as f32 * ROW_HEIGHT,
            PANEL_WIDTH - 2.0 * PADDING,
            ROW_HEIGHT,
        )
    }

    fn row_at(&self, p: Vec2) -> Option<usize> {
        (0..self.rows.len()).find(|&i| Self::row_rect(i).contains(p))
    }
}

/// Slider value under pointer x, clamped to the track.
fn value_at(x: f32, track: Rect, min: f32, max: f32) -> f32 {
    if track.size.x <= 0.0 {
        return min;
    }
    let t = ((x - track.origin.x) / track.size.x).clamp(0.0, 1.0);
    min + t * (max - min)
}

/// `value` mapped into `[0, 1]` over the slider range.
fn normalized(value: f32, min: f32, max: f32) -> f32 {
    if (max - min).abs() < f32::EPSILON {
        0.0
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }
}

fn field_color(field: Field) -> Color {
    let axis_color = |axis: Axis| match axis {
        Axis::X => Color::rgb(0.9, 0.35, 0.35),
        Axis::Y => Color::rgb(0.4, 0.85, 0.4),
        Axis::Z => Color::rgb(0.4, 0.55, 1.0),
    };
    match field {
        Field::Translation(axis) | Field::Scale(axis) => axis_color(axis),
        Field::Rotation(axis, _) => axis_color(axis).with_channel(2, 0.2),
        Field::Color(Channel::R) => Color::rgb(1.0, 0.0, 0.0),
        Field::Color(Channel::G) => Color::rgb(0.0, 1.0, 0.0),
        Field::Color(Channel::B) => Color::rgb(0.0, 0.0, 1.0),
    }
}
