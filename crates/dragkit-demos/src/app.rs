use dragkit_core::projection::{pixel_to_ndc, unproject_to_plane};
use dragkit_core::{DragController, PointerSample, ProjectionContext, Transform};
use dragkit_engine::coords::{Vec2, Viewport};
use dragkit_engine::core::{App, AppControl, FrameCtx};
use dragkit_engine::input::{Key, MouseButton};
use dragkit_engine::paint::Color;
use dragkit_engine::render::shapes::mesh::{MeshDraw, MeshRenderer};
use dragkit_engine::render::shapes::rect::RectRenderer;
use dragkit_engine::scene::DrawList;

use crate::config::{Camera, DemoConfig};
use crate::panel::{Action, AngleUnit, Field, Panel, PanelEvent, Toggle};

/// Logical px the shape's origin keeps between itself and the panel edge.
const PANEL_CLEARANCE: f32 = 8.0;

/// The one application every demo binary runs.
///
/// Each frame polls input, lets the panel take what lands on it, feeds the
/// rest to the drag controller, and draws the shape under the panel.
pub struct ShapeDemo {
    title: String,
    clear_color: Color,
    drag_button: MouseButton,
    camera: Camera,

    controller: DragController,
    indices: Vec<u16>,
    color: Color,
    depth_test: bool,

    panel: Panel,
    gate: PointerGate,
    last_pointer: Vec2,
    shown_title: String,

    mesh: MeshRenderer,
    rects: RectRenderer,
    draw_list: DrawList,
}

impl ShapeDemo {
    pub fn new(config: DemoConfig) -> Self {
        let indices = config.shape.triangle_indices();
        Self {
            title: config.title,
            clear_color: config.clear_color,
            drag_button: config.drag_button,
            camera: config.camera,
            controller: DragController::new(config.shape, config.policy),
            indices,
            color: config.shape_color,
            depth_test: config.depth_test.unwrap_or(false),
            panel: Panel::new(config.controls),
            gate: PointerGate::default(),
            last_pointer: Vec2::ZERO,
            shown_title: String::new(),
            mesh: MeshRenderer::new(),
            rects: RectRenderer::new(),
            draw_list: DrawList::new(),
        }
    }

    fn reset(&mut self) {
        self.controller.cancel();
        self.controller.transform_mut().reset();
        log::info!("transform reset");
    }

    fn apply(&mut self, event: PanelEvent) {
        match event {
            // The drag owns the translation until it ends.
            PanelEvent::Changed(Field::Translation(_), _) if self.controller.is_dragging() => {}
            PanelEvent::Changed(field, value) => {
                write_field(self.controller.transform_mut(), &mut self.color, field, value);
            }
            PanelEvent::Toggled(Toggle::DepthTest, on) => {
                self.depth_test = on;
                log::info!("depth test {}", if on { "on" } else { "off" });
            }
            PanelEvent::Clicked(Action::Reset) => self.reset(),
        }
    }
}

impl App for ShapeDemo {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }
        if ctx.input_frame.key_pressed(Key::Character('r')) {
            self.reset();
        }
        if ctx.input_frame.focus_lost && self.controller.cancel() {
            log::debug!("focus lost mid-drag");
        }

        // Outside the window the last known position stands in, so a drag
        // released out there still ends cleanly.
        let pointer = ctx.input.pointer_pos.unwrap_or(self.last_pointer);
        self.last_pointer = pointer;

        let viewport = ctx.window.viewport();
        let projection = self.camera.projection(viewport.aspect());

        {
            let transform = *self.controller.transform();
            let color = self.color;
            let depth_test = self.depth_test;
            self.panel.sync(
                |field| read_field(&transform, color, field),
                |Toggle::DepthTest| depth_test,
            );
        }
        let events = self
            .panel
            .update(pointer, ctx.input.button_down(MouseButton::Left), viewport);
        for event in events {
            self.apply(event);
        }

        let over_panel = self.panel.contains(pointer, viewport) || self.panel.is_capturing();
        let pressed = self.gate.filter(ctx.input.button_down(self.drag_button), over_panel);
        self.controller
            .update(PointerSample::new(pointer, pressed), viewport.size(), &projection);
        if !self.panel.is_empty() {
            let panel_right = self.panel.bounds(viewport).max().x;
            keep_clear_of_panel(self.controller.transform_mut(), &projection, viewport, panel_right);
        }

        let title = status_title(&self.title, self.controller.transform(), self.controller.is_dragging());
        if title != self.shown_title {
            ctx.window.set_title(&title);
            self.shown_title = title;
        }

        let model = self.controller.model_matrix();
        let mesh = MeshDraw {
            vertices: self.controller.shape().vertices(),
            indices: &self.indices,
            mvp: projection.mvp(model),
            model_view: projection.view * model,
            color: self.color,
            depth_test: self.depth_test,
        };

        self.draw_list.clear();
        self.panel.paint(&mut self.draw_list, viewport);

        let (mesh_renderer, rects, draw_list) = (&mut self.mesh, &mut self.rects, &mut self.draw_list);
        ctx.render(self.clear_color, |rctx, target| {
            mesh_renderer.render(rctx, target, &mesh);
            rects.render(rctx, target, draw_list);
        })
    }
}

/// Keeps presses that start on the panel away from the shape.
///
/// A press of the drag button that begins over the panel (or while a panel
/// slider holds the pointer) is hidden from the drag controller until the
/// button is released.
#[derive(Debug, Default)]
struct PointerGate {
    was_down: bool,
    blocked: bool,
}

impl PointerGate {
    fn filter(&mut self, down: bool, over_panel: bool) -> bool {
        if down && !self.was_down {
            self.blocked = over_panel;
        }
        if !down {
            self.blocked = false;
        }
        self.was_down = down;
        down && !self.blocked
    }
}

/// Pushes the shape right until its origin sits beside the panel.
///
/// Every demo shape contains its own origin, so a shape kept this way always
/// has a grabbable point outside the panel. Does nothing while minimized.
fn keep_clear_of_panel(transform: &mut Transform, projection: &ProjectionContext, viewport: Viewport, panel_right: f32) {
    let Some(edge) = pixel_to_ndc(
        panel_right + PANEL_CLEARANCE,
        viewport.height * 0.5,
        viewport.width,
        viewport.height,
    ) else {
        return;
    };
    let t = &mut transform.translation;
    if let Some(limit) = unproject_to_plane(edge, projection.view_projection().inverse(), t.z) {
        t.x = t.x.max(limit.x);
    }
}

fn read_field(transform: &Transform, color: Color, field: Field) -> f32 {
    match field {
        Field::Translation(axis) => transform.translation[axis.index()],
        Field::Rotation(axis, AngleUnit::Radians) => transform.rotation[axis.index()],
        Field::Rotation(axis, AngleUnit::Degrees) => transform.rotation_degrees()[axis.index()],
        Field::Scale(axis) => transform.scale[axis.index()],
        Field::Color(channel) => {
            let (r, g, b, _) = color.to_straight();
            [r, g, b][channel.index()]
        }
    }
}

fn write_field(transform: &mut Transform, color: &mut Color, field: Field, value: f32) {
    match field {
        Field::Translation(axis) => transform.translation[axis.index()] = value,
        Field::Rotation(axis, AngleUnit::Radians) => transform.rotation[axis.index()] = value,
        Field::Rotation(axis, AngleUnit::Degrees) => transform.rotation[axis.index()] = value.to_radians(),
        Field::Scale(axis) => transform.scale[axis.index()] = value,
        Field::Color(channel) => *color = color.with_channel(channel.index(), value),
    }
}

/// Window title: demo name plus the live transform.
fn status_title(base: &str, transform: &Transform, dragging: bool) -> String {
    let t = transform.translation;
    let r = transform.rotation_degrees();
    let s = transform.scale;
    format!(
        "{base} | pos ({:.2}, {:.2}, {:.2}) rot ({:.0}, {:.0}, {:.0}) scale ({:.2}, {:.2}, {:.2}){}",
        t.x,
        t.y,
        t.z,
        r.x,
        r.y,
        r.z,
        s.x,
        s.y,
        s.z,
        if dragging { " [dragging]" } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{Axis, Channel, Control};
    use dragkit_core::projection::project;
    use dragkit_core::{DragEvent, Shape};
    use glam::Vec3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── pointer gate ──────────────────────────────────────────────────────

    #[test]
    fn press_on_panel_is_hidden_until_release() {
        let mut gate = PointerGate::default();
        assert!(!gate.filter(true, true));
        // Still held, now over the shape: stays hidden.
        assert!(!gate.filter(true, false));
        assert!(!gate.filter(false, false));
        assert!(gate.filter(true, false));
    }

    #[test]
    fn drag_may_cross_the_panel() {
        let mut gate = PointerGate::default();
        assert!(gate.filter(true, false));
        assert!(gate.filter(true, true));
        assert!(!gate.filter(false, true));
    }

    // ── field access ──────────────────────────────────────────────────────

    #[test]
    fn fields_round_trip_through_the_model() {
        let mut transform = Transform::IDENTITY;
        let mut color = Color::rgb(1.0, 0.0, 0.0);

        write_field(&mut transform, &mut color, Field::Translation(Axis::Y), 0.4);
        write_field(&mut transform, &mut color, Field::Rotation(Axis::Z, AngleUnit::Degrees), 90.0);
        write_field(&mut transform, &mut color, Field::Scale(Axis::X), 2.0);
        write_field(&mut transform, &mut color, Field::Color(Channel::G), 0.5);

        assert_eq!(transform.translation, Vec3::new(0.0, 0.4, 0.0));
        assert!(approx(transform.rotation.z, std::f32::consts::FRAC_PI_2));
        assert!(approx(
            read_field(&transform, color, Field::Rotation(Axis::Z, AngleUnit::Radians)),
            std::f32::consts::FRAC_PI_2
        ));
        assert!(approx(
            read_field(&transform, color, Field::Rotation(Axis::Z, AngleUnit::Degrees)),
            90.0
        ));
        assert_eq!(read_field(&transform, color, Field::Scale(Axis::X)), 2.0);
        assert!(approx(read_field(&transform, color, Field::Color(Channel::G)), 0.5));
        assert!(approx(read_field(&transform, color, Field::Color(Channel::R)), 1.0));
    }

    // ── panel edits during a drag ─────────────────────────────────────────

    fn triangle_demo() -> ShapeDemo {
        ShapeDemo::new(DemoConfig::new("triangle", Shape::reference_triangle()).controls([
            Control::slider(Field::Translation(Axis::X), -1.0, 1.0),
            Control::slider(Field::Color(Channel::R), 0.0, 1.0),
        ]))
    }

    #[test]
    fn translation_slider_waits_for_drag_to_end() {
        let mut demo = triangle_demo();
        let proj = ProjectionContext::IDENTITY;
        demo.controller.handle(DragEvent::Press(Vec2::ZERO), &proj);
        assert!(demo.controller.is_dragging());

        demo.apply(PanelEvent::Changed(Field::Translation(Axis::X), 0.7));
        assert_eq!(demo.controller.transform().translation.x, 0.0);

        // Other fields are not part of the gesture.
        demo.apply(PanelEvent::Changed(Field::Color(Channel::R), 0.25));
        assert!(approx(read_field(demo.controller.transform(), demo.color, Field::Color(Channel::R)), 0.25));

        demo.controller.handle(DragEvent::Release, &proj);
        demo.apply(PanelEvent::Changed(Field::Translation(Axis::X), 0.7));
        assert!(approx(demo.controller.transform().translation.x, 0.7));
    }

    // ── panel clearance ───────────────────────────────────────────────────

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);
    const PANEL_RIGHT: f32 = 220.0;

    #[test]
    fn flat_shape_is_pushed_out_from_under_the_panel() {
        let mut t = Transform::from_translation(Vec3::new(-0.9, 0.2, 0.0));
        keep_clear_of_panel(&mut t, &ProjectionContext::IDENTITY, VIEWPORT, PANEL_RIGHT);

        let expected = (PANEL_RIGHT + PANEL_CLEARANCE) / 400.0 - 1.0;
        assert!(approx(t.translation.x, expected));
        assert_eq!(t.translation.y, 0.2);
    }

    #[test]
    fn shape_beside_the_panel_is_left_alone() {
        let mut t = Transform::from_translation(Vec3::new(0.5, -0.3, 0.0));
        keep_clear_of_panel(&mut t, &ProjectionContext::IDENTITY, VIEWPORT, PANEL_RIGHT);
        assert_eq!(t.translation, Vec3::new(0.5, -0.3, 0.0));
    }

    #[test]
    fn minimized_window_leaves_translation_alone() {
        let mut t = Transform::from_translation(Vec3::new(-0.9, 0.0, 0.0));
        keep_clear_of_panel(&mut t, &ProjectionContext::IDENTITY, Viewport::new(0.0, 0.0), PANEL_RIGHT);
        assert_eq!(t.translation.x, -0.9);
    }

    #[test]
    fn perspective_origin_lands_at_panel_edge() {
        let proj = Camera::default_perspective().projection(VIEWPORT.aspect());
        let mut t = Transform::from_translation(Vec3::new(-5.0, 0.0, -0.5));
        keep_clear_of_panel(&mut t, &proj, VIEWPORT, PANEL_RIGHT);

        let ndc = project(t.translation, proj.view_projection()).unwrap();
        let px = (ndc.x + 1.0) * 400.0;
        assert!((px - (PANEL_RIGHT + PANEL_CLEARANCE)).abs() < 1e-2, "origin at {px}px");
        assert_eq!(t.translation.z, -0.5);
    }

    // ── title ─────────────────────────────────────────────────────────────

    #[test]
    fn title_shows_transform_and_drag_state() {
        let transform = Transform::from_translation(Vec3::new(0.5, -0.25, 0.0));
        assert_eq!(
            status_title("quad", &transform, false),
            "quad | pos (0.50, -0.25, 0.00) rot (0, 0, 0) scale (1.00, 1.00, 1.00)"
        );
        assert!(status_title("quad", &transform, true).ends_with(" [dragging]"));
    }
}
