//! Per-demo configuration, built by each binary in the builder style.

use dragkit_core::{DragPolicy, ProjectionContext, Shape};
use dragkit_engine::input::MouseButton;
use dragkit_engine::paint::Color;
use glam::{Vec2, Vec3};

use crate::panel::Control;

/// Environment variable that overrides the demo's drag policy.
pub const DRAG_POLICY_ENV: &str = "DRAGKIT_DRAG_POLICY";

/// How the scene is viewed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Camera {
    /// Identity view and projection: world x/y are NDC.
    Flat,
    Perspective {
        eye: Vec3,
        target: Vec3,
        fov_y_degrees: f32,
        near: f32,
        far: f32,
    },
}

impl Camera {
    /// The camera the cuboid demo uses: three units back, 45° vertical fov.
    pub const fn default_perspective() -> Self {
        Camera::Perspective {
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Projection for the current frame. `aspect` is `None` while minimized.
    pub fn projection(&self, aspect: Option<f32>) -> ProjectionContext {
        match *self {
            Camera::Flat => ProjectionContext::IDENTITY,
            Camera::Perspective {
                eye,
                target,
                fov_y_degrees,
                near,
                far,
            } => ProjectionContext::perspective(eye, target, fov_y_degrees, aspect.unwrap_or(1.0), near, far),
        }
    }
}

/// Everything one demo binary decides.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub size: Vec2,
    pub clear_color: Color,
    pub shape: Shape,
    pub shape_color: Color,
    pub drag_button: MouseButton,
    pub policy: DragPolicy,
    pub camera: Camera,
    /// `Some(initial)` requests a depth target and makes depth testing
    /// switchable; `None` renders without one.
    pub depth_test: Option<bool>,
    pub controls: Vec<Control>,
}

impl DemoConfig {
    pub fn new(title: impl Into<String>, shape: Shape) -> Self {
        Self {
            title: title.into(),
            size: Vec2::new(800.0, 600.0),
            clear_color: Color::rgb(0.1, 0.1, 0.12),
            shape,
            shape_color: Color::rgb(0.9, 0.45, 0.2),
            drag_button: MouseButton::Left,
            policy: DragPolicy::default(),
            camera: Camera::Flat,
            depth_test: None,
            controls: Vec::new(),
        }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    pub fn shape_color(mut self, color: Color) -> Self {
        self.shape_color = color;
        self
    }

    pub fn drag_button(mut self, button: MouseButton) -> Self {
        self.drag_button = button;
        self
    }

    pub fn policy(mut self, policy: DragPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn depth_test(mut self, enabled: bool) -> Self {
        self.depth_test = Some(enabled);
        self
    }

    pub fn controls(mut self, controls: impl IntoIterator<Item = Control>) -> Self {
        self.controls.extend(controls);
        self
    }

    /// Applies [`DRAG_POLICY_ENV`] from the process environment.
    pub fn with_env_overrides(self) -> Self {
        let value = std::env::var(DRAG_POLICY_ENV).ok();
        self.with_policy_override(value.as_deref())
    }

    /// Replaces the policy with `value` when it parses. Invalid values are
    /// logged and leave the configured policy in place.
    pub fn with_policy_override(mut self, value: Option<&str>) -> Self {
        let Some(value) = value else {
            return self;
        };
        match value.parse::<DragPolicy>() {
            Ok(policy) => {
                log::info!("{DRAG_POLICY_ENV}: using drag policy {policy}");
                self.policy = policy;
            }
            Err(e) => log::warn!("{DRAG_POLICY_ENV}: {e}; keeping {}", self.policy),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DemoConfig {
        DemoConfig::new("test", Shape::quad(0.1)).policy(DragPolicy::AbsoluteFollow)
    }

    // ── policy override ───────────────────────────────────────────────────

    #[test]
    fn valid_override_replaces_policy() {
        let c = config().with_policy_override(Some("accumulate:0.5"));
        assert_eq!(c.policy, DragPolicy::DeltaAccumulate { gain: 0.5 });
    }

    #[test]
    fn invalid_or_missing_override_keeps_policy() {
        assert_eq!(config().with_policy_override(Some("sideways")).policy, DragPolicy::AbsoluteFollow);
        assert_eq!(config().with_policy_override(None).policy, DragPolicy::AbsoluteFollow);
    }

    // ── camera ────────────────────────────────────────────────────────────

    #[test]
    fn flat_camera_is_identity() {
        assert_eq!(Camera::Flat.projection(Some(2.0)), ProjectionContext::IDENTITY);
    }

    #[test]
    fn perspective_camera_tracks_aspect() {
        let cam = Camera::default_perspective();
        let wide = cam.projection(Some(2.0));
        let square = cam.projection(Some(1.0));
        // x scale halves when the window is twice as wide.
        let ratio = wide.projection.x_axis.x / square.projection.x_axis.x;
        assert!((ratio - 0.5).abs() < 1e-5);
        assert_eq!(cam.projection(None), square);
    }

    #[test]
    fn builder_sets_depth() {
        let c = config().depth_test(true);
        assert_eq!(c.depth_test, Some(true));
        assert_eq!(config().depth_test, None);
    }
}
