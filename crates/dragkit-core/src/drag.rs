//! Press / move / release state machine for a single draggable shape.
//!
//! The controller owns the shape and its [`Transform`]. Pointer positions
//! arrive in NDC (via [`DragController::handle`]) or as raw per-frame samples
//! in window pixels (via [`DragController::update`]). Pointer positions are
//! lifted onto the plane `z = translation.z` before any policy math, so the
//! same code drives the 2D demos (identity projection) and the perspective
//! cuboid.

use std::fmt;
use std::str::FromStr;

use glam::{Mat4, Vec2, Vec3};

use crate::error::DragPolicyParseError;
use crate::hit::hit_test_shape;
use crate::projection::{ProjectionContext, pixel_to_ndc, unproject_to_plane};
use crate::shape::Shape;
use crate::transform::Transform;

/// How translation follows the pointer while a drag is active.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DragPolicy {
    /// The grabbed point stays under the pointer.
    #[default]
    OffsetAnchor,
    /// Translation x/y snaps to the pointer.
    AbsoluteFollow,
    /// Each move adds the pointer delta since the previous move, scaled by `gain`.
    DeltaAccumulate { gain: f32 },
}

impl fmt::Display for DragPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragPolicy::OffsetAnchor => f.write_str("offset"),
            DragPolicy::AbsoluteFollow => f.write_str("follow"),
            DragPolicy::DeltaAccumulate { gain } => write!(f, "accumulate:{gain}"),
        }
    }
}

impl FromStr for DragPolicy {
    type Err = DragPolicyParseError;

    /// Accepts `offset`, `follow` and `accumulate[:gain]` (case-insensitive),
    /// plus the long forms `offset-anchor`, `absolute-follow` and `delta`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let (name, arg) = match lowered.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (lowered.as_str(), None),
        };

        match (name.trim(), arg) {
            ("offset" | "offset-anchor", None) => Ok(DragPolicy::OffsetAnchor),
            ("follow" | "absolute-follow", None) => Ok(DragPolicy::AbsoluteFollow),
            ("accumulate" | "delta", None) => Ok(DragPolicy::DeltaAccumulate { gain: 1.0 }),
            ("accumulate" | "delta", Some(gain)) => match gain.parse::<f32>() {
                Ok(gain) if gain.is_finite() => Ok(DragPolicy::DeltaAccumulate { gain }),
                _ => Err(DragPolicyParseError::new(s)),
            },
            _ => Err(DragPolicyParseError::new(s)),
        }
    }
}

/// Pointer event in NDC.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DragEvent {
    Press(Vec2),
    Move(Vec2),
    Release,
}

/// One polled pointer reading: window pixels (origin top-left) and the drag
/// button state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub pressed: bool,
}

impl PointerSample {
    pub fn new(position: Vec2, pressed: bool) -> Self {
        Self { position, pressed }
    }
}

/// State recorded when a press lands on the shape.
///
/// Pointer fields are points on the drag plane, in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragSession {
    pub anchor_pointer: Vec3,
    pub anchor_translation: Vec3,
    pub last_pointer: Vec3,
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What an event did to the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    Ignored,
    Started,
    Moved,
    Ended,
}

/// Owns one shape, its transform, and the drag gesture in progress.
#[derive(Debug, Clone)]
pub struct DragController {
    shape: Shape,
    transform: Transform,
    policy: DragPolicy,
    state: DragState,
    was_pressed: bool,
}

impl DragController {
    pub fn new(shape: Shape, policy: DragPolicy) -> Self {
        Self {
            shape,
            transform: Transform::IDENTITY,
            policy,
            state: DragState::Idle,
            was_pressed: false,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Direct edits (sliders, reset). Takes effect on the next press.
    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    #[inline]
    pub fn policy(&self) -> DragPolicy {
        self.policy
    }

    #[inline]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    #[inline]
    pub fn model_matrix(&self) -> Mat4 {
        self.transform.model_matrix()
    }

    /// Whether an NDC point lies on the shape as currently transformed.
    pub fn hit(&self, pointer_ndc: Vec2, projection: &ProjectionContext) -> bool {
        hit_test_shape(&self.shape, pointer_ndc, projection.mvp(self.model_matrix()))
    }

    pub fn handle(&mut self, event: DragEvent, projection: &ProjectionContext) -> DragOutcome {
        match (self.state, event) {
            (DragState::Idle, DragEvent::Press(ndc)) => self.begin(ndc, projection),
            (DragState::Dragging(session), DragEvent::Move(ndc)) => self.drag_to(session, ndc, projection),
            (DragState::Dragging(_), DragEvent::Release) => {
                self.state = DragState::Idle;
                log::debug!("drag ended at translation {:?}", self.transform.translation);
                DragOutcome::Ended
            }
            _ => DragOutcome::Ignored,
        }
    }

    /// Feeds one polled pointer sample.
    ///
    /// Press and release are derived from edges of `sample.pressed` against the
    /// previous sample; a held button produces a move. `window_size` is the
    /// current drawable size in pixels. While the window has no area, presses
    /// and moves are dropped but a release still ends the drag.
    pub fn update(
        &mut self,
        sample: PointerSample,
        window_size: Vec2,
        projection: &ProjectionContext,
    ) -> DragOutcome {
        let was_pressed = std::mem::replace(&mut self.was_pressed, sample.pressed);

        if !sample.pressed {
            return if was_pressed {
                self.handle(DragEvent::Release, projection)
            } else {
                DragOutcome::Ignored
            };
        }

        let Some(ndc) = pixel_to_ndc(sample.position.x, sample.position.y, window_size.x, window_size.y) else {
            return DragOutcome::Ignored;
        };

        let event = if was_pressed {
            DragEvent::Move(ndc)
        } else {
            DragEvent::Press(ndc)
        };
        self.handle(event, projection)
    }

    /// Aborts an active drag, putting the shape back where the drag started.
    ///
    /// Returns `true` if a drag was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.was_pressed = false;
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                self.transform.translation = session.anchor_translation;
                log::debug!("drag cancelled");
                true
            }
            DragState::Idle => false,
        }
    }

    fn begin(&mut self, ndc: Vec2, projection: &ProjectionContext) -> DragOutcome {
        if !self.hit(ndc, projection) {
            return DragOutcome::Ignored;
        }

        let Some(anchor) = self.pointer_on_plane(ndc, projection, self.transform.translation.z) else {
            log::debug!("press at {ndc:?} hit the shape but cannot be mapped onto its plane");
            return DragOutcome::Ignored;
        };

        self.state = DragState::Dragging(DragSession {
            anchor_pointer: anchor,
            anchor_translation: self.transform.translation,
            last_pointer: anchor,
        });
        log::debug!("drag started at {ndc:?} ({})", self.policy);
        DragOutcome::Started
    }

    fn drag_to(&mut self, mut session: DragSession, ndc: Vec2, projection: &ProjectionContext) -> DragOutcome {
        let Some(pointer) = self.pointer_on_plane(ndc, projection, session.anchor_pointer.z) else {
            return DragOutcome::Ignored;
        };

        let t = &mut self.transform.translation;
        match self.policy {
            DragPolicy::OffsetAnchor => {
                *t = session.anchor_translation + (pointer - session.anchor_pointer);
            }
            DragPolicy::AbsoluteFollow => {
                t.x = pointer.x;
                t.y = pointer.y;
            }
            DragPolicy::DeltaAccumulate { gain } => {
                *t += (pointer - session.last_pointer) * gain;
            }
        }

        session.last_pointer = pointer;
        self.state = DragState::Dragging(session);
        log::trace!("drag moved to {:?}", self.transform.translation);
        DragOutcome::Moved
    }

    fn pointer_on_plane(&self, ndc: Vec2, projection: &ProjectionContext, plane_z: f32) -> Option<Vec3> {
        unproject_to_plane(ndc, projection.view_projection().inverse(), plane_z)
    }
}
