//! Geometry and interaction core for **dragkit** demos.
//!
//! This crate holds everything that decides *whether* a pointer grabbed a
//! shape and *how* the shape moves while it is held. It has no windowing or
//! GPU dependencies, so every piece can be exercised from plain unit tests.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`projection`] | `project`, `pixel_to_ndc`, `unproject_to_plane`, `ProjectionContext` |
//! | [`hit`] | `point_in_triangle`, `point_in_polygon`, `hit_test`, `hit_test_shape` |
//! | [`shape`] | `Shape` (triangle / quad / cuboid geometry) |
//! | [`transform`] | `Transform` and its fixed `T * Rz * Ry * Rx * S` composition |
//! | [`drag`] | `DragController`, `DragPolicy`, `DragEvent`, `PointerSample` |
//! | [`error`] | `ProjectionError`, `DragPolicyParseError` |
//!
//! # Quick start
//!
//! ```rust
//! use dragkit_core::drag::{DragController, DragEvent, DragPolicy};
//! use dragkit_core::projection::ProjectionContext;
//! use dragkit_core::shape::Shape;
//! use glam::Vec2;
//!
//! let mut ctl = DragController::new(Shape::reference_triangle(), DragPolicy::OffsetAnchor);
//! let proj = ProjectionContext::IDENTITY;
//!
//! ctl.handle(DragEvent::Press(Vec2::new(0.0, 0.0)), &proj);
//! ctl.handle(DragEvent::Move(Vec2::new(0.1, 0.1)), &proj);
//! ctl.handle(DragEvent::Release, &proj);
//!
//! let t = ctl.transform().translation;
//! assert!((t.x - 0.1).abs() < 1e-6 && (t.y - 0.1).abs() < 1e-6);
//! ```

pub mod drag;
pub mod error;
pub mod hit;
pub mod projection;
pub mod shape;
pub mod transform;

pub use drag::{DragController, DragEvent, DragOutcome, DragPolicy, DragSession, DragState, PointerSample};
pub use error::{DragPolicyParseError, ProjectionError};
pub use projection::ProjectionContext;
pub use shape::Shape;
pub use transform::Transform;
