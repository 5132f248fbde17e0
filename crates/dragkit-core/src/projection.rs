//! Coordinate projection.
//!
//! Spaces used here:
//! - local: shape vertices as authored
//! - clip: `mvp * vec4(local, 1)`
//! - NDC: clip after the perspective divide, roughly `[-1, 1]` on x/y, +Y up
//! - window px: origin top-left, +Y down (what the platform reports)
//!
//! Depth follows the wgpu convention: NDC z in `[0, 1]`.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::error::ProjectionError;

/// View + projection pair used to map model space to clip space.
///
/// The 2D demos use [`ProjectionContext::IDENTITY`], in which case NDC and
/// world x/y coincide.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectionContext {
    pub view: Mat4,
    pub projection: Mat4,
}

impl ProjectionContext {
    pub const IDENTITY: Self = Self {
        view: Mat4::IDENTITY,
        projection: Mat4::IDENTITY,
    };

    #[inline]
    pub const fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    /// Right-handed perspective camera looking from `eye` at `target` (+Y up).
    ///
    /// `aspect` must come from the live window size; a stale aspect skews the
    /// hit-test geometry relative to what is on screen.
    pub fn perspective(
        eye: Vec3,
        target: Vec3,
        fov_y_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Self {
            view: Mat4::look_at_rh(eye, target, Vec3::Y),
            projection: Mat4::perspective_rh(fov_y_degrees.to_radians(), aspect, near, far),
        }
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Full model-view-projection for a model matrix.
    #[inline]
    pub fn mvp(&self, model: Mat4) -> Mat4 {
        self.view_projection() * model
    }
}

impl Default for ProjectionContext {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Projects a local-space vertex into NDC x/y.
pub fn project(vertex: Vec3, mvp: Mat4) -> Result<Vec2, ProjectionError> {
    let clip = mvp * vertex.extend(1.0);
    if clip.w == 0.0 {
        return Err(ProjectionError::ZeroW);
    }

    let ndc = clip.truncate() / clip.w;
    if !ndc.is_finite() {
        return Err(ProjectionError::NonFinite);
    }

    Ok(Vec2::new(ndc.x, ndc.y))
}

/// Projects every vertex of a ring, dropping the ones that cannot be projected.
///
/// Order of the surviving vertices is preserved.
pub fn project_ring(vertices: &[Vec3], mvp: Mat4) -> Vec<Vec2> {
    vertices
        .iter()
        .enumerate()
        .filter_map(|(i, v)| match project(*v, mvp) {
            Ok(p) => Some(p),
            Err(e) => {
                log::trace!("vertex {i} excluded from hit test: {e}");
                None
            }
        })
        .collect()
}

/// Projects every vertex, keeping index positions stable.
///
/// Used for indexed geometry, where dropping a vertex would shift every index
/// after it.
pub fn project_each(vertices: &[Vec3], mvp: Mat4) -> Vec<Option<Vec2>> {
    vertices
        .iter()
        .enumerate()
        .map(|(i, v)| {
            project(*v, mvp)
                .map_err(|e| log::trace!("vertex {i} excluded from hit test: {e}"))
                .ok()
        })
        .collect()
}

/// Converts a window pixel position to NDC using the current window size.
///
/// Returns `None` for a zero-sized or non-finite window (minimized windows
/// report 0x0 on some platforms).
pub fn pixel_to_ndc(px: f32, py: f32, width: f32, height: f32) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return None;
    }

    let x = px / (width * 0.5) - 1.0;
    let y = 1.0 - py / (height * 0.5);
    Some(Vec2::new(x, y))
}

/// Casts the ray under an NDC point and intersects it with the plane `z = plane_z`.
///
/// `inverse_view_projection` maps NDC back to world space. The ray runs from
/// the near plane (NDC z = 0) to the far plane (NDC z = 1).
///
/// Returns `None` when the matrix is singular or the ray is parallel to the plane.
pub fn unproject_to_plane(ndc: Vec2, inverse_view_projection: Mat4, plane_z: f32) -> Option<Vec3> {
    let near = unproject_point(ndc, 0.0, inverse_view_projection)?;
    let far = unproject_point(ndc, 1.0, inverse_view_projection)?;

    let dir = far - near;
    if dir.z.abs() <= f32::EPSILON {
        return None;
    }

    let t = (plane_z - near.z) / dir.z;
    let hit = near + dir * t;
    hit.is_finite().then_some(hit)
}

fn unproject_point(ndc: Vec2, depth: f32, inverse_view_projection: Mat4) -> Option<Vec3> {
    let p = inverse_view_projection * Vec4::new(ndc.x, ndc.y, depth, 1.0);
    if p.w == 0.0 {
        return None;
    }
    let p = p.truncate() / p.w;
    p.is_finite().then_some(p)
}
