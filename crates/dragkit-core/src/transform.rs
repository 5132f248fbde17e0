use glam::{Mat4, Vec3};

/// Translation, rotation and scale of a draggable shape.
///
/// Rotation is stored as per-axis Euler angles in radians. 2D shapes only use
/// the Z component (the in-plane angle).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Model matrix `T * Rz * Ry * Rx * S`.
    ///
    /// Vertices are scaled first, then rotated about X, Y, Z in that order,
    /// then translated. Changing this order changes what users see.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_scale(self.scale)
    }

    /// Rotation in degrees, as shown on the control panel.
    pub fn rotation_degrees(&self) -> Vec3 {
        Vec3::new(
            self.rotation.x.to_degrees(),
            self.rotation.y.to_degrees(),
            self.rotation.z.to_degrees(),
        )
    }

    pub fn set_rotation_degrees(&mut self, degrees: Vec3) {
        self.rotation = Vec3::new(
            degrees.x.to_radians(),
            degrees.y.to_radians(),
            degrees.z.to_radians(),
        );
    }

    /// Back to identity (no translation, no rotation, unit scale).
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn identity_model_is_identity() {
        assert_eq!(Transform::default().model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn scale_then_rotate_then_translate() {
        let t = Transform::from_translation(Vec3::new(1.0, 0.0, 0.0))
            .with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2))
            .with_scale(Vec3::new(2.0, 1.0, 1.0));

        // (1,0,0) -> scale (2,0,0) -> rot z 90 (0,2,0) -> translate (1,2,0)
        let p = t.model_matrix().transform_point3(Vec3::X);
        assert!(close(p, Vec3::new(1.0, 2.0, 0.0)), "{p:?}");
    }

    #[test]
    fn x_rotation_applies_before_y() {
        let t = Transform::default().with_rotation(Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0));

        // Rx: (0,1,0) -> (0,0,1); then Ry: (0,0,1) -> (1,0,0).
        let p = t.model_matrix().transform_point3(Vec3::Y);
        assert!(close(p, Vec3::X), "{p:?}");
    }

    #[test]
    fn rotation_does_not_move_translation() {
        let t = Transform::from_translation(Vec3::new(0.3, -0.2, 0.0))
            .with_rotation(Vec3::new(0.4, 1.1, 2.0));
        let origin = t.model_matrix().transform_point3(Vec3::ZERO);
        assert!(close(origin, t.translation));
    }

    #[test]
    fn degrees_round_trip() {
        let mut t = Transform::default();
        t.set_rotation_degrees(Vec3::new(90.0, 180.0, 45.0));
        assert!(close(t.rotation_degrees(), Vec3::new(90.0, 180.0, 45.0)));
        assert!((t.rotation.x - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_identity() {
        let mut t = Transform::from_translation(Vec3::ONE)
            .with_rotation(Vec3::ONE)
            .with_scale(Vec3::splat(3.0));
        t.reset();
        assert_eq!(t, Transform::IDENTITY);
    }
}
