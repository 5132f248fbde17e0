use glam::Vec2;

/// Drawable size in logical pixels.
///
/// The rect shader maps logical px to NDC with this size; the demos use it as
/// the basis for pixel→NDC pointer conversion.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Width over height, or `None` while the window has no area.
    #[inline]
    pub fn aspect(self) -> Option<f32> {
        self.is_valid().then(|| self.width / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_valid_viewport() {
        assert_eq!(Viewport::new(800.0, 600.0).aspect(), Some(800.0 / 600.0));
    }

    #[test]
    fn minimized_viewport_has_no_aspect() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert_eq!(Viewport::new(800.0, 0.0).aspect(), None);
        assert_eq!(Viewport::new(f32::NAN, 10.0).aspect(), None);
    }
}
