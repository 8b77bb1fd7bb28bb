/// Point or extent in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at integer pixel coordinates.
    #[inline]
    pub fn from_pixels(x: i32, y: i32) -> Self {
        Self::new(x as f32, y as f32)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_keeps_negative_coordinates() {
        assert_eq!(Vec2::from_pixels(-256, 525), Vec2::new(-256.0, 525.0));
    }

    #[test]
    fn is_finite_rejects_infinity() {
        assert!(Vec2::new(1.0, 2.0).is_finite());
        assert!(!Vec2::new(f32::INFINITY, 0.0).is_finite());
    }
}
