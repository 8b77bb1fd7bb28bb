/// Axis-aligned viewport bounds (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Bounds anchored at the origin.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// Integer rectangle used for drawing.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

/// Moving rectangle with double-precision position and size.
///
/// State stays real-valued; rounding happens only in [`Sprite::nearest`] so
/// sub-pixel motion accumulates without drift.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal speed in pixels per second.
    pub velocity: f64,
}

impl Sprite {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, velocity: f64) -> Self {
        Self { x, y, width, height, velocity }
    }

    /// Displacement = velocity × delta time.
    #[inline]
    pub fn advance(&mut self, elapsed_secs: f64) {
        self.x += self.velocity * elapsed_secs;
    }

    /// Once the sprite is strictly past `viewport_right`, it reappears just
    /// off the left edge so it slides back in.
    #[inline]
    pub fn wraparound(&mut self, viewport_right: f64, viewport_left: f64) {
        if self.x > viewport_right {
            self.x = viewport_left - self.width;
        }
    }

    #[inline]
    pub fn center_vertically(&mut self, viewport_height: f64) {
        self.y = viewport_height / 2.0 - self.height / 2.0;
    }

    /// Rounds to the nearest integers (halves away from zero).
    pub fn nearest(&self) -> PixelRect {
        PixelRect {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            width: self.width.round() as i32,
            height: self.height.round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(x: f64) -> Sprite {
        Sprite::new(x, 0.0, 256.0, 256.0, 64.0)
    }

    // ── advance ───────────────────────────────────────────────────────────

    #[test]
    fn advance_adds_velocity_times_elapsed() {
        for &(v, dt) in &[(64.0, 1.0), (32.0, 0.5), (64.0, 0.01), (100.0, 0.0)] {
            let mut s = Sprite::new(10.0, 0.0, 256.0, 256.0, v);
            s.advance(dt);
            assert_eq!(s.x, 10.0 + v * dt);
        }
    }

    #[test]
    fn advance_keeps_sub_pixel_progress() {
        let mut s = sprite(0.0);
        for _ in 0..100 {
            s.advance(0.001);
        }
        assert!((s.x - 6.4).abs() < 1e-9);
    }

    // ── wraparound ────────────────────────────────────────────────────────

    #[test]
    fn wraparound_past_right_edge_moves_to_left_minus_width() {
        let mut s = sprite(801.0);
        s.wraparound(800.0, 0.0);
        assert_eq!(s.x, -256.0);
    }

    #[test]
    fn wraparound_flush_with_right_edge_is_not_wrapped() {
        let mut s = sprite(800.0);
        s.wraparound(800.0, 0.0);
        assert_eq!(s.x, 800.0);
    }

    #[test]
    fn wraparound_inside_is_unchanged() {
        let mut s = sprite(-100.0);
        s.wraparound(800.0, 0.0);
        assert_eq!(s.x, -100.0);
    }

    #[test]
    fn wraparound_respects_non_zero_left() {
        let mut s = sprite(1000.0);
        s.wraparound(900.0, 100.0);
        assert_eq!(s.x, 100.0 - 256.0);
    }

    #[test]
    fn advance_then_wrap_scenario() {
        let mut s = sprite(750.0);
        s.advance(1.0);
        assert_eq!(s.x, 814.0);
        s.wraparound(800.0, 0.0);
        assert_eq!(s.x, -256.0);
    }

    // ── center_vertically ─────────────────────────────────────────────────

    #[test]
    fn center_vertically_is_idempotent() {
        let mut s = sprite(0.0);
        s.center_vertically(600.0);
        let first = s.y;
        s.center_vertically(600.0);
        assert_eq!(first, 172.0);
        assert_eq!(s.y, first);
    }

    #[test]
    fn center_vertically_can_go_negative_in_short_viewports() {
        let mut s = sprite(0.0);
        s.center_vertically(100.0);
        assert_eq!(s.y, -78.0);
    }

    // ── nearest ───────────────────────────────────────────────────────────

    #[test]
    fn nearest_rounds_each_component() {
        let s = Sprite::new(10.4, 20.6, 255.5, 99.49, 0.0);
        assert_eq!(s.nearest(), PixelRect::new(10, 21, 256, 99));
    }

    #[test]
    fn nearest_rounds_halves_away_from_zero() {
        let s = Sprite::new(-2.5, 2.5, 1.0, 1.0, 0.0);
        let r = s.nearest();
        assert_eq!(r.x, -3);
        assert_eq!(r.y, 3);
    }

    #[test]
    fn nearest_does_not_mutate_state() {
        let s = Sprite::new(0.4, 0.4, 10.0, 10.0, 0.0);
        let _ = s.nearest();
        assert_eq!(s.x, 0.4);
    }

    // ── Bounds ────────────────────────────────────────────────────────────

    #[test]
    fn bounds_edges() {
        let b = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(b.right(), 110.0);
        assert_eq!(b.bottom(), 70.0);
    }
}
