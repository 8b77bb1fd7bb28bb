use std::time::Duration;

use crate::mover::Sprite;

/// Straight sRGB color, 8 bits per channel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const CHARTREUSE: Rgb8 = Rgb8::new(127, 255, 0);
    pub const MEDIUM_SPRING_GREEN: Rgb8 = Rgb8::new(0, 250, 154);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Tunables for the sweep animation.
///
/// Defaults reproduce the classic demo: a 256×256 chartreuse square moving
/// at 64 px/s over black, redrawn every 10 ms.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    pub title: String,

    /// Initial `(x, y, width, height)` of the rectangle.
    pub initial_rect: (f64, f64, f64, f64),

    /// Horizontal speed in pixels per second.
    pub velocity: f64,

    /// Redraw timer period.
    pub tick_interval: Duration,

    pub background: Rgb8,
    pub rect_color: Rgb8,
    pub fps_color: Rgb8,

    /// FPS label size in pixels (25 pt at 96 dpi).
    pub fps_font_size: f32,

    /// Distance from the viewport bottom to the FPS label's top edge.
    pub fps_bottom_margin: i32,

    /// Back-buffer size limit used when the primary display cannot be queried.
    pub fallback_buffer_size: (u32, u32),

    pub start_maximized: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            title: "Animation - Sweep".to_string(),
            initial_rect: (0.0, 0.0, 256.0, 256.0),
            velocity: 64.0,
            tick_interval: Duration::from_millis(10),
            background: Rgb8::BLACK,
            rect_color: Rgb8::CHARTREUSE,
            fps_color: Rgb8::MEDIUM_SPRING_GREEN,
            fps_font_size: 33.0,
            fps_bottom_margin: 75,
            fallback_buffer_size: (1280, 720),
            start_maximized: true,
        }
    }
}

impl AnimationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn initial_rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.initial_rect = (x, y, width, height);
        self
    }

    pub fn velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn fps_font_size(mut self, size: f32) -> Self {
        self.fps_font_size = size;
        self
    }

    pub fn start_maximized(mut self, maximized: bool) -> Self {
        self.start_maximized = maximized;
        self
    }

    /// Builds the rectangle described by `initial_rect` and `velocity`.
    pub fn sprite(&self) -> Sprite {
        let (x, y, w, h) = self.initial_rect;
        Sprite::new(x, y, w, h, self.velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_demo() {
        let c = AnimationConfig::default();
        assert_eq!(c.initial_rect, (0.0, 0.0, 256.0, 256.0));
        assert_eq!(c.velocity, 64.0);
        assert_eq!(c.tick_interval, Duration::from_millis(10));
        assert_eq!(c.background, Rgb8::BLACK);
        assert_eq!(c.fallback_buffer_size, (1280, 720));
    }

    #[test]
    fn builder_overrides_fields() {
        let c = AnimationConfig::new()
            .velocity(32.0)
            .initial_rect(5.0, 6.0, 7.0, 8.0)
            .tick_interval(Duration::from_millis(16));
        assert_eq!(c.sprite(), Sprite::new(5.0, 6.0, 7.0, 8.0, 32.0));
        assert_eq!(c.tick_interval, Duration::from_millis(16));
    }
}
