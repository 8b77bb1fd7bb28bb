use std::time::{Duration, Instant};

use crate::time::TimeSource;

const WINDOW: Duration = Duration::from_secs(1);

/// Counts presented frames over one-second windows.
///
/// The label only changes when a window closes. The update that closes a
/// window publishes the count and restarts the window without counting
/// itself, so it belongs to neither window.
#[derive(Debug, Clone)]
pub struct FrameCounter<T: TimeSource> {
    source: T,
    count: u32,
    window_start: Instant,
    label: Option<String>,
}

impl<T: TimeSource> FrameCounter<T> {
    pub fn new(source: T) -> Self {
        let window_start = source.now();
        Self {
            source,
            count: 0,
            window_start,
            label: None,
        }
    }

    /// Records one frame. Returns the new label when a window closed.
    pub fn update(&mut self) -> Option<&str> {
        let now = self.source.now();
        let elapsed = now.saturating_duration_since(self.window_start);

        if elapsed < WINDOW {
            self.count += 1;
            return None;
        }

        log::trace!("frame window closed: {} frames in {elapsed:?}", self.count);
        self.label = Some(format!("{} FPS", self.count));
        self.count = 0;
        self.window_start = now;
        self.label.as_deref()
    }

    /// Frames counted in the current window so far.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn window_start(&self) -> Instant {
        self.window_start
    }

    /// Most recently published label, if any window has closed yet.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// On-screen FPS readout.
#[derive(Debug, Clone, PartialEq)]
pub struct FpsDisplay {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

impl FpsDisplay {
    /// Text shown before the first window closes.
    pub const PLACEHOLDER: &'static str = "--";

    pub fn new() -> Self {
        Self {
            text: Self::PLACEHOLDER.to_string(),
            x: 0,
            y: 0,
        }
    }

    /// Anchors the label `margin` pixels above the bottom edge; x is kept.
    /// Fractional bottoms round like every other draw coordinate.
    pub fn anchor_bottom(&mut self, viewport_bottom: f64, margin: i32) {
        self.y = viewport_bottom.round() as i32 - margin;
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }
}

impl Default for FpsDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualTime;

    // ── FrameCounter ──────────────────────────────────────────────────────

    #[test]
    fn counts_frames_inside_the_window() {
        let t = ManualTime::new();
        let mut fc = FrameCounter::new(t.clone());

        for (i, secs) in [0.2, 0.4, 0.6, 0.8].into_iter().enumerate() {
            t.set_secs(secs);
            assert_eq!(fc.update(), None);
            assert_eq!(fc.count(), i as u32 + 1);
        }
        assert_eq!(fc.label(), None);
    }

    #[test]
    fn crossing_the_window_publishes_and_resets() {
        let t = ManualTime::new();
        let mut fc = FrameCounter::new(t.clone());

        for secs in [0.2, 0.4, 0.6, 0.8] {
            t.set_secs(secs);
            fc.update();
        }

        t.set_secs(1.1);
        assert_eq!(fc.update(), Some("4 FPS"));
        assert_eq!(fc.count(), 0);
        assert_eq!(fc.window_start(), t.origin() + Duration::from_secs_f64(1.1));
        assert_eq!(fc.label(), Some("4 FPS"));
    }

    #[test]
    fn boundary_frame_is_not_counted_in_the_next_window() {
        let t = ManualTime::new();
        let mut fc = FrameCounter::new(t.clone());

        t.set_secs(1.0);
        assert_eq!(fc.update(), Some("0 FPS"));
        assert_eq!(fc.count(), 0);

        t.set_secs(1.5);
        fc.update();
        assert_eq!(fc.count(), 1);
    }

    #[test]
    fn window_closes_at_exactly_one_second() {
        let t = ManualTime::new();
        let mut fc = FrameCounter::new(t.clone());

        t.set_elapsed(Duration::from_millis(999));
        assert_eq!(fc.update(), None);

        t.set_elapsed(Duration::from_millis(1000));
        assert_eq!(fc.update(), Some("1 FPS"));
    }

    #[test]
    fn label_is_kept_between_windows() {
        let t = ManualTime::new();
        let mut fc = FrameCounter::new(t.clone());

        t.set_secs(0.5);
        fc.update();
        t.set_secs(1.0);
        fc.update();

        t.set_secs(1.2);
        assert_eq!(fc.update(), None);
        assert_eq!(fc.label(), Some("1 FPS"));
    }

    #[test]
    fn steady_hundred_hertz_reports_ninety_nine() {
        let t = ManualTime::new();
        let mut fc = FrameCounter::new(t.clone());

        let mut published = None;
        for _ in 0..100 {
            t.advance(Duration::from_millis(10));
            if let Some(label) = fc.update() {
                published = Some(label.to_string());
            }
        }
        // Frames at 10..990 ms are counted; the one at 1000 ms closes the window.
        assert_eq!(published.as_deref(), Some("99 FPS"));
    }

    // ── FpsDisplay ────────────────────────────────────────────────────────

    #[test]
    fn display_starts_with_placeholder() {
        let d = FpsDisplay::new();
        assert_eq!(d.text, "--");
        assert_eq!((d.x, d.y), (0, 0));
    }

    #[test]
    fn anchor_bottom_keeps_x() {
        let mut d = FpsDisplay::new();
        d.x = 12;
        d.anchor_bottom(600.0, 75);
        assert_eq!((d.x, d.y), (12, 525));
    }

    #[test]
    fn anchor_bottom_rounds_fractional_bottoms() {
        let mut d = FpsDisplay::new();
        d.anchor_bottom(599.6, 75);
        assert_eq!(d.y, 525);
        d.anchor_bottom(600.4, 75);
        assert_eq!(d.y, 525);
    }
}
