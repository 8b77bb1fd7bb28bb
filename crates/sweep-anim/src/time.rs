use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of frame timestamps.
///
/// Implementations must be cheap to clone: the clock and the frame counter
/// each hold their own handle to the same source.
pub trait TimeSource: Clone {
    fn now(&self) -> Instant;
}

/// Wall-clock time source backed by the monotonic `Instant`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced time source.
///
/// All clones share the same offset, so advancing one handle moves every
/// consumer. Useful for deterministic replays and tests.
#[derive(Debug, Clone)]
pub struct ManualTime {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Moves time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Sets the elapsed time since the origin. Earlier values are ignored so
    /// time never runs backwards.
    pub fn set_elapsed(&self, elapsed: Duration) {
        if elapsed > self.offset.get() {
            self.offset.set(elapsed);
        }
    }

    /// [`set_elapsed`](Self::set_elapsed) in seconds. Negative, NaN and
    /// out-of-range values are ignored.
    pub fn set_secs(&self, secs: f64) {
        if let Ok(elapsed) = Duration::try_from_secs_f64(secs) {
            self.set_elapsed(elapsed);
        }
    }

    /// Time elapsed since the origin.
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }

    /// The fixed instant that corresponds to an elapsed time of zero.
    pub fn origin(&self) -> Instant {
        self.origin
    }
}

impl Default for ManualTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for ManualTime {
    #[inline]
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

/// Delta-time clock.
///
/// Tracks the timestamps of the last two frames. Call [`Clock::update`]
/// exactly once per tick, before anything consumes [`Clock::elapsed`].
#[derive(Debug, Clone)]
pub struct Clock<T: TimeSource> {
    source: T,
    last_frame: Instant,
    current_frame: Instant,
    elapsed: Duration,
}

impl<T: TimeSource> Clock<T> {
    /// Creates a clock whose baseline is the current time of `source`.
    pub fn new(source: T) -> Self {
        let now = source.now();
        Self {
            source,
            last_frame: now,
            current_frame: now,
            elapsed: Duration::ZERO,
        }
    }

    /// Samples the time source and recomputes the elapsed time.
    ///
    /// The source is monotonic and subtraction saturates, so the result is
    /// never negative.
    pub fn update(&mut self) -> Duration {
        self.current_frame = self.source.now();
        self.elapsed = self.current_frame.saturating_duration_since(self.last_frame);
        self.last_frame = self.current_frame;
        self.elapsed
    }

    /// Elapsed time computed by the most recent [`update`](Self::update).
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    #[inline]
    pub fn current_frame(&self) -> Instant {
        self.current_frame
    }

    #[inline]
    pub fn last_frame(&self) -> Instant {
        self.last_frame
    }

    /// Moves the baseline to now so the next update does not see the gap.
    pub fn reset(&mut self) {
        let now = self.source.now();
        self.last_frame = now;
        self.current_frame = now;
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── ManualTime ────────────────────────────────────────────────────────

    #[test]
    fn manual_time_clones_share_offset() {
        let a = ManualTime::new();
        let b = a.clone();
        a.advance(Duration::from_millis(250));
        assert_eq!(b.elapsed(), Duration::from_millis(250));
        assert_eq!(b.now(), a.origin() + Duration::from_millis(250));
    }

    #[test]
    fn manual_time_never_runs_backwards() {
        let t = ManualTime::new();
        t.set_secs(2.0);
        t.set_secs(1.0);
        assert_eq!(t.elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn manual_time_ignores_invalid_seconds() {
        let t = ManualTime::new();
        t.set_secs(0.5);
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            t.set_secs(bad);
        }
        assert_eq!(t.elapsed(), Duration::from_millis(500));
    }

    // ── Clock ─────────────────────────────────────────────────────────────

    #[test]
    fn first_update_measures_from_construction() {
        let t = ManualTime::new();
        let mut clock = Clock::new(t.clone());
        t.advance(Duration::from_millis(16));
        assert_eq!(clock.update(), Duration::from_millis(16));
    }

    #[test]
    fn update_measures_between_consecutive_calls() {
        let t = ManualTime::new();
        let mut clock = Clock::new(t.clone());

        t.advance(Duration::from_millis(10));
        clock.update();
        t.advance(Duration::from_millis(30));
        let dt = clock.update();

        assert_eq!(dt, Duration::from_millis(30));
        assert_eq!(clock.elapsed(), Duration::from_millis(30));
        assert_eq!(clock.last_frame(), clock.current_frame());
    }

    #[test]
    fn update_without_time_passing_is_zero() {
        let t = ManualTime::new();
        let mut clock = Clock::new(t.clone());
        clock.update();
        assert_eq!(clock.update(), Duration::ZERO);
    }

    #[test]
    fn reset_discards_the_gap() {
        let t = ManualTime::new();
        let mut clock = Clock::new(t.clone());
        t.advance(Duration::from_secs(5));
        clock.reset();
        t.advance(Duration::from_millis(10));
        assert_eq!(clock.update(), Duration::from_millis(10));
    }

    #[test]
    fn elapsed_secs_matches_duration() {
        let t = ManualTime::new();
        let mut clock = Clock::new(t.clone());
        t.advance(Duration::from_millis(500));
        clock.update();
        assert_eq!(clock.elapsed_secs(), 0.5);
    }
}
