use std::time::{Duration, Instant};

/// Fixed-interval redraw timer.
///
/// The event loop sleeps until [`deadline`](Self::deadline) and then calls
/// [`poll`](Self::poll). A late poll fires once and schedules the next tick
/// one interval after it, so a stalled loop never produces a burst.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    next: Instant,
    running: bool,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Instant::now(),
            running: false,
        }
    }

    /// Arms the timer; the first tick is one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = now + self.interval;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Returns `true` if a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running || now < self.next {
            return false;
        }
        self.next = now + self.interval;
        true
    }

    /// Next tick time, or `None` while stopped.
    pub fn deadline(&self) -> Option<Instant> {
        self.running.then_some(self.next)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_10: Duration = Duration::from_millis(10);

    #[test]
    fn new_timer_is_stopped() {
        let mut t = TickTimer::new(MS_10);
        assert!(!t.is_running());
        assert_eq!(t.deadline(), None);
        assert!(!t.poll(Instant::now() + Duration::from_secs(1)));
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut t = TickTimer::new(MS_10);
        t.start(t0);

        assert!(!t.poll(t0 + Duration::from_millis(9)));
        assert!(t.poll(t0 + MS_10));
        assert!(!t.poll(t0 + MS_10));
        assert!(t.poll(t0 + Duration::from_millis(20)));
        assert_eq!(t.deadline(), Some(t0 + Duration::from_millis(30)));
    }

    #[test]
    fn late_poll_does_not_catch_up() {
        let t0 = Instant::now();
        let mut t = TickTimer::new(MS_10);
        t.start(t0);

        let late = t0 + Duration::from_millis(100);
        assert!(t.poll(late));
        assert!(!t.poll(late));
        assert_eq!(t.deadline(), Some(late + MS_10));
    }

    #[test]
    fn stopped_timer_never_fires() {
        let t0 = Instant::now();
        let mut t = TickTimer::new(MS_10);
        t.start(t0);
        t.stop();
        assert!(!t.poll(t0 + Duration::from_secs(1)));
        assert_eq!(t.deadline(), None);
    }

    #[test]
    fn restart_schedules_from_the_new_start() {
        let t0 = Instant::now();
        let mut t = TickTimer::new(MS_10);
        t.start(t0);
        t.stop();

        let t1 = t0 + Duration::from_secs(3);
        t.start(t1);
        assert_eq!(t.deadline(), Some(t1 + MS_10));
    }
}
