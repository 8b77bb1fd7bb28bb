use std::time::Instant;

use super::timer::TickTimer;

/// Edge reported when the window stops or starts being drawable.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VisibilityChange {
    Hidden,
    Shown,
}

/// Tracks whether the window can be seen and gates the redraw timer on it.
///
/// Platforms disagree on how minimizing is reported: Windows sends a 0×0
/// resize, X11/Wayland/macOS only report occlusion. Either source hides the
/// window; it is shown again once both have cleared.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Visibility {
    minimized: bool,
    occluded: bool,
}

impl Visibility {
    pub fn new(minimized: bool) -> Self {
        Self {
            minimized,
            occluded: false,
        }
    }

    #[inline]
    pub fn is_hidden(self) -> bool {
        self.minimized || self.occluded
    }

    /// Records the minimized state seen on a resize.
    pub fn set_minimized(&mut self, minimized: bool, timer: &mut TickTimer, now: Instant) -> Option<VisibilityChange> {
        self.transition(timer, now, |v| v.minimized = minimized)
    }

    /// Records a `WindowEvent::Occluded` report.
    pub fn set_occluded(&mut self, occluded: bool, timer: &mut TickTimer, now: Instant) -> Option<VisibilityChange> {
        self.transition(timer, now, |v| v.occluded = occluded)
    }

    fn transition(
        &mut self,
        timer: &mut TickTimer,
        now: Instant,
        apply: impl FnOnce(&mut Self),
    ) -> Option<VisibilityChange> {
        let was_hidden = self.is_hidden();
        apply(self);

        match (was_hidden, self.is_hidden()) {
            (false, true) => {
                timer.stop();
                log::debug!("window hidden; redraw timer paused");
                Some(VisibilityChange::Hidden)
            }
            (true, false) => {
                timer.start(now);
                log::debug!("window shown; redraw timer resumed");
                Some(VisibilityChange::Shown)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const MS_10: Duration = Duration::from_millis(10);

    fn running_timer(now: Instant) -> TickTimer {
        let mut t = TickTimer::new(MS_10);
        t.start(now);
        t
    }

    #[test]
    fn minimize_stops_the_timer() {
        let t0 = Instant::now();
        let mut timer = running_timer(t0);
        let mut vis = Visibility::default();

        assert_eq!(vis.set_minimized(true, &mut timer, t0), Some(VisibilityChange::Hidden));
        assert!(vis.is_hidden());
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn restore_restarts_the_timer_from_now() {
        let t0 = Instant::now();
        let mut timer = running_timer(t0);
        let mut vis = Visibility::default();
        vis.set_minimized(true, &mut timer, t0);

        let t1 = t0 + Duration::from_secs(10);
        assert_eq!(vis.set_minimized(false, &mut timer, t1), Some(VisibilityChange::Shown));
        assert_eq!(timer.deadline(), Some(t1 + MS_10));
    }

    #[test]
    fn repeated_minimize_is_not_a_transition() {
        let t0 = Instant::now();
        let mut timer = running_timer(t0);
        let mut vis = Visibility::default();
        vis.set_minimized(true, &mut timer, t0);

        assert_eq!(vis.set_minimized(true, &mut timer, t0), None);
        assert!(!timer.is_running());
    }

    #[test]
    fn plain_resize_while_shown_leaves_the_timer_alone() {
        let t0 = Instant::now();
        let mut timer = running_timer(t0);
        let mut vis = Visibility::default();

        assert_eq!(vis.set_minimized(false, &mut timer, t0 + MS_10), None);
        assert_eq!(timer.deadline(), Some(t0 + MS_10));
    }

    // ── occlusion ─────────────────────────────────────────────────────────

    #[test]
    fn occlusion_alone_hides_the_window() {
        let t0 = Instant::now();
        let mut timer = running_timer(t0);
        let mut vis = Visibility::default();

        assert_eq!(vis.set_occluded(true, &mut timer, t0), Some(VisibilityChange::Hidden));
        assert!(!timer.is_running());

        assert_eq!(vis.set_occluded(false, &mut timer, t0), Some(VisibilityChange::Shown));
        assert!(timer.is_running());
    }

    #[test]
    fn stays_hidden_until_both_sources_clear() {
        let t0 = Instant::now();
        let mut timer = running_timer(t0);
        let mut vis = Visibility::default();

        vis.set_minimized(true, &mut timer, t0);
        assert_eq!(vis.set_occluded(true, &mut timer, t0), None);
        assert_eq!(vis.set_minimized(false, &mut timer, t0), None);
        assert!(vis.is_hidden());
        assert!(!timer.is_running());

        assert_eq!(vis.set_occluded(false, &mut timer, t0), Some(VisibilityChange::Shown));
        assert!(!vis.is_hidden());
    }

    #[test]
    fn starting_minimized_is_hidden() {
        assert!(Visibility::new(true).is_hidden());
        assert!(!Visibility::new(false).is_hidden());
    }
}
