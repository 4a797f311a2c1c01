//! Focus acquisition for the keycode widget.
//!
//! The capture surface (the underlying input primitive) may not exist yet
//! when the widget is constructed — the host app attaches it whenever its
//! own setup completes. [`FocusDriver`] bridges that gap with a bounded
//! retry: while polling, the widget declares an interval subscription, and
//! each tick either acquires focus or counts toward giving up. Because the
//! subscription is only declared while the driver is in [`FocusState::Polling`],
//! the runtime's subscription diffing aborts the timer on every exit path —
//! success, give-up, or teardown.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Period of the focus-retry timer.
pub const RETRY_INTERVAL: Duration = Duration::from_millis(100);

/// Failed ticks tolerated before the driver gives up.
pub const MAX_TRIES: u8 = 10;

/// Focus-acquisition state. `Focused` and `GaveUp` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    /// Not attempting to acquire focus.
    Idle,
    /// Waiting for the capture surface, counting failed ticks.
    Polling {
        /// Ticks that found no surface so far.
        tries: u8,
    },
    /// Focus was requested on the surface; the retry timer is gone.
    Focused,
    /// The surface never appeared; the retry timer is gone.
    GaveUp,
}

#[derive(Debug, Default)]
struct SurfaceShared {
    focused: AtomicBool,
    requests: AtomicUsize,
}

/// A shared handle to the capture surface.
///
/// Cloning yields another handle to the same surface, so the host app can
/// hold one (the widget hands it out from `attach_surface`) and steer focus
/// from outside the widget.
#[derive(Debug, Clone, Default)]
pub struct SurfaceHandle {
    shared: Arc<SurfaceShared>,
}

impl SurfaceHandle {
    /// Create a new, unfocused surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request keyboard focus on the surface.
    pub fn request_focus(&self) {
        self.shared.requests.fetch_add(1, Ordering::Relaxed);
        self.shared.focused.store(true, Ordering::Relaxed);
    }

    /// Drop keyboard focus.
    pub fn blur(&self) {
        self.shared.focused.store(false, Ordering::Relaxed);
    }

    /// Whether the surface currently has focus.
    pub fn is_focused(&self) -> bool {
        self.shared.focused.load(Ordering::Relaxed)
    }

    /// Total number of focus requests issued against this surface.
    pub fn focus_requests(&self) -> usize {
        self.shared.requests.load(Ordering::Relaxed)
    }
}

/// The bounded focus-retry state machine.
///
/// `Idle -> Polling -> Focused` on success, `Idle -> Polling -> GaveUp` when
/// the surface never shows up. Ticks arriving outside `Polling` are ignored.
#[derive(Debug)]
pub struct FocusDriver {
    state: FocusState,
    interval: Duration,
    max_tries: u8,
}

impl FocusDriver {
    /// Create an idle driver with the default interval and retry budget.
    pub fn new() -> Self {
        Self {
            state: FocusState::Idle,
            interval: RETRY_INTERVAL,
            max_tries: MAX_TRIES,
        }
    }

    /// Override the retry interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Start (or restart) polling for the surface.
    pub fn begin(&mut self) {
        self.state = FocusState::Polling { tries: 0 };
    }

    /// Stop polling without focusing.
    pub fn cancel(&mut self) {
        self.state = FocusState::Idle;
    }

    /// Process one retry tick.
    ///
    /// If a surface is available, issues exactly one focus request and moves
    /// to `Focused`; otherwise counts the failure and moves to `GaveUp` once
    /// the budget is spent. Returns `true` iff focus was acquired this tick.
    pub fn tick(&mut self, surface: Option<&SurfaceHandle>) -> bool {
        let FocusState::Polling { tries } = self.state else {
            return false;
        };
        match surface {
            Some(handle) => {
                handle.request_focus();
                self.state = FocusState::Focused;
                true
            }
            None => {
                let tries = tries + 1;
                self.state = if tries >= self.max_tries {
                    FocusState::GaveUp
                } else {
                    FocusState::Polling { tries }
                };
                false
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Whether the retry timer should currently be running.
    pub fn polling(&self) -> bool {
        matches!(self.state, FocusState::Polling { .. })
    }

    /// The retry interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FocusDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_ignores_ticks() {
        let mut driver = FocusDriver::new();
        let surface = SurfaceHandle::new();
        assert!(!driver.tick(Some(&surface)));
        assert_eq!(driver.state(), FocusState::Idle);
        assert_eq!(surface.focus_requests(), 0);
    }

    #[test]
    fn surface_available_immediately() {
        let mut driver = FocusDriver::new();
        let surface = SurfaceHandle::new();
        driver.begin();
        assert!(driver.tick(Some(&surface)));
        assert_eq!(driver.state(), FocusState::Focused);
        assert!(surface.is_focused());
        assert_eq!(surface.focus_requests(), 1);
        // Terminal state: no more polling, later ticks are no-ops
        assert!(!driver.polling());
        assert!(!driver.tick(Some(&surface)));
        assert_eq!(surface.focus_requests(), 1);
    }

    #[test]
    fn surface_appearing_late_still_focuses() {
        let mut driver = FocusDriver::new();
        let surface = SurfaceHandle::new();
        driver.begin();
        for _ in 0..9 {
            assert!(!driver.tick(None));
        }
        assert!(driver.polling());
        assert!(driver.tick(Some(&surface)));
        assert_eq!(driver.state(), FocusState::Focused);
        assert_eq!(surface.focus_requests(), 1);
    }

    #[test]
    fn gives_up_after_max_tries_with_zero_requests() {
        let mut driver = FocusDriver::new();
        driver.begin();
        for _ in 0..MAX_TRIES {
            driver.tick(None);
        }
        assert_eq!(driver.state(), FocusState::GaveUp);
        // Further ticks stay put even if a surface shows up now
        let surface = SurfaceHandle::new();
        assert!(!driver.tick(Some(&surface)));
        assert_eq!(driver.state(), FocusState::GaveUp);
        assert_eq!(surface.focus_requests(), 0);
    }

    #[test]
    fn begin_restarts_after_give_up() {
        let mut driver = FocusDriver::new();
        driver.begin();
        for _ in 0..MAX_TRIES {
            driver.tick(None);
        }
        assert_eq!(driver.state(), FocusState::GaveUp);
        driver.begin();
        assert_eq!(driver.state(), FocusState::Polling { tries: 0 });
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut driver = FocusDriver::new();
        driver.begin();
        driver.tick(None);
        driver.cancel();
        assert_eq!(driver.state(), FocusState::Idle);
        assert!(!driver.polling());
    }

    #[test]
    fn handles_share_state() {
        let a = SurfaceHandle::new();
        let b = a.clone();
        b.request_focus();
        assert!(a.is_focused());
        a.blur();
        assert!(!b.is_focused());
        assert_eq!(a.focus_requests(), 1);
    }
}
