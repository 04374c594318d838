use foundation::time::Time;

/// Delay between a touch-start and its committed activation, in seconds.
///
/// Long enough to outlive the platform's synthesized click for the same
/// physical tap, short enough to feel immediate. Tunable constant, not
/// user-configurable.
pub const TAP_COMMIT_DELAY_S: f64 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq)]
enum Phase {
    Idle,
    Pending { fire_at: Time },
}

/// Per-marker resolution of pointer-click vs touch-start into exactly one
/// logical activation.
///
/// Touch platforms issue a touch-start immediately followed by a synthesized
/// click for the same tap. The arbiter commits on a delayed timer armed by
/// the touch-start and swallows the click that arrives while the timer is
/// pending, while pure-pointer input activates immediately through the click
/// path.
///
/// State machine:
/// - Idle --touch_start--> Pending (timer armed; caller suppresses the
///   platform's default follow-on click)
/// - Pending --poll past deadline--> fire, back to Idle
/// - Pending --click--> swallowed (the synthesized click)
/// - Idle --click--> fire immediately
///
/// A debounce token (timestamp of the last accepted activation) additionally
/// rejects any second activation source inside the delay window, so platform
/// double-firing cannot produce two activations.
///
/// Timing is explicit: callers pass the current [`Time`] and poll the arbiter
/// from the UI loop. There is no wall clock and no thread, so tests are
/// deterministic. The arbiter never errors; every rejected input is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct InputArbiter {
    phase: Phase,
    delay_s: f64,
    last_accepted: Option<Time>,
}

impl InputArbiter {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            delay_s: TAP_COMMIT_DELAY_S,
            last_accepted: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Handles a touch-start.
    ///
    /// Returns `true` if the activation timer was armed. The caller must
    /// suppress the platform's default synthetic click either way.
    pub fn touch_start(&mut self, now: Time) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Pending {
                    fire_at: now.after(self.delay_s),
                };
                true
            }
            // Only armed from Idle; a second touch while pending is ignored.
            Phase::Pending { .. } => false,
        }
    }

    /// Handles a pointer click.
    ///
    /// Returns `true` if this click is an accepted activation. A click while
    /// the touch timer is pending is the platform's synthesized click and is
    /// swallowed.
    pub fn click(&mut self, now: Time) -> bool {
        match self.phase {
            Phase::Pending { .. } => false,
            Phase::Idle => self.accept(now),
        }
    }

    /// Advances the timer.
    ///
    /// Returns `true` exactly once when a pending activation's deadline has
    /// elapsed.
    pub fn poll(&mut self, now: Time) -> bool {
        match self.phase {
            Phase::Pending { fire_at } if now >= fire_at => {
                self.phase = Phase::Idle;
                self.accept(now)
            }
            _ => false,
        }
    }

    /// Disarms a pending timer. Idempotent; called on marker unmount so a
    /// stale timer can never fire afterwards.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    fn accept(&mut self, now: Time) -> bool {
        if let Some(last) = self.last_accepted {
            if now.since(last) < self.delay_s {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}

impl Default for InputArbiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{InputArbiter, TAP_COMMIT_DELAY_S};
    use foundation::time::Time;

    #[test]
    fn pure_pointer_click_activates_immediately() {
        let mut arbiter = InputArbiter::new();
        assert!(arbiter.click(Time(0.0)));
        assert!(!arbiter.is_pending());
    }

    #[test]
    fn touch_then_synthetic_click_activates_exactly_once() {
        let mut arbiter = InputArbiter::new();
        assert!(arbiter.touch_start(Time(0.0)));
        // The platform's synthesized click lands inside the window.
        assert!(!arbiter.click(Time(0.02)));
        // The armed timer commits the activation.
        assert!(!arbiter.poll(Time(0.05)));
        assert!(arbiter.poll(Time(TAP_COMMIT_DELAY_S)));
        // Nothing fires twice.
        assert!(!arbiter.poll(Time(0.2)));
    }

    #[test]
    fn bare_touch_activates_after_the_delay() {
        let mut arbiter = InputArbiter::new();
        arbiter.touch_start(Time(1.0));
        assert!(!arbiter.poll(Time(1.05)));
        assert!(arbiter.poll(Time(1.1)));
    }

    #[test]
    fn cancel_before_the_delay_suppresses_the_activation() {
        let mut arbiter = InputArbiter::new();
        arbiter.touch_start(Time(0.0));
        arbiter.cancel();
        arbiter.cancel(); // idempotent
        assert!(!arbiter.poll(Time(10.0)));
    }

    #[test]
    fn click_right_after_a_committed_tap_is_debounced() {
        let mut arbiter = InputArbiter::new();
        arbiter.touch_start(Time(0.0));
        assert!(arbiter.poll(Time(0.1)));
        // Late double-fire from the platform.
        assert!(!arbiter.click(Time(0.15)));
        // A genuinely new intent outside the window goes through.
        assert!(arbiter.click(Time(0.25)));
    }

    #[test]
    fn second_touch_while_pending_is_ignored() {
        let mut arbiter = InputArbiter::new();
        assert!(arbiter.touch_start(Time(0.0)));
        assert!(!arbiter.touch_start(Time(0.03)));
        assert!(arbiter.poll(Time(0.1)));
        assert!(!arbiter.poll(Time(0.13)));
    }

    #[test]
    fn rapid_double_click_yields_one_activation() {
        let mut arbiter = InputArbiter::new();
        assert!(arbiter.click(Time(0.0)));
        assert!(!arbiter.click(Time(0.04)));
        assert!(arbiter.click(Time(0.5)));
    }
}
