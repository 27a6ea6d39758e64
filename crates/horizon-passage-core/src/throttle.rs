//! Activation throttling.
//!
//! UI controls that open modal surfaces need protection against rapid repeat
//! activation: a double-tap on a select control must not open the picker
//! twice. [`ClickGate`] implements the minimum-interval guard used for this.

use std::time::{Duration, Instant};

/// The default minimum interval between accepted activations.
pub const DEFAULT_CLICK_INTERVAL: Duration = Duration::from_millis(300);

/// A minimum-interval guard on repeated control activation.
///
/// The gate accepts an activation when at least the configured interval has
/// elapsed since the last accepted one. A rejected activation is a silent
/// no-op for the caller: the user pressed twice, the control responds once.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use horizon_passage_core::ClickGate;
///
/// let mut gate = ClickGate::with_interval(Duration::from_millis(300));
/// assert!(gate.try_acquire());
/// // An immediate second press is swallowed.
/// assert!(!gate.try_acquire());
/// ```
#[derive(Debug, Clone)]
pub struct ClickGate {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl Default for ClickGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickGate {
    /// Create a gate with [`DEFAULT_CLICK_INTERVAL`].
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_CLICK_INTERVAL)
    }

    /// Create a gate with a custom minimum interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// The configured minimum interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Check whether an activation would currently be accepted.
    pub fn can_click(&self) -> bool {
        match self.last_accepted {
            Some(last) => last.elapsed() >= self.interval,
            None => true,
        }
    }

    /// Record an accepted activation.
    ///
    /// Call sites that check [`can_click`](Self::can_click) first use this to
    /// start the suppression window; most callers want
    /// [`try_acquire`](Self::try_acquire) instead.
    pub fn mark_clicked(&mut self) {
        self.last_accepted = Some(Instant::now());
    }

    /// Check and record in one step.
    ///
    /// Returns `true` and starts the suppression window if the activation is
    /// accepted, `false` if it falls inside the window of the previous one.
    pub fn try_acquire(&mut self) -> bool {
        if self.can_click() {
            self.mark_clicked();
            true
        } else {
            tracing::trace!(
                target: "horizon_passage_core::throttle",
                interval_ms = self.interval.as_millis() as u64,
                "activation suppressed"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_activation_accepted() {
        let mut gate = ClickGate::new();
        assert!(gate.can_click());
        assert!(gate.try_acquire());
    }

    #[test]
    fn test_rapid_repeat_suppressed() {
        // An hour-long window makes the second activation deterministic.
        let mut gate = ClickGate::with_interval(Duration::from_secs(3600));
        assert!(gate.try_acquire());
        assert!(!gate.try_acquire());
        assert!(!gate.can_click());
    }

    #[test]
    fn test_zero_interval_always_accepts() {
        let mut gate = ClickGate::with_interval(Duration::ZERO);
        assert!(gate.try_acquire());
        assert!(gate.try_acquire());
        assert!(gate.try_acquire());
    }

    #[test]
    fn test_split_check_and_mark() {
        let mut gate = ClickGate::with_interval(Duration::from_secs(3600));
        assert!(gate.can_click());
        // Checking alone does not start the window.
        assert!(gate.can_click());
        gate.mark_clicked();
        assert!(!gate.can_click());
    }
}
