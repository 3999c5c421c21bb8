use std::time::{Duration, Instant};

/// What a countdown poll observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Nothing to report: stopped, or still inside the same second.
    Idle,
    /// The displayed remaining value crossed a whole-second boundary.
    Tick(u64),
    /// The deadline passed. Reported once; the clock stops itself.
    Expired,
}

/// A cancellable, restartable per-turn clock.
///
/// The clock holds a single deadline and is driven by polling from the
/// caller's loop rather than by a background thread, so expiry runs the
/// same synchronous transition path as direct input. At most one deadline
/// is active: `start` replaces any previous one.
#[derive(Debug, Clone)]
pub struct Countdown {
    deadline: Option<Instant>,
    last_reported: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Countdown {
            deadline: None,
            last_reported: 0,
        }
    }

    /// Begin counting down from `duration`, cancelling any previous deadline.
    pub fn start(&mut self, duration: Duration, now: Instant) {
        self.deadline = Some(now + duration);
        self.last_reported = duration.as_secs();
    }

    /// Stop, then start with a fresh duration.
    pub fn reset(&mut self, duration: Duration, now: Instant) {
        self.stop();
        self.start(duration, now);
    }

    /// Cancel the pending deadline. No-op when not running.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whole seconds left before expiry, rounded up; 0 when stopped or due.
    pub fn remaining(&self, now: Instant) -> u64 {
        match self.deadline {
            None => 0,
            Some(deadline) => {
                let left = deadline.saturating_duration_since(now);
                left.as_millis().div_ceil(1000) as u64
            }
        }
    }

    /// Observe the clock at `now`.
    ///
    /// Returns `Expired` exactly once when the deadline has passed (the
    /// clock stops itself first, so a stale deadline cannot fire again),
    /// `Tick` when the remaining whole-second value changed since the last
    /// poll, and `Idle` otherwise.
    pub fn poll(&mut self, now: Instant) -> CountdownEvent {
        let Some(deadline) = self.deadline else {
            return CountdownEvent::Idle;
        };

        if now >= deadline {
            self.stop();
            return CountdownEvent::Expired;
        }

        let remaining = self.remaining(now);
        if remaining != self.last_reported {
            self.last_reported = remaining;
            CountdownEvent::Tick(remaining)
        } else {
            CountdownEvent::Idle
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
