use std::time::{Duration, Instant};

/// Fixed-period tick source, armed only while a round runs.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arms the ticker; the first tick fires one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Disarms the ticker. Pending ticks are dropped.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Arms the ticker when a round starts running and disarms it when the
    /// round stops, so no tick outlives the round it belongs to.
    pub fn sync(&mut self, running: bool, now: Instant) {
        match (running, self.is_armed()) {
            (true, false) => self.start(now),
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns how long until the next tick, or `None` while disarmed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Consumes the tick due at `now`, if any.
    ///
    /// A loop that fell behind by several periods fires once and resumes one
    /// interval later instead of replaying the missed ticks.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_due = Some(next);
        true
    }
}
