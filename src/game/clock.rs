use std::time::{Duration, Instant};

/// A tick handed out by a [`Clock`]. Carries the session it was scheduled for,
/// so a tick that outlives its session can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    session: u64,
}

impl Tick {
    pub fn session(self) -> u64 {
        self.session
    }
}

/// Interval tick source for one game session.
///
/// Time is passed in rather than read, so the caller's loop owns the wall
/// clock and tests can step through time explicitly. A clock fires at most
/// once per `poll`; missed intervals are not replayed.
#[derive(Debug, Clone)]
pub struct Clock {
    session: u64,
    interval: Duration,
    next_due: Option<Instant>,
}

impl Clock {
    pub fn new(session: u64, interval: Duration) -> Self {
        Self {
            session,
            interval,
            next_due: None,
        }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn resume(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn halt(&mut self) {
        self.next_due = None;
    }

    /// Change the period. A running clock is rescheduled from `now`.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if self.is_running() {
            self.resume(now);
        }
    }

    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        let due = self.next_due?;
        if now < due {
            return None;
        }
        self.next_due = Some(now + self.interval);
        Some(Tick {
            session: self.session,
        })
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
