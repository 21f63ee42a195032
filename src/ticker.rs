use std::time::{Duration, Instant};

/// Countdown tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1_000;

/// Upper bound on how long the event loop may block waiting for input
pub const MAX_POLL_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Owned, cancellable repeating timer.
///
/// The event loop asks it how long it may block and how many periods have
/// passed; nothing ticks once the handle is cancelled or dropped.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
    cancelled: bool,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    /// Start a ticker whose first period ends one `period` after `start`
    pub fn starting_at(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next_due: start + period,
            cancelled: false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop all future ticks
    pub fn cancel(&mut self) {
        if !self.cancelled {
            self.cancelled = true;
            tracing::debug!("ticker cancelled");
        }
    }

    /// How long the caller may wait for input before the next tick is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let max = Duration::from_millis(MAX_POLL_MS);
        if self.cancelled {
            return max;
        }
        self.next_due.saturating_duration_since(now).min(max)
    }

    /// Number of whole periods that elapsed up to `now`, advancing the schedule.
    /// A stalled loop catches up on missed ticks instead of dropping them.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        if self.cancelled || now < self.next_due || self.period.is_zero() {
            return 0;
        }

        let mut count = 0u32;
        while self.next_due <= now {
            self.next_due += self.period;
            count = count.saturating_add(1);
        }
        count
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
