//! Fetch trigger throttling
//!
//! The remote service has no built-in rate limiting; the client enforces a
//! short cooldown between consecutive "next quote" triggers instead. The
//! cooldown gates trigger rate only; a fetch already in flight is never
//! aborted.

use std::time::{Duration, Instant};

use crate::config::ui::FETCH_COOLDOWN_MS;

/// Minimum-interval gate for fetch triggers
#[derive(Debug)]
pub struct FetchCooldown {
    interval: Duration,
    last_trigger: Option<Instant>,
}

impl FetchCooldown {
    /// Cooldown with the standard interval
    pub fn standard() -> Self {
        Self::new(Duration::from_millis(FETCH_COOLDOWN_MS))
    }

    /// Cooldown with a custom interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_trigger: None,
        }
    }

    /// Register a trigger attempt
    ///
    /// Returns `true` and arms the cooldown when enough time has passed
    /// since the last accepted trigger, `false` otherwise.
    pub fn try_trigger(&mut self) -> bool {
        let now = Instant::now();
        match self.last_trigger {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_trigger = Some(now);
                true
            }
        }
    }

    /// Time left until the next trigger will be accepted
    pub fn remaining(&self) -> Duration {
        match self.last_trigger {
            Some(last) => self.interval.saturating_sub(last.elapsed()),
            None => Duration::ZERO,
        }
    }
}

impl Default for FetchCooldown {
    fn default() -> Self {
        Self::standard()
    }
}
