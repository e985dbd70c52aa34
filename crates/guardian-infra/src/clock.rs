//! Wall-clock time source.

use chrono::{DateTime, Utc};

use guardian_core::ports::Clock;

/// System UTC clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
