use chrono::{DateTime, Utc};

/// Current-time source, injected so tests can pin the clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
