//! Clock abstraction so token-expiry checks stay deterministic in tests.

use chrono::{DateTime, Utc};

/// Source of the current time for expiry checks.
pub trait Clock: Send + Sync {
    /// Get the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// System clock using actual wall time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant, for tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FrozenClock(pub DateTime<Utc>);

#[cfg(test)]
impl FrozenClock {
    /// Freeze the clock at an RFC 3339 instant.
    pub fn at(rfc3339: &str) -> Self {
        Self(
            DateTime::parse_from_rfc3339(rfc3339)
                .expect("valid RFC 3339")
                .with_timezone(&Utc),
        )
    }
}

#[cfg(test)]
impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
