//! Time source for handlers
//!
//! Contract creation compares against `now`; valuation uses `today`. Handlers
//! read both through [`Clock`] so tests can pin them.

use chrono::NaiveDateTime;
use pricer_core::types::Date;

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Current local date-time
    fn now(&self) -> NaiveDateTime;

    /// Current local date
    fn today(&self) -> Date {
        Date::from(self.now().date())
    }
}

/// Wall clock in local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
