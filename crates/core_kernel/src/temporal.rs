//! Injectable time source
//!
//! Date rules (birth date ranges, contract start windows, tenure checks) all
//! read "now" through a [`Clock`] so tests can pin it.
//!
//! Instants are truncated to microseconds, the precision of `TIMESTAMPTZ`,
//! so a persisted timestamp reads back unchanged.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

/// Fractional-second digits kept by every [`Clock`]
pub const TIMESTAMP_PRECISION: u16 = 6;

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of [`Clock::now`] in UTC
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(TIMESTAMP_PRECISION)
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at.trunc_subsecs(TIMESTAMP_PRECISION))
    }

    /// Clock frozen at midnight UTC of the given date
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// True when `date` lies in the closed interval `[min, max]`
pub fn within(date: NaiveDate, min: NaiveDate, max: NaiveDate) -> bool {
    date >= min && date <= max
}
