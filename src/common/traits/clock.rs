//! Injectable source of the current date
//!
//! Age is computed against "today", so evaluations depend on the clock they
//! are given. Tests and replays pin it with [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Create a clock pinned to `date`
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
