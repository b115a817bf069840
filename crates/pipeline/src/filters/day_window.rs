//! "Within the last N days" filters.
//!
//! Age is counted in whole days: the millisecond difference between the
//! evaluation instant and the stored timestamp, floor-divided by the
//! length of a day. A record exactly N days old still passes.

use crate::traits::Filter;
use chrono::{DateTime, Utc};
use data_loader::Candidate;

/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Whole days from `timestamp` to `now`, rounded down.
///
/// Timestamps in the future give a negative count.
pub fn days_between(now: DateTime<Utc>, timestamp: DateTime<Utc>) -> i64 {
    (now - timestamp).num_milliseconds().div_euclid(MS_PER_DAY)
}

/// Whether `timestamp` is no older than `max_days` at `now`.
///
/// `None` for the window admits everything; a missing timestamp fails a
/// set window.
pub fn within_days(
    max_days: Option<u32>,
    timestamp: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    let Some(max_days) = max_days else {
        return true;
    };
    timestamp.is_some_and(|ts| days_between(now, ts) <= i64::from(max_days))
}

/// Keeps candidates whose timestamp is no older than `max_days`.
///
/// `None` restricts nothing. A candidate without the timestamp fails an
/// active window.
pub struct DayWindowFilter {
    name: &'static str,
    max_days: Option<u32>,
    now: DateTime<Utc>,
    timestamp: fn(&Candidate) -> Option<DateTime<Utc>>,
}

fn registered_at(c: &Candidate) -> Option<DateTime<Utc>> {
    c.registered_at
}

fn last_active(c: &Candidate) -> Option<DateTime<Utc>> {
    c.last_active
}

impl DayWindowFilter {
    /// # Arguments
    /// * `max_days` - Window length, `None` for unrestricted
    /// * `now` - Evaluation instant shared by every candidate in a pass
    pub fn registered_within(max_days: Option<u32>, now: DateTime<Utc>) -> Self {
        Self {
            name: "RegisteredWithinFilter",
            max_days,
            now,
            timestamp: registered_at,
        }
    }

    pub fn active_within(max_days: Option<u32>, now: DateTime<Utc>) -> Self {
        Self {
            name: "ActiveWithinFilter",
            max_days,
            now,
            timestamp: last_active,
        }
    }
}

impl Filter for DayWindowFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn is_active(&self) -> bool {
        self.max_days.is_some()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        within_days(self.max_days, (self.timestamp)(candidate), self.now)
    }
}
