//! Inclusive numeric range filters.
//!
//! Experience, compensation and year of passing all share one shape: an
//! optional `[min, max]` pair that is inclusive at both ends. `None` means
//! the slider was never touched; any range that is set is enforced, even
//! one spanning the slider's full width.

use crate::traits::Filter;
use data_loader::Candidate;
use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` pair.
///
/// `min <= max` is the caller's job; an inverted range matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeCriterion<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> RangeCriterion<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Range built from optional ends, the missing one taken from `bounds`.
    ///
    /// Gives `None` when neither end is set.
    pub fn from_ends(min: Option<T>, max: Option<T>, bounds: Self) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(Self::new(min.unwrap_or(bounds.min), max.unwrap_or(bounds.max)))
    }
}

impl RangeCriterion<f32> {
    /// Experience slider bounds, in years
    pub const EXPERIENCE: Self = Self::new(0.0, 30.0);
}

impl RangeCriterion<f64> {
    /// Compensation slider bounds, in lakhs per annum
    pub const SALARY: Self = Self::new(0.0, 100.0);
}

impl RangeCriterion<u16> {
    /// Year-of-passing slider bounds
    pub const YEAR_OF_PASSING: Self = Self::new(1980, 2030);
}

/// Whether `value` passes an optional range.
///
/// No range admits everything. A set range rejects a missing value.
pub fn admits<T: PartialOrd + Copy>(range: Option<RangeCriterion<T>>, value: Option<T>) -> bool {
    match range {
        None => true,
        Some(range) => value.is_some_and(|value| range.contains(value)),
    }
}

/// Keeps candidates whose numeric field falls inside a range.
///
/// A candidate with no value for the field (only possible for year of
/// passing) fails an active range.
pub struct RangeFilter<T> {
    name: &'static str,
    range: Option<RangeCriterion<T>>,
    value: fn(&Candidate) -> Option<T>,
}

impl<T: PartialOrd + Copy> RangeFilter<T> {
    /// Create a range filter over an arbitrary field.
    ///
    /// # Arguments
    /// * `name` - Filter name for logging
    /// * `range` - The selected bounds, `None` for unrestricted
    /// * `value` - Field accessor
    pub fn new(
        name: &'static str,
        range: Option<RangeCriterion<T>>,
        value: fn(&Candidate) -> Option<T>,
    ) -> Self {
        Self { name, range, value }
    }
}

fn experience(candidate: &Candidate) -> Option<f32> {
    Some(candidate.experience_years)
}

fn salary(candidate: &Candidate) -> Option<f64> {
    Some(candidate.current_ctc)
}

fn year_of_passing(candidate: &Candidate) -> Option<u16> {
    candidate.year_of_passing
}

impl RangeFilter<f32> {
    pub fn experience(range: Option<RangeCriterion<f32>>) -> Self {
        Self::new("ExperienceFilter", range, experience)
    }
}

impl RangeFilter<f64> {
    pub fn salary(range: Option<RangeCriterion<f64>>) -> Self {
        Self::new("SalaryFilter", range, salary)
    }
}

impl RangeFilter<u16> {
    pub fn year_of_passing(range: Option<RangeCriterion<u16>>) -> Self {
        Self::new("YearOfPassingFilter", range, year_of_passing)
    }
}

impl<T> Filter for RangeFilter<T>
where
    T: PartialOrd + Copy + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn is_active(&self) -> bool {
        self.range.is_some()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        admits(self.range, (self.value)(candidate))
    }
}
