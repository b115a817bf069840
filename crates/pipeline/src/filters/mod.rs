//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod day_window;
pub mod membership;
pub mod range;
pub mod search_filter;

// Re-export for convenience
pub use day_window::{DayWindowFilter, MS_PER_DAY, days_between, within_days};
pub use membership::{FieldValues, MembershipFilter, admits_any, admits_value};
pub use range::{RangeCriterion, RangeFilter, admits};
pub use search_filter::SearchFilter;
