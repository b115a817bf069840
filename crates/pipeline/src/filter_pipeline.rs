//! Conjunctive filter chain.
//!
//! `FilterPipeline` holds the search filter and every sidebar criterion,
//! built up with `add_filter`, and runs them one after another over a
//! borrowed candidate list.

use crate::traits::Filter;
use data_loader::Candidate;
use rayon::prelude::*;

/// Collections at least this large are filtered on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// An ordered list of filters that a candidate must all pass.
///
/// A candidate survives the pipeline only if every active filter keeps
/// it. Inactive filters (criteria left at their defaults) are skipped.
/// Surviving candidates keep their input order.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter::new("\"Java\" AND \"AWS\""))
///     .add_filter(RangeFilter::experience(Some(RangeCriterion::new(2.0, 8.0))))
///     .add_filter(MembershipFilter::current_city(cities));
///
/// let kept = pipeline.apply_slice(store.candidates());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
    parallel_threshold: usize,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Set the collection size at which a filter pass moves onto rayon.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Number of filters that actually restrict something
    pub fn active_count(&self) -> usize {
        self.active_filters().count()
    }

    /// Names of the active filters, in evaluation order
    pub fn active_names(&self) -> Vec<&str> {
        self.active_filters().map(|f| f.name()).collect()
    }

    fn active_filters(&self) -> impl Iterator<Item = &dyn Filter> {
        self.filters
            .iter()
            .map(|f| f.as_ref())
            .filter(|f| f.is_active())
    }

    /// Test one candidate against every active filter.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.active_filters().all(|f| f.matches(candidate))
    }

    /// Apply all active filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each active filter in order:
    ///    a. Log filter name and input count
    ///    b. Keep the candidates it matches (in parallel above the threshold)
    ///    c. Log output count
    /// 3. Return the survivors, still in input order
    pub fn apply<'a>(&self, candidates: Vec<&'a Candidate>) -> Vec<&'a Candidate> {
        let mut current = candidates;
        for filter in self.active_filters() {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = if current.len() >= self.parallel_threshold {
                current
                    .into_par_iter()
                    .filter(|candidate| filter.matches(candidate))
                    .collect()
            } else {
                current
                    .into_iter()
                    .filter(|candidate| filter.matches(candidate))
                    .collect()
            };
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Apply the pipeline to a borrowed collection.
    pub fn apply_slice<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        self.apply(candidates.iter().collect())
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
