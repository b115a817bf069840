//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible criteria to be applied to a candidate collection.

use data_loader::Candidate;

/// A single yes/no criterion over one candidate.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a filter to be evaluated from rayon workers
/// - Filters never see or mutate the collection, only one borrowed record
/// - A filter left at its unrestricted default reports `is_active() == false`
///   and the pipeline skips it
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether this filter restricts anything at all.
    fn is_active(&self) -> bool {
        true
    }

    /// Decide whether `candidate` passes this filter.
    fn matches(&self, candidate: &Candidate) -> bool;
}
