//! Adapter running a Boolean search query as a pipeline filter.
//!
//! Putting the query in the same pipeline as the structured criteria is
//! what joins search and filters with AND.

use crate::search::BooleanQuery;
use crate::traits::Filter;
use data_loader::Candidate;

/// Keeps candidates matching a free-text Boolean query.
pub struct SearchFilter {
    query: BooleanQuery,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: BooleanQuery::parse(query),
        }
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn is_active(&self) -> bool {
        !self.query.is_match_all()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        self.query.matches_candidate(candidate)
    }
}
