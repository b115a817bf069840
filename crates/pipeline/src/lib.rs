//! Search, filtering, ordering and paging of candidates.
//!
//! This crate provides:
//! - Boolean query evaluation over a candidate's searchable text
//! - Filter trait and implementations for each sidebar criterion
//! - FilterPipeline for composing filters
//! - FilterCriteria, the caller-facing criteria set
//! - Stable sorting and fixed-size pagination
//! - Facet option lists for the filter widgets
//!
//! ## Architecture
//! A search runs in stages over an immutable candidate slice:
//! 1. The query and every active criterion are tested per candidate (ANDed)
//! 2. Survivors are stably sorted on the chosen column
//! 3. The requested page is sliced out
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterCriteria, SearchRequest, SortOrder};
//!
//! let mut criteria = FilterCriteria::new();
//! criteria.current_cities.insert("Pune".to_string());
//!
//! let page = SearchRequest::new("\"Java\" AND \"Spring Boot\"")
//!     .with_criteria(criteria)
//!     .with_sort(SortOrder::from_identifiers("experience", "desc"))
//!     .execute(store.candidates(), chrono::Utc::now());
//! ```

pub mod criteria;
pub mod facets;
pub mod filter_pipeline;
pub mod filters;
pub mod paginate;
pub mod request;
pub mod search;
pub mod sort;
pub mod traits;

// Re-export main types
pub use criteria::FilterCriteria;
pub use facets::FacetOptions;
pub use filter_pipeline::{DEFAULT_PARALLEL_THRESHOLD, FilterPipeline};
pub use filters::RangeCriterion;
pub use paginate::{Page, paginate, total_pages};
pub use request::{DEFAULT_PAGE_SIZE, SearchRequest};
pub use search::{BooleanQuery, matches_query, searchable_text};
pub use sort::{SortDirection, SortField, SortOrder};
pub use traits::Filter;
