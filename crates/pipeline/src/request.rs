//! One full resume search: query, criteria, order and page.
//!
//! Evaluation order is search and filters (one pipeline, ANDed), then a
//! stable sort, then the page slice. The candidate slice is only borrowed
//! and comes back as references into it.

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::SearchFilter;
use crate::paginate::{Page, paginate};
use crate::sort::SortOrder;
use chrono::{DateTime, Utc};
use data_loader::Candidate;
use serde::{Deserialize, Serialize};

/// Rows per page on the resume search table
pub const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub criteria: FilterCriteria,
    pub sort: SortOrder,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            criteria: FilterCriteria::default(),
            sort: SortOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// The search predicate followed by every criterion, as one pipeline.
    pub fn build_pipeline(&self, now: DateTime<Utc>) -> FilterPipeline {
        let pipeline = FilterPipeline::new().add_filter(SearchFilter::new(&self.query));
        self.criteria.extend_pipeline(pipeline, now)
    }

    /// Run the whole search with a default pipeline.
    pub fn execute<'a>(&self, candidates: &'a [Candidate], now: DateTime<Utc>) -> Page<&'a Candidate> {
        self.execute_with(&self.build_pipeline(now), candidates)
    }

    /// Run the search with a pipeline the caller already built.
    pub fn execute_with<'a>(
        &self,
        pipeline: &FilterPipeline,
        candidates: &'a [Candidate],
    ) -> Page<&'a Candidate> {
        let mut kept = pipeline.apply_slice(candidates);
        self.sort.sort(&mut kept);
        paginate(kept, self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::RangeCriterion;
    use crate::sort::{SortDirection, SortField};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn pool() -> Vec<Candidate> {
        (0..53)
            .map(|i| {
                let mut c = Candidate::new(i, format!("Candidate {i:02}"));
                c.experience_years = (i % 7) as f32;
                c.skills = vec![if i % 2 == 0 { "Java" } else { "Python" }.to_string()];
                c
            })
            .collect()
    }

    #[test]
    fn test_default_request() {
        let request = SearchRequest::default();
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(request.build_pipeline(now()).active_count(), 0);
    }

    #[test]
    fn test_pages_of_unfiltered_pool() {
        let all = pool();
        let page = SearchRequest::default().with_page(3, 25).execute(&all, now());

        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_items, 53);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].name, "Candidate 50");
    }

    #[test]
    fn test_search_filter_and_sort_compose() {
        let all = pool();
        let mut criteria = FilterCriteria::new();
        criteria.experience = Some(RangeCriterion::new(5.0, 6.0));

        let page = SearchRequest::new("java")
            .with_criteria(criteria)
            .with_sort(SortOrder::new(SortField::Experience, SortDirection::Descending))
            .execute(&all, now());

        assert!(page.items.iter().all(|c| c.skills == vec!["Java"]));
        assert!(page.items.iter().all(|c| c.experience_years >= 5.0));
        let years: Vec<f32> = page.items.iter().map(|c| c.experience_years).collect();
        let mut sorted = years.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(years, sorted);
    }

    #[test]
    fn test_deserialize_request() {
        let request: SearchRequest = serde_json::from_str(
            r#"{"query": "\"React\" OR \"Angular\"", "sort": {"field": "name", "direction": "descending"}, "page": 2}"#,
        )
        .unwrap();

        assert_eq!(request.query, r#""React" OR "Angular""#);
        assert_eq!(request.sort, SortOrder::new(SortField::Name, SortDirection::Descending));
        assert_eq!(request.page, 2);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
    }
}
