//! # Search Orchestrator
//!
//! This module coordinates a resume search end to end:
//! 1. Check the session may browse candidates
//! 2. Fetch the candidate snapshot from the gateway
//! 3. Build the filter pipeline (query + criteria)
//! 4. Filter, sort and page on a blocking worker
//! 5. Return the page with owned records
//!
//! The pipeline is CPU-bound and synchronous, so it runs under
//! `spawn_blocking`; the orchestrator itself is cheap to clone and share
//! between request tasks.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use data_loader::{Candidate, CandidateId, PortalGateway};
use pipeline::{FacetOptions, Page, SearchRequest};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::session::Session;

/// A page of search results returned to the caller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub page: Page<Candidate>,
    /// Names of the filters that restricted this search
    pub active_filters: Vec<String>,
    /// Size of the snapshot that was searched
    pub scanned: usize,
}

/// Main orchestrator that coordinates the search pipeline
#[derive(Clone)]
pub struct SearchOrchestrator {
    gateway: Arc<dyn PortalGateway>,
    config: SearchConfig,
}

impl SearchOrchestrator {
    pub fn new(gateway: Arc<dyn PortalGateway>, config: SearchConfig) -> Self {
        Self { gateway, config }
    }

    /// Session for the account the gateway is signed in as
    pub fn current_session(&self) -> Session {
        Session::from_gateway(self.gateway.as_ref())
    }

    /// Main entry point: run a search evaluated at the current time.
    pub async fn search(&self, session: &Session, request: SearchRequest) -> Result<SearchResults> {
        self.search_at(session, request, Utc::now()).await
    }

    /// Run a search with an explicit evaluation instant for day windows.
    pub async fn search_at(
        &self,
        session: &Session,
        mut request: SearchRequest,
        now: DateTime<Utc>,
    ) -> Result<SearchResults> {
        let start_time = Instant::now();

        let user = session.require_recruiter()?;
        debug!("Search by {} for {:?}", user.email, request.query);

        request.page_size = self.config.effective_page_size(request.page_size);

        let candidates = self.fetch_candidates().await?;
        let scanned = candidates.len();

        let parallel_threshold = self.config.parallel_threshold;
        let (page, active_filters) = tokio::task::spawn_blocking(move || {
            let pipeline = request
                .build_pipeline(now)
                .with_parallel_threshold(parallel_threshold);
            let active_filters: Vec<String> = pipeline
                .active_names()
                .into_iter()
                .map(str::to_string)
                .collect();
            let page = request
                .execute_with(&pipeline, &candidates)
                .map(Candidate::clone);
            (page, active_filters)
        })
        .await?;

        info!(
            "Search matched {} of {} candidates ({} active filters), page {}/{} in {:.2?}",
            page.total_items,
            scanned,
            active_filters.len(),
            page.page,
            page.total_pages,
            start_time.elapsed()
        );

        Ok(SearchResults {
            page,
            active_filters,
            scanned,
        })
    }

    /// Option lists for the filter sidebar
    pub async fn facets(&self, session: &Session) -> Result<FacetOptions> {
        session.require_recruiter()?;
        let candidates = self.fetch_candidates().await?;
        let facets =
            tokio::task::spawn_blocking(move || FacetOptions::collect(&candidates)).await?;
        Ok(facets)
    }

    /// Full record for one candidate
    pub async fn candidate_profile(&self, session: &Session, id: &CandidateId) -> Result<Candidate> {
        session.require_recruiter()?;
        let gateway = self.gateway.clone();
        let key = id.clone();
        tokio::task::spawn_blocking(move || gateway.get_candidate(&key))
            .await??
            .ok_or_else(|| SearchError::CandidateNotFound(id.to_string()))
    }

    /// Pull a snapshot from the gateway off the async threads
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>> {
        let gateway = self.gateway.clone();
        let candidates = tokio::task::spawn_blocking(move || gateway.get_candidates()).await??;
        debug!("Fetched {} candidates from gateway", candidates.len());
        Ok(candidates)
    }
}
