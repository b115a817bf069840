//! Search service configuration.
//!
//! Defaults suit the resume search page; every value can be overridden
//! through `TALENT_SEARCH_*` environment variables.

use pipeline::{DEFAULT_PAGE_SIZE, DEFAULT_PARALLEL_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Candidate export to load (`.json` or `.jsonl`)
    pub data_file: PathBuf,
    /// Page size used when a request asks for zero rows
    pub page_size: usize,
    /// Upper bound on rows per page
    pub max_page_size: usize,
    /// Collection size at which filtering moves onto rayon
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/candidates.json"),
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 100,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SearchConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("TALENT_SEARCH_DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }
        if let Some(v) = parse_var(&lookup, "TALENT_SEARCH_PAGE_SIZE") {
            config.page_size = v;
        }
        if let Some(v) = parse_var(&lookup, "TALENT_SEARCH_MAX_PAGE_SIZE") {
            config.max_page_size = v;
        }
        if let Some(v) = parse_var(&lookup, "TALENT_SEARCH_PARALLEL_THRESHOLD") {
            config.parallel_threshold = v;
        }

        config
    }

    /// Page size to use for a request: zero falls back to the default,
    /// anything above the cap is clamped.
    pub fn effective_page_size(&self, requested: usize) -> usize {
        let size = if requested == 0 { self.page_size } else { requested };
        size.min(self.max_page_size).max(1)
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, keeping default");
            None
        }
    }
}
