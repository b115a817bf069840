//! CandidateStore building and validation.
//!
//! Loading a snapshot is three steps:
//! 1. Parse the export file into candidate rows
//! 2. Validate the rows (unique ids, sane numeric fields)
//! 3. Insert them in file order

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

impl CandidateStore {
    /// Load a candidate snapshot from a `.json` or `.jsonl` export.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading candidates from {}", path.display());

        let candidates = parser::parse_candidates(path)?;
        debug!("Parsed {} candidate rows", candidates.len());

        let store = Self::from_candidates(candidates)?;
        info!("Loaded {} candidates", store.len());
        Ok(store)
    }

    /// Build a store from already-parsed rows, validating them first.
    pub fn from_candidates(candidates: Vec<Candidate>) -> Result<Self> {
        validate(&candidates)?;
        Ok(candidates.into_iter().collect())
    }
}

/// Validate a batch of candidate rows.
///
/// Checks that:
/// - no two rows share an id
/// - experience and compensation are finite and non-negative
fn validate(candidates: &[Candidate]) -> Result<()> {
    let mut seen: HashSet<&CandidateId> = HashSet::with_capacity(candidates.len());

    for candidate in candidates {
        if !seen.insert(&candidate.id) {
            return Err(DataLoadError::DuplicateId(candidate.id.to_string()));
        }
        if !candidate.experience_years.is_finite() || candidate.experience_years < 0.0 {
            return Err(DataLoadError::InvalidValue {
                id: candidate.id.to_string(),
                field: "experienceYears".to_string(),
                value: candidate.experience_years.to_string(),
            });
        }
        if !candidate.current_ctc.is_finite() || candidate.current_ctc < 0.0 {
            return Err(DataLoadError::InvalidValue {
                id: candidate.id.to_string(),
                field: "currentCtc".to_string(),
                value: candidate.current_ctc.to_string(),
            });
        }
        if candidate.name.trim().is_empty() {
            return Err(DataLoadError::ValidationError(format!(
                "candidate {} has no name",
                candidate.id
            )));
        }
    }
    Ok(())
}
