//! Errors surfaced by the search service.
//!
//! The search pipeline itself cannot fail; everything here comes from the
//! session check, the gateway or the worker thread.

use data_loader::{DataLoadError, Role};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// No account is signed in
    #[error("Not signed in")]
    NotSignedIn,

    /// The signed-in role may not browse candidates
    #[error("Access denied for role {role}")]
    AccessDenied { role: Role },

    /// The requested candidate does not exist
    #[error("Candidate {0} not found")]
    CandidateNotFound(String),

    /// The backend could not produce a snapshot
    #[error("Gateway error: {0}")]
    Gateway(#[from] DataLoadError),

    /// The blocking search task panicked or was cancelled
    #[error("Search worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, SearchError>;
