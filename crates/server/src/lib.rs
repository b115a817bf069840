//! Server crate for the talent search service.
//!
//! This crate contains the orchestrator that runs resume searches for a
//! signed-in recruiter, plus the config and session types it depends on.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod session;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use orchestrator::{SearchOrchestrator, SearchResults};
pub use session::Session;
