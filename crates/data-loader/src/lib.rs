//! # Data Loader Crate
//!
//! This crate owns the candidate records and the way they get into memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Candidate, CandidateStore, User)
//! - **parser**: Parse `.json` / `.jsonl` exports into Rust structs
//! - **index**: Build and validate a `CandidateStore`
//! - **gateway**: The `PortalGateway` seam standing in for the hosted backend
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{CandidateStore, InMemoryGateway, PortalGateway};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let store = CandidateStore::load_from_file(Path::new("data/candidates.json"))?;
//! let gateway = InMemoryGateway::new(Arc::new(store));
//! let candidates = gateway.get_candidates()?;
//! ```

pub mod error;
pub mod gateway;
pub mod index;
pub mod parser;
pub mod types;

pub use error::{DataLoadError, Result};
pub use gateway::{InMemoryGateway, PortalGateway};
pub use types::{Candidate, CandidateId, CandidateStatus, CandidateStore, Role, User};
