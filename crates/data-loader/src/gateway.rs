//! Narrow interface to the hosted backend.
//!
//! The portal reads candidates and the signed-in account from a hosted
//! database service. Everything above this crate talks to it through
//! `PortalGateway`, so the search pipeline can run against in-memory
//! fixtures.

use crate::error::Result;
use crate::types::{Candidate, CandidateId, CandidateStore, User};
use std::sync::Arc;

/// Read access to the hosted backend.
///
/// `Send + Sync` so one gateway can be shared across request tasks.
pub trait PortalGateway: Send + Sync {
    /// Fetch the current candidate snapshot, in backend order.
    fn get_candidates(&self) -> Result<Vec<Candidate>>;

    /// Fetch one candidate by id.
    ///
    /// The default scans the snapshot; backends with keyed lookup override it.
    fn get_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>> {
        Ok(self.get_candidates()?.into_iter().find(|c| &c.id == id))
    }

    /// The account this gateway is authenticated as, if any.
    fn get_current_user(&self) -> Option<User>;
}

/// Gateway backed by a loaded `CandidateStore`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateway {
    store: Arc<CandidateStore>,
    current_user: Option<User>,
}

impl InMemoryGateway {
    pub fn new(store: Arc<CandidateStore>) -> Self {
        Self {
            store,
            current_user: None,
        }
    }

    /// Set the signed-in account (builder pattern)
    pub fn with_user(mut self, user: User) -> Self {
        self.current_user = Some(user);
        self
    }

}

impl PortalGateway for InMemoryGateway {
    fn get_candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.store.candidates().to_vec())
    }

    fn get_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>> {
        Ok(self.store.get(id).cloned())
    }

    fn get_current_user(&self) -> Option<User> {
        self.current_user.clone()
    }
}
