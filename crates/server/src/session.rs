//! Explicit session context.
//!
//! The signed-in account is carried in a `Session` value handed to each
//! service call instead of living in global state.

use crate::error::{Result, SearchError};
use data_loader::{PortalGateway, Role, User};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Session for whoever the gateway is authenticated as
    pub fn from_gateway(gateway: &dyn PortalGateway) -> Self {
        Self {
            user: gateway.get_current_user(),
        }
    }

    /// Admins and clients may browse candidates; applicants may not.
    pub fn require_recruiter(&self) -> Result<&User> {
        let user = self.user.as_ref().ok_or(SearchError::NotSignedIn)?;
        match user.role {
            Role::Admin | Role::Client => Ok(user),
            Role::Applicant => {
                warn!("Rejected candidate search for {} ({})", user.email, user.role);
                Err(SearchError::AccessDenied { role: user.role })
            }
        }
    }
}
