//! Credential-store interface consumed by the extraction pipeline.
//!
//! User accounts, password hashing, and the tables behind this interface
//! belong to the hosting service; the pipeline only ever reads. The trait
//! is async so a relational backend can implement it directly;
//! [`crate::memory::MemoryCredentialStore`] is the in-tree implementation
//! for tests and local development.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::venue::VenueCode;

/// A user's stored login for one venue.
///
/// A row may exist with `None` login fields: the user is registered for
/// the venue but has not entered credentials yet. That state is
/// "not yet configured", not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueCredential {
    pub user_id: String,
    pub venue: VenueCode,
    pub venue_login_id: Option<String>,
    pub venue_password: Option<String>,
}

impl VenueCredential {
    /// Whether both login id and password are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.venue_login_id.is_some() && self.venue_password.is_some()
    }

    /// The `(login_id, password)` pair, when configured.
    #[must_use]
    pub fn login_pair(&self) -> Option<(&str, &str)> {
        match (&self.venue_login_id, &self.venue_password) {
            (Some(id), Some(password)) => Some((id.as_str(), password.as_str())),
            _ => None,
        }
    }
}

/// Immutable reference data for one venue: where to log in and how to
/// present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueMetadata {
    pub venue: VenueCode,
    /// Base URL of the venue's login page; adapters append venue-specific
    /// path suffixes where the site requires them.
    pub login_url: String,
    pub icon: String,
    pub description: String,
}

/// One entry of a user's registration listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenueRegistration {
    pub venue: VenueCode,
    /// Whether the credential row carries a login id and password.
    pub has_credentials: bool,
}

/// Errors from the credential-store backend.
///
/// Backend failures abort a whole extraction call; they are never treated
/// as a per-venue condition.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("credential store backend error: {0}")]
    Backend(String),
}

/// Read-only lookups the extraction pipeline needs from the hosting
/// service.
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    /// Venues the user is registered for, with a flag for whether
    /// credentials are stored.
    async fn registered_venues(
        &self,
        user_id: &str,
    ) -> Result<Vec<VenueRegistration>, StoreError>;

    /// The credential row for one user/venue pair, if any.
    async fn credential(
        &self,
        user_id: &str,
        venue: VenueCode,
    ) -> Result<Option<VenueCredential>, StoreError>;

    /// Reference data for one venue, if known to the store.
    async fn venue_metadata(
        &self,
        venue: VenueCode,
    ) -> Result<Option<VenueMetadata>, StoreError>;
}
